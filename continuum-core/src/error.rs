use thiserror::Error;

/// Custom error type for the continuum crates.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ContinuumError {
    #[error("Unknown mode={0}, expected \"overlap\" or \"disjoint\".")]
    UnknownMode(String),

    #[error("Step in slice for segmentation is not supported (got step {step}).")]
    SteppedSlice { step: isize },

    #[error("Invalid slice: {message}")]
    InvalidSlice { message: String },

    #[error("Incremental training based on transformations does not support slice, please provide only integer.")]
    SliceNotSupported,

    #[error("The number of tasks ({nb_tasks}) is not equal to the number of transformations ({nb_transformations})")]
    TransformationCountMismatch {
        nb_tasks: usize,
        nb_transformations: usize,
    },

    #[error("For this scenario a list of transformations should be set")]
    MissingTransformations,

    #[error("Invalid increment: {0}")]
    InvalidIncrement(String),

    #[error("The increment list sums to {actual} but there are {expected} classes")]
    IncrementMismatch { expected: usize, actual: usize },

    #[error("The tasks won't have an equal number of classes: {nb_classes} classes, initial increment {initial_increment}, increment {increment}")]
    UnevenIncrement {
        nb_classes: usize,
        initial_increment: usize,
        increment: usize,
    },

    #[error("Invalid class order: {0}")]
    InvalidClassOrder(String),

    #[error("Invalid number of classes {nb_classes}, expected a value in 1..={max}")]
    InvalidNbClasses { nb_classes: usize, max: usize },

    #[error("Task index {index} is out of range for {nb_tasks} tasks")]
    TaskIndexOutOfRange { index: isize, nb_tasks: usize },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error("Scenario has no task")]
    EmptyScenario,

    #[error("Failed to decode label map {reference}: {reason}")]
    DecodeError { reference: String, reason: String },

    #[error("Label map creation error: data length {data_len} does not match shape {shape:?}")]
    LabelMapShape { data_len: usize, shape: Vec<usize> },

    #[error("I/O error on {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Cached membership has shape {actual:?}, expected {expected:?}")]
    CacheMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("Transform '{name}' failed: {reason}")]
    TransformError { name: String, reason: String },
}
