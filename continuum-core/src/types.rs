/// Identifier of a semantic class, as stored in a dense label map.
///
/// Label maps are 8-bit, so the whole class domain is `0..=255`.
pub type ClassId = u8;

/// Pseudo-class marking "no object".
pub const BACKGROUND: ClassId = 0;

/// Pseudo-class marking pixels ignored during scoring.
pub const VOID: ClassId = 255;

/// Largest number of real classes a scenario can hold (every id but background and void).
pub const MAX_CLASSES: usize = 254;

/// Declared type of the samples carried by a dataset.
///
/// Opaque to the scenarios: it is forwarded untouched to every task bundle so
/// downstream code knows how to load `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    /// Samples are decoded images held in memory.
    #[default]
    ImageArray,
    /// Samples are paths to images on disk.
    ImagePath,
    /// Samples are tensors.
    Tensor,
    /// Samples are text.
    Text,
    /// Samples are image paths paired with label-map references.
    Segmentation,
}
