use continuum_core::{ContinuumError, DataType};

/// Represents a dataset that can be accessed by index.
///
/// A dataset is a collection of items, where each item can be a single sample,
/// a tuple (e.g., (sample, label, task id)), or any other custom type that
/// implements `Send + 'static`.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    ///
    /// This type must be `Send` and `'static` to allow for potential
    /// multi-threaded data loading in the future.
    type Item: Send + 'static;

    /// Returns the item at the given index.
    ///
    /// # Errors
    ///
    /// Returns `ContinuumError` if the index is out of bounds or if there's
    /// an issue retrieving the item.
    fn get(&self, index: usize) -> Result<Self::Item, ContinuumError>;

    /// Returns the total number of items in the dataset.
    fn len(&self) -> usize;

    /// Checks if the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A raw dataset handed to a scenario, which splits it into tasks.
///
/// `X` is the sample (an image, a path, ...) and `Y` its label. For
/// segmentation datasets `Y` is a reference to the sample's label map that a
/// [`LabelMapDecoder`](crate::decoder::LabelMapDecoder) can decode.
pub trait ContinuumDataset {
    type X: Clone + Send + Sync + 'static;
    type Y: Clone + Send + Sync + 'static;

    /// Returns every sample with its label, in dataset order.
    fn get_data(&self) -> Result<(Vec<Self::X>, Vec<Self::Y>), ContinuumError>;

    /// Whether this is the training split.
    fn is_train(&self) -> bool;

    /// Declared type of the samples.
    fn data_type(&self) -> DataType;
}
