// continuum-data/src/samplers/traits.rs

use std::fmt::Debug;

/// Defines the order in which a `DataLoader` visits the items of a task set.
pub trait Sampler: Debug + Send + Sync {
    /// Returns an iterator over item indices.
    ///
    /// # Arguments
    ///
    /// * `dataset_len` - The total number of items in the dataset.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync>;

    /// Returns the number of indices the iterator yields.
    fn len(&self, dataset_len: usize) -> usize;
}
