// dataloader.rs
//! # DataLoader
//!
//! Batches the items of a [`Dataset`] (typically a [`TaskSet`](crate::TaskSet)
//! returned by a scenario) in the order given by a [`Sampler`].
//!
//! ```rust
//! use continuum_core::{Compose, DataType};
//! use continuum_data::{DataLoader, SequentialSampler, TaskSet};
//!
//! let task_set = TaskSet::new(
//!     vec![1, 2, 3, 4, 5],
//!     vec![0, 0, 1, 1, 1],
//!     vec![2; 5],
//!     Compose::identity(),
//!     None,
//!     DataType::Tensor,
//! )
//! .unwrap();
//! let loader = DataLoader::new(task_set, 2, SequentialSampler::new(), false, None);
//! let batches: Vec<_> = loader.map(|b| b.unwrap()).collect();
//! assert_eq!(batches.len(), 3);
//! ```

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use continuum_core::ContinuumError;

/// Custom collate function, assembling the fetched items into a batch.
pub type CollateFn<D> = Box<
    dyn Fn(Vec<<D as Dataset>::Item>) -> Result<Vec<<D as Dataset>::Item>, ContinuumError>
        + Send
        + Sync,
>;

/// Iterates a dataset batch by batch.
///
/// Each call to `next` pulls up to `batch_size` indices from the sampler,
/// fetches the items and runs them through `collate_fn` when one is set.
pub struct DataLoader<D: Dataset, S: Sampler> {
    pub dataset: D,
    pub batch_size: usize,
    pub sampler: S,
    /// Drop the last batch if it is smaller than `batch_size`.
    pub drop_last: bool,
    pub collate_fn: Option<CollateFn<D>>,
    indices_iter: Box<dyn Iterator<Item = usize> + Send + Sync>,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    pub fn new(dataset: D, batch_size: usize, sampler: S, drop_last: bool, collate_fn: Option<CollateFn<D>>) -> Self {
        let indices_iter = sampler.iter(dataset.len());
        Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
            collate_fn,
            indices_iter,
        }
    }

    /// Number of batches one pass over the sampler yields.
    pub fn num_batches(&self) -> usize {
        if self.batch_size == 0 {
            return 0;
        }
        let total = self.sampler.len(self.dataset.len());
        if self.drop_last {
            total / self.batch_size
        } else {
            total.div_ceil(self.batch_size)
        }
    }

    /// Starts a new pass over the dataset.
    pub fn reset(&mut self) {
        self.indices_iter = self.sampler.iter(self.dataset.len());
    }
}

impl<D: Dataset, S: Sampler> Iterator for DataLoader<D, S> {
    type Item = Result<Vec<<D as Dataset>::Item>, ContinuumError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for _ in 0..self.batch_size {
            let Some(idx) = self.indices_iter.next() else {
                break;
            };
            match self.dataset.get(idx) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        match self.collate_fn {
            Some(ref collate_fn) => Some(collate_fn(batch)),
            None => Some(Ok(batch)),
        }
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
