pub mod dataloader;
pub mod datasets;
pub mod decoder;
pub mod samplers;
pub mod task_set;

// Re-export main components
pub use dataloader::DataLoader;
pub use datasets::{ContinuumDataset, Dataset, InMemoryDataset};
pub use decoder::{InMemoryLabelMaps, LabelMapDecoder};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
pub use task_set::TaskSet;
