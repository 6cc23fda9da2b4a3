pub mod traits;
pub mod in_memory;

pub use traits::{ContinuumDataset, Dataset};
pub use in_memory::InMemoryDataset;
