// Core building blocks shared by the data and scenario crates.
pub mod error;
pub mod types;
pub mod class_set;
pub mod label_map;
pub mod remap;
pub mod task_index;
pub mod transform;

pub use class_set::ClassSet;
pub use error::ContinuumError;
pub use label_map::LabelMap;
pub use remap::LabelRemap;
pub use task_index::{TaskIndex, TaskSlice};
pub use transform::{Compose, Lambda, Transform};
pub use types::{ClassId, DataType, BACKGROUND, VOID};
