//! Continual-learning scenarios: split a dataset into an ordered sequence of tasks.
//!
//! - [`SegmentationClassIncremental`]: each task introduces new semantic classes;
//!   samples are dense label maps that may hold several classes at once.
//! - [`TransformationIncremental`]: every task sees every class, only the
//!   transform applied to the samples changes.

pub mod increments;
pub mod membership;
pub mod scenario;
pub mod segmentation;
pub mod selection;
pub mod transformation;

pub use increments::{define_increments, Increment};
pub use membership::{filter_samples, MembershipCache, MembershipMatrix, Mode};
pub use scenario::{Scenario, TaskIter};
pub use segmentation::{SegmentationClassIncremental, SegmentationOptions};
pub use selection::{select_data_by_task, Selection, TaskAssignment};
pub use transformation::TransformationIncremental;
