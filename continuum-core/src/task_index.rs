// continuum-core/src/task_index.rs

use crate::error::ContinuumError;
use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

/// A `start:stop:step` request over task indices.
///
/// Bounds follow Python slice semantics: missing bounds span every task,
/// negative bounds count from the end and out-of-range bounds are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskSlice {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl TaskSlice {
    /// A slice `start..stop` without step.
    pub fn new(start: Option<isize>, stop: Option<isize>) -> Self {
        TaskSlice {
            start,
            stop,
            step: None,
        }
    }

    /// A slice over every task.
    pub fn full() -> Self {
        TaskSlice::default()
    }

    pub fn with_step(mut self, step: isize) -> Self {
        self.step = Some(step);
        self
    }

    /// Resolves the slice into concrete task indices for a scenario of `nb_tasks` tasks.
    ///
    /// # Errors
    ///
    /// Returns `ContinuumError::InvalidSlice` for a zero or negative step.
    pub fn resolve(&self, nb_tasks: usize) -> Result<Vec<usize>, ContinuumError> {
        let step = self.step.unwrap_or(1);
        if step <= 0 {
            return Err(ContinuumError::InvalidSlice {
                message: format!("step must be positive, got {}", step),
            });
        }
        let len = nb_tasks as isize;
        let clamp = |bound: isize| -> usize {
            let bound = if bound < 0 { bound + len } else { bound };
            bound.clamp(0, len) as usize
        };
        let start = self.start.map(clamp).unwrap_or(0);
        let stop = self.stop.map(clamp).unwrap_or(nb_tasks);
        Ok((start..stop).step_by(step as usize).collect())
    }
}

impl fmt::Display for TaskSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |b: Option<isize>| b.map(|v| v.to_string()).unwrap_or_default();
        write!(f, "{}:{}", show(self.start), show(self.stop))?;
        if let Some(step) = self.step {
            write!(f, ":{}", step)?;
        }
        Ok(())
    }
}

/// Addresses one task or a contiguous group of tasks in a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskIndex {
    /// A single task. Negative values count from the end.
    Index(isize),
    /// A slice of tasks.
    Slice(TaskSlice),
}

impl TaskIndex {
    pub fn is_slice(&self) -> bool {
        matches!(self, TaskIndex::Slice(_))
    }

    /// Resolves the request into concrete, in-range task indices.
    ///
    /// # Errors
    ///
    /// * `ContinuumError::EmptyScenario` if `nb_tasks` is zero.
    /// * `ContinuumError::TaskIndexOutOfRange` for a single index past the last task.
    /// * `ContinuumError::InvalidSlice` for a slice with a non-positive step.
    pub fn resolve(&self, nb_tasks: usize) -> Result<Vec<usize>, ContinuumError> {
        match self {
            TaskIndex::Index(index) => Ok(vec![wrap_negative(*index, nb_tasks)?]),
            TaskIndex::Slice(slice) => {
                if nb_tasks == 0 {
                    return Err(ContinuumError::EmptyScenario);
                }
                slice.resolve(nb_tasks)
            }
        }
    }
}

/// Resolves a possibly negative task index.
///
/// Negative indices are wrapped modulo `nb_tasks`, so `-5` with four tasks
/// lands on task `3`.
///
/// # Errors
///
/// * `ContinuumError::EmptyScenario` if `nb_tasks` is zero.
/// * `ContinuumError::TaskIndexOutOfRange` if the index is `>= nb_tasks`.
pub fn wrap_negative(index: isize, nb_tasks: usize) -> Result<usize, ContinuumError> {
    if nb_tasks == 0 {
        return Err(ContinuumError::EmptyScenario);
    }
    let len = nb_tasks as isize;
    let wrapped = if index < 0 { index.rem_euclid(len) } else { index };
    if wrapped >= len {
        return Err(ContinuumError::TaskIndexOutOfRange { index, nb_tasks });
    }
    Ok(wrapped as usize)
}

impl fmt::Display for TaskIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskIndex::Index(index) => write!(f, "{}", index),
            TaskIndex::Slice(slice) => write!(f, "{}", slice),
        }
    }
}

impl From<isize> for TaskIndex {
    fn from(index: isize) -> Self {
        TaskIndex::Index(index)
    }
}

impl From<i32> for TaskIndex {
    fn from(index: i32) -> Self {
        TaskIndex::Index(index as isize)
    }
}

impl From<usize> for TaskIndex {
    fn from(index: usize) -> Self {
        TaskIndex::Index(isize::try_from(index).unwrap_or(isize::MAX))
    }
}

impl From<TaskSlice> for TaskIndex {
    fn from(slice: TaskSlice) -> Self {
        TaskIndex::Slice(slice)
    }
}

impl From<Range<isize>> for TaskIndex {
    fn from(range: Range<isize>) -> Self {
        TaskIndex::Slice(TaskSlice::new(Some(range.start), Some(range.end)))
    }
}

impl From<RangeFrom<isize>> for TaskIndex {
    fn from(range: RangeFrom<isize>) -> Self {
        TaskIndex::Slice(TaskSlice::new(Some(range.start), None))
    }
}

impl From<RangeTo<isize>> for TaskIndex {
    fn from(range: RangeTo<isize>) -> Self {
        TaskIndex::Slice(TaskSlice::new(None, Some(range.end)))
    }
}

impl From<RangeFull> for TaskIndex {
    fn from(_: RangeFull) -> Self {
        TaskIndex::Slice(TaskSlice::full())
    }
}

#[cfg(test)]
#[path = "task_index_test.rs"]
mod tests;
