// continuum-scenarios/src/scenario.rs

use continuum_core::{ContinuumError, TaskIndex};
use continuum_data::TaskSet;

/// A dataset split into an ordered sequence of tasks.
pub trait Scenario {
    type X: Clone + Send + Sync + 'static;
    type Y: Clone + Send + Sync + 'static;

    /// Number of tasks in the scenario.
    fn nb_tasks(&self) -> usize;

    /// Number of samples in the underlying dataset.
    fn nb_samples(&self) -> usize;

    /// Returns the bundle for one task, or a group of tasks.
    fn task_set(&self, task_index: TaskIndex) -> Result<TaskSet<Self::X, Self::Y>, ContinuumError>;

    /// Shorthand for [`Scenario::task_set`] accepting integers and ranges.
    ///
    /// ```ignore
    /// let last = scenario.get(-1)?;
    /// let first_two = scenario.get(..2)?;
    /// ```
    fn get(&self, task_index: impl Into<TaskIndex>) -> Result<TaskSet<Self::X, Self::Y>, ContinuumError>
    where
        Self: Sized,
    {
        self.task_set(task_index.into())
    }

    /// Iterates the tasks in order.
    fn iter(&self) -> TaskIter<'_, Self>
    where
        Self: Sized,
    {
        TaskIter {
            scenario: self,
            next: 0,
        }
    }
}

/// Iterator over the task bundles of a scenario.
pub struct TaskIter<'a, S: Scenario> {
    scenario: &'a S,
    next: usize,
}

impl<S: Scenario> Iterator for TaskIter<'_, S> {
    type Item = Result<TaskSet<S::X, S::Y>, ContinuumError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.scenario.nb_tasks() {
            return None;
        }
        let task = self.next;
        self.next += 1;
        Some(self.scenario.task_set(TaskIndex::from(task)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.scenario.nb_tasks().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<S: Scenario> ExactSizeIterator for TaskIter<'_, S> {}
