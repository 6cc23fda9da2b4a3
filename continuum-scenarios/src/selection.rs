// continuum-scenarios/src/selection.rs

use crate::membership::MembershipMatrix;
use continuum_core::{ContinuumError, TaskIndex};
use log::debug;

/// How samples are tied to tasks.
#[derive(Debug, Clone, Copy)]
pub enum TaskAssignment<'a> {
    /// Exactly one task id per sample.
    PerSample(&'a [usize]),
    /// Any number of tasks per sample.
    Matrix(&'a MembershipMatrix),
}

impl TaskAssignment<'_> {
    fn nb_samples(&self) -> usize {
        match self {
            TaskAssignment::PerSample(t) => t.len(),
            TaskAssignment::Matrix(matrix) => matrix.nb_samples(),
        }
    }
}

/// Samples picked for a task request.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<X, Y> {
    pub x: Vec<X>,
    pub y: Vec<Y>,
    /// Task id of every selected sample.
    pub t: Vec<usize>,
    /// The concrete tasks the request resolved to.
    pub task_indexes: Vec<usize>,
}

/// Selects the samples belonging to the requested task(s).
///
/// With a membership matrix a sample is selected when it belongs to any of
/// the requested tasks, and its reported task id is the earliest of those.
///
/// # Errors
///
/// * `ContinuumError::LengthMismatch` if `x`, `y` and `assignment` disagree on
///   the number of samples.
/// * Any error of [`TaskIndex::resolve`].
pub fn select_data_by_task<X: Clone, Y: Clone>(
    x: &[X],
    y: &[Y],
    assignment: TaskAssignment<'_>,
    task_index: &TaskIndex,
    nb_tasks: usize,
) -> Result<Selection<X, Y>, ContinuumError> {
    if y.len() != x.len() {
        return Err(ContinuumError::LengthMismatch {
            what: "labels".to_string(),
            expected: x.len(),
            actual: y.len(),
        });
    }
    if assignment.nb_samples() != x.len() {
        return Err(ContinuumError::LengthMismatch {
            what: "task assignment".to_string(),
            expected: x.len(),
            actual: assignment.nb_samples(),
        });
    }

    let task_indexes = task_index.resolve(nb_tasks)?;
    let mut requested = vec![false; nb_tasks];
    for &t in &task_indexes {
        requested[t] = true;
    }

    let mut selection = Selection {
        x: Vec::new(),
        y: Vec::new(),
        t: Vec::new(),
        task_indexes,
    };
    for index in 0..x.len() {
        let owner = match assignment {
            TaskAssignment::PerSample(t) => Some(t[index]).filter(|&t| t < nb_tasks && requested[t]),
            TaskAssignment::Matrix(matrix) => selection
                .task_indexes
                .iter()
                .copied()
                .filter(|&t| matrix.get(index, t))
                .min(),
        };
        if let Some(t) = owner {
            selection.x.push(x[index].clone());
            selection.y.push(y[index].clone());
            selection.t.push(t);
        }
    }

    debug!(
        "Selected {} of {} samples for task(s) {:?}",
        selection.x.len(),
        x.len(),
        selection.task_indexes
    );
    Ok(selection)
}

#[cfg(test)]
#[path = "selection_test.rs"]
mod tests;
