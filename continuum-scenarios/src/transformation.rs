// continuum-scenarios/src/transformation.rs

use crate::scenario::Scenario;
use crate::selection::{select_data_by_task, TaskAssignment};
use continuum_core::task_index::wrap_negative;
use continuum_core::{Compose, ContinuumError, DataType, TaskIndex};
use continuum_data::{ContinuumDataset, TaskSet};
use log::{debug, info};

/// Every task contains the same data, seen through a different transformation.
///
/// A cheap way to build instance-incremental scenarios such as "permutations"
/// or "rotations". Classes are untouched: every task exposes every class and
/// labels are passed through as they are in the dataset.
///
/// Accessing a task never mutates the scenario. Each [`TaskSet`] carries its
/// own task-id array, filled with the accessed task.
#[derive(Debug, Clone)]
pub struct TransformationIncremental<X, Y> {
    x: Vec<X>,
    y: Vec<Y>,
    inc_trsf: Vec<Compose<X>>,
    base_trsf: Compose<X>,
    train: bool,
    data_type: DataType,
}

impl<X, Y> TransformationIncremental<X, Y>
where
    X: Clone + Send + Sync + 'static,
    Y: Clone + Send + Sync + 'static,
{
    /// Builds the scenario.
    ///
    /// # Arguments
    ///
    /// * `cl_dataset` - The dataset shared by all tasks.
    /// * `nb_tasks` - Number of tasks.
    /// * `incremental_transformations` - One transform chain per task.
    /// * `base_transformations` - Chain applied after the task's own chain, for every task.
    ///
    /// # Errors
    ///
    /// * `ContinuumError::MissingTransformations` if no task chains are given.
    /// * `ContinuumError::TransformationCountMismatch` if there is not exactly
    ///   one chain per task.
    /// * `ContinuumError::EmptyScenario` if `nb_tasks` is zero.
    pub fn new<D>(
        cl_dataset: &D,
        nb_tasks: usize,
        incremental_transformations: Option<Vec<Compose<X>>>,
        base_transformations: Compose<X>,
    ) -> Result<Self, ContinuumError>
    where
        D: ContinuumDataset<X = X, Y = Y>,
    {
        let inc_trsf = incremental_transformations.ok_or(ContinuumError::MissingTransformations)?;
        if inc_trsf.len() != nb_tasks {
            return Err(ContinuumError::TransformationCountMismatch {
                nb_tasks,
                nb_transformations: inc_trsf.len(),
            });
        }
        if nb_tasks == 0 {
            return Err(ContinuumError::EmptyScenario);
        }

        let (x, y) = cl_dataset.get_data()?;
        if y.len() != x.len() {
            return Err(ContinuumError::LengthMismatch {
                what: "dataset labels".to_string(),
                expected: x.len(),
                actual: y.len(),
            });
        }
        info!(
            "Transformation incremental scenario: {} samples, {} tasks",
            x.len(),
            nb_tasks
        );

        Ok(TransformationIncremental {
            x,
            y,
            inc_trsf,
            base_trsf: base_transformations,
            train: cl_dataset.is_train(),
            data_type: cl_dataset.data_type(),
        })
    }

    /// The task's own chain followed by the base chain.
    pub fn task_transformation(&self, task_index: usize) -> Result<Compose<X>, ContinuumError> {
        let task_trsf = self
            .inc_trsf
            .get(task_index)
            .ok_or(ContinuumError::TaskIndexOutOfRange {
                index: task_index as isize,
                nb_tasks: self.inc_trsf.len(),
            })?;
        Ok(task_trsf.then(&self.base_trsf))
    }

    /// Task id of every sample when `task_index` is accessed.
    pub fn task_ids(&self, task_index: usize) -> Vec<usize> {
        vec![task_index; self.x.len()]
    }

    pub fn base_transformations(&self) -> &Compose<X> {
        &self.base_trsf
    }

    pub fn incremental_transformations(&self) -> &[Compose<X>] {
        &self.inc_trsf
    }

    pub fn is_train(&self) -> bool {
        self.train
    }
}

impl<X, Y> Scenario for TransformationIncremental<X, Y>
where
    X: Clone + Send + Sync + 'static,
    Y: Clone + Send + Sync + 'static,
{
    type X = X;
    type Y = Y;

    fn nb_tasks(&self) -> usize {
        self.inc_trsf.len()
    }

    fn nb_samples(&self) -> usize {
        self.x.len()
    }

    /// Returns the task at `task_index`, between `-len` and `len - 1`.
    /// Indices below `-len` keep wrapping around. Slices are rejected.
    fn task_set(&self, task_index: TaskIndex) -> Result<TaskSet<X, Y>, ContinuumError> {
        let index = match task_index {
            TaskIndex::Slice(_) => return Err(ContinuumError::SliceNotSupported),
            TaskIndex::Index(index) => index,
        };
        let task = wrap_negative(index, self.nb_tasks())?;

        let t = self.task_ids(task);
        let selection = select_data_by_task(
            &self.x,
            &self.y,
            TaskAssignment::PerSample(&t),
            &TaskIndex::from(task),
            self.nb_tasks(),
        )?;
        let trsf = self.task_transformation(task)?;
        debug!("Task {} -> task {}, transforms {:?}", index, task, trsf.names());

        TaskSet::new(selection.x, selection.y, selection.t, trsf, None, self.data_type)
    }
}

#[cfg(test)]
#[path = "transformation_test.rs"]
mod tests;
