// continuum-scenarios/src/segmentation.rs
//! Class-incremental semantic segmentation.
//!
//! Every sample comes with a dense label map that may contain several classes.
//! Each task introduces a contiguous slice of the class order; which samples a
//! task receives depends on the chosen [`Mode`], and the labels of a task's
//! samples are rewritten by a [`LabelRemap`] built on every access.

use crate::increments::{define_increments, task_offsets, Increment};
use crate::membership::{extract_class_sets, filter_samples, MembershipCache, MembershipMatrix, Mode};
use crate::scenario::Scenario;
use crate::selection::{select_data_by_task, TaskAssignment};
use continuum_core::types::MAX_CLASSES;
use continuum_core::{
    ClassId, ClassSet, Compose, ContinuumError, DataType, LabelRemap, TaskIndex, BACKGROUND, VOID,
};
use continuum_data::{ContinuumDataset, LabelMapDecoder, TaskSet};
use log::{debug, info, warn};
use std::path::PathBuf;

/// Configuration of a [`SegmentationClassIncremental`] scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentationOptions {
    /// Number of real classes (background and void excluded).
    pub nb_classes: usize,
    /// Number of new classes per task, or an explicit list.
    pub increment: Increment,
    /// Size of the first task; `0` disables it. Ignored when `increment` is a list.
    pub initial_increment: usize,
    /// Custom class order. Defaults to `1..=nb_classes`.
    pub class_order: Option<Vec<ClassId>>,
    pub mode: Mode,
    /// At test time, score background as class `0` instead of ignoring it.
    pub test_background: bool,
    /// JSON file caching the membership matrix between runs. A cache built
    /// with another mode, increment list or class order is recomputed.
    pub save_indexes: Option<PathBuf>,
}

impl SegmentationOptions {
    pub fn new(nb_classes: usize, increment: impl Into<Increment>) -> Self {
        SegmentationOptions {
            nb_classes,
            increment: increment.into(),
            initial_increment: 0,
            class_order: None,
            mode: Mode::Overlap,
            test_background: true,
            save_indexes: None,
        }
    }

    pub fn with_initial_increment(mut self, initial_increment: usize) -> Self {
        self.initial_increment = initial_increment;
        self
    }

    pub fn with_class_order(mut self, class_order: Vec<ClassId>) -> Self {
        self.class_order = Some(class_order);
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_test_background(mut self, test_background: bool) -> Self {
        self.test_background = test_background;
        self
    }

    pub fn with_save_indexes(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_indexes = Some(path.into());
        self
    }
}

/// Continual loader generating the consecutive tasks of a segmentation dataset.
///
/// Each new task brings new classes only. Construction decodes every label map
/// once and computes the full sample-by-task membership matrix; afterwards the
/// scenario is read-only and can be shared between threads.
#[derive(Debug, Clone)]
pub struct SegmentationClassIncremental<X, Y> {
    x: Vec<X>,
    y: Vec<Y>,
    class_order: Vec<ClassId>,
    increments: Vec<usize>,
    membership: MembershipMatrix,
    trsf: Compose<X>,
    mode: Mode,
    test_background: bool,
    train: bool,
    data_type: DataType,
}

impl<X, Y> SegmentationClassIncremental<X, Y>
where
    X: Clone + Send + Sync + 'static,
    Y: Clone + Send + Sync + 'static,
{
    /// Builds the scenario.
    ///
    /// # Arguments
    ///
    /// * `cl_dataset` - The dataset; its labels are label-map references.
    /// * `decoder` - Decodes those references into label maps.
    /// * `transformations` - Transform pipeline shared by every task.
    /// * `options` - Class count, increments, class order and policies.
    ///
    /// # Errors
    ///
    /// Any configuration error (class count, class order, increments), a
    /// decoding failure, or a membership cache that cannot be read, written or
    /// does not match the dataset.
    pub fn new<D, L>(
        cl_dataset: &D,
        decoder: &L,
        transformations: Compose<X>,
        options: SegmentationOptions,
    ) -> Result<Self, ContinuumError>
    where
        D: ContinuumDataset<X = X, Y = Y>,
        L: LabelMapDecoder<Ref = Y>,
    {
        let class_order = resolve_class_order(options.nb_classes, options.class_order.as_deref())?;
        let increments = define_increments(&options.increment, options.initial_increment, &class_order)?;
        let (x, y) = cl_dataset.get_data()?;
        if y.len() != x.len() {
            return Err(ContinuumError::LengthMismatch {
                what: "dataset labels".to_string(),
                expected: x.len(),
                actual: y.len(),
            });
        }

        let cached = match &options.save_indexes {
            Some(path) if path.exists() => {
                let cache = MembershipCache::load(path)?;
                if cache.matches(options.mode, &increments, &class_order) {
                    Some(cache.matrix)
                } else {
                    warn!(
                        "Membership cache {} was built with other settings, recomputing it",
                        path.display()
                    );
                    None
                }
            }
            _ => None,
        };

        let membership = match cached {
            Some(matrix) => {
                let expected = (x.len(), increments.len());
                if matrix.shape() != expected {
                    return Err(ContinuumError::CacheMismatch {
                        expected,
                        actual: matrix.shape(),
                    });
                }
                warn!("Reusing cached membership matrix");
                matrix
            }
            None => {
                let class_sets = extract_class_sets(decoder, &y)?;
                let matrix = filter_samples(&class_sets, &increments, &class_order, options.mode)?;
                if let Some(path) = &options.save_indexes {
                    MembershipCache::new(options.mode, &increments, &class_order, matrix.clone()).save(path)?;
                    debug!("Saved membership matrix to {}", path.display());
                }
                matrix
            }
        };

        let unassigned = membership.unassigned().len();
        if unassigned > 0 {
            warn!(
                "{} of {} samples belong to no task in {} mode and are excluded",
                unassigned,
                x.len(),
                options.mode
            );
        }
        info!(
            "Segmentation scenario: {} samples, {} tasks, increments {:?}, mode {}",
            x.len(),
            increments.len(),
            increments,
            options.mode
        );

        Ok(SegmentationClassIncremental {
            x,
            y,
            class_order,
            increments,
            membership,
            trsf: transformations,
            mode: options.mode,
            test_background: options.test_background,
            train: cl_dataset.is_train(),
            data_type: cl_dataset.data_type(),
        })
    }

    /// Total number of classes in the whole continual setting.
    pub fn nb_classes(&self) -> usize {
        self.class_order.len()
    }

    /// The global class order.
    pub fn classes(&self) -> &[ClassId] {
        &self.class_order
    }

    pub fn increments(&self) -> &[usize] {
        &self.increments
    }

    pub fn membership(&self) -> &MembershipMatrix {
        &self.membership
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn test_background(&self) -> bool {
        self.test_background
    }

    pub fn is_train(&self) -> bool {
        self.train
    }

    /// Classes introduced by the given tasks, in class order.
    ///
    /// # Errors
    ///
    /// Returns `ContinuumError::TaskIndexOutOfRange` for an unknown task.
    pub fn task_labels(&self, task_indexes: &[usize]) -> Result<Vec<ClassId>, ContinuumError> {
        let offsets = task_offsets(&self.increments);
        let mut labels = ClassSet::new();
        for &t in task_indexes {
            let (Some(&offset), Some(&inc)) = (offsets.get(t), self.increments.get(t)) else {
                return Err(ContinuumError::TaskIndexOutOfRange {
                    index: t as isize,
                    nb_tasks: self.increments.len(),
                });
            };
            labels.extend(self.class_order[offset..offset + inc].iter().copied());
        }
        Ok(self
            .class_order
            .iter()
            .copied()
            .filter(|&c| labels.contains(c))
            .collect())
    }

    /// The label remapping applied to the targets of the given tasks.
    pub fn label_remap(&self, task_indexes: &[usize]) -> Result<LabelRemap, ContinuumError> {
        let labels = self.task_labels(task_indexes)?;
        LabelRemap::new(&labels, &self.class_order, self.train, self.test_background)
    }
}

impl<X, Y> Scenario for SegmentationClassIncremental<X, Y>
where
    X: Clone + Send + Sync + 'static,
    Y: Clone + Send + Sync + 'static,
{
    type X = X;
    type Y = Y;

    fn nb_tasks(&self) -> usize {
        self.increments.len()
    }

    fn nb_samples(&self) -> usize {
        self.x.len()
    }

    /// Returns the task(s) at `task_index`: an integer (negative counts from
    /// the end) or a slice without step.
    fn task_set(&self, task_index: TaskIndex) -> Result<TaskSet<X, Y>, ContinuumError> {
        if let TaskIndex::Slice(slice) = &task_index {
            if let Some(step) = slice.step {
                return Err(ContinuumError::SteppedSlice { step });
            }
        }

        let selection = select_data_by_task(
            &self.x,
            &self.y,
            TaskAssignment::Matrix(&self.membership),
            &task_index,
            self.nb_tasks(),
        )?;
        let remap = self.label_remap(&selection.task_indexes)?;
        debug!(
            "Task {} -> tasks {:?}, {} samples",
            task_index,
            selection.task_indexes,
            selection.x.len()
        );

        TaskSet::new(
            selection.x,
            selection.y,
            selection.t,
            self.trsf.clone(),
            Some(remap),
            self.data_type,
        )
    }
}

/// Validates a custom class order, or builds the dense `1..=nb_classes` one.
fn resolve_class_order(nb_classes: usize, class_order: Option<&[ClassId]>) -> Result<Vec<ClassId>, ContinuumError> {
    if nb_classes == 0 || nb_classes > MAX_CLASSES {
        return Err(ContinuumError::InvalidNbClasses {
            nb_classes,
            max: MAX_CLASSES,
        });
    }
    let Some(order) = class_order else {
        return Ok((1..=nb_classes).map(|c| c as ClassId).collect());
    };
    if order.len() != nb_classes {
        return Err(ContinuumError::InvalidClassOrder(format!(
            "expected {} classes, got {}",
            nb_classes,
            order.len()
        )));
    }
    let mut seen = ClassSet::new();
    for &class in order {
        if class == BACKGROUND || class == VOID {
            return Err(ContinuumError::InvalidClassOrder(format!(
                "class {} is reserved for background/void",
                class
            )));
        }
        if !seen.insert(class) {
            return Err(ContinuumError::InvalidClassOrder(format!("class {} appears twice", class)));
        }
    }
    Ok(order.to_vec())
}

#[cfg(test)]
#[path = "segmentation_test.rs"]
mod tests;
