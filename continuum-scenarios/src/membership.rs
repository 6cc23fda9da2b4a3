// continuum-scenarios/src/membership.rs
//! Assignment of multi-label samples to class-incremental tasks.

use crate::increments::task_offsets;
use continuum_core::{ClassId, ClassSet, ContinuumError};
use continuum_data::LabelMapDecoder;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::str::FromStr;

/// Policy deciding when a sample holding several classes belongs to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// A sample belongs to every task introducing one of its classes.
    #[default]
    Overlap,
    /// A sample belongs to a task introducing one of its classes only if all
    /// its other classes are already known by then (or are background/void).
    Disjoint,
}

impl FromStr for Mode {
    type Err = ContinuumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overlap" => Ok(Mode::Overlap),
            "disjoint" => Ok(Mode::Disjoint),
            other => Err(ContinuumError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Overlap => write!(f, "overlap"),
            Mode::Disjoint => write!(f, "disjoint"),
        }
    }
}

/// Boolean table with one row per sample and one column per task.
///
/// A row may have several cells set (overlap) or none at all: such a sample is
/// part of no task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipMatrix {
    nb_samples: usize,
    nb_tasks: usize,
    cells: Vec<bool>,
}

impl MembershipMatrix {
    /// A matrix where no sample belongs to any task.
    pub fn new(nb_samples: usize, nb_tasks: usize) -> Self {
        MembershipMatrix {
            nb_samples,
            nb_tasks,
            cells: vec![false; nb_samples * nb_tasks],
        }
    }

    /// Builds a matrix from per-sample rows.
    ///
    /// # Errors
    ///
    /// Returns `ContinuumError::LengthMismatch` if a row does not have `nb_tasks` cells.
    pub fn from_rows(rows: Vec<Vec<bool>>, nb_tasks: usize) -> Result<Self, ContinuumError> {
        let nb_samples = rows.len();
        let mut cells = Vec::with_capacity(nb_samples * nb_tasks);
        for row in rows {
            if row.len() != nb_tasks {
                return Err(ContinuumError::LengthMismatch {
                    what: "membership row".to_string(),
                    expected: nb_tasks,
                    actual: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(MembershipMatrix {
            nb_samples,
            nb_tasks,
            cells,
        })
    }

    pub fn nb_samples(&self) -> usize {
        self.nb_samples
    }

    pub fn nb_tasks(&self) -> usize {
        self.nb_tasks
    }

    /// `(nb_samples, nb_tasks)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.nb_samples, self.nb_tasks)
    }

    /// Whether `sample` belongs to `task`. Out-of-range cells are `false`.
    pub fn get(&self, sample: usize, task: usize) -> bool {
        sample < self.nb_samples && task < self.nb_tasks && self.cells[sample * self.nb_tasks + task]
    }

    fn set(&mut self, sample: usize, task: usize) {
        self.cells[sample * self.nb_tasks + task] = true;
    }

    /// The membership row of `sample`.
    pub fn row(&self, sample: usize) -> Option<&[bool]> {
        if sample >= self.nb_samples {
            return None;
        }
        let start = sample * self.nb_tasks;
        Some(&self.cells[start..start + self.nb_tasks])
    }

    /// Tasks `sample` belongs to, ascending.
    pub fn tasks_of(&self, sample: usize) -> Vec<usize> {
        (0..self.nb_tasks).filter(|&t| self.get(sample, t)).collect()
    }

    /// Samples belonging to `task`, ascending.
    pub fn samples_of(&self, task: usize) -> Vec<usize> {
        (0..self.nb_samples).filter(|&s| self.get(s, task)).collect()
    }

    /// Samples belonging to no task.
    pub fn unassigned(&self) -> Vec<usize> {
        (0..self.nb_samples)
            .filter(|&s| self.row(s).map_or(false, |row| !row.iter().any(|&c| c)))
            .collect()
    }
}

/// A membership matrix stored on disk with the settings it was computed under.
///
/// A cache only answers for the exact mode, increments and class order it was
/// built with; see [`MembershipCache::matches`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipCache {
    pub mode: Mode,
    pub increments: Vec<usize>,
    pub class_order: Vec<ClassId>,
    pub matrix: MembershipMatrix,
}

impl MembershipCache {
    pub fn new(mode: Mode, increments: &[usize], class_order: &[ClassId], matrix: MembershipMatrix) -> Self {
        MembershipCache {
            mode,
            increments: increments.to_vec(),
            class_order: class_order.to_vec(),
            matrix,
        }
    }

    /// Whether the cache was computed with these settings.
    pub fn matches(&self, mode: Mode, increments: &[usize], class_order: &[ClassId]) -> bool {
        self.mode == mode && self.increments == increments && self.class_order == class_order
    }

    /// Reads a cache previously written by [`MembershipCache::save`].
    ///
    /// # Errors
    ///
    /// * `ContinuumError::Io` if the file cannot be opened.
    /// * `ContinuumError::Serialization` if its content is not a valid cache.
    pub fn load(path: &Path) -> Result<Self, ContinuumError> {
        let file = File::open(path).map_err(|e| io_error(path, e))?;
        let cache: MembershipCache = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| ContinuumError::Serialization(e.to_string()))?;
        let matrix = &cache.matrix;
        if matrix.cells.len() != matrix.nb_samples * matrix.nb_tasks {
            return Err(ContinuumError::Serialization(format!(
                "{} cells for a {}x{} membership matrix",
                matrix.cells.len(),
                matrix.nb_samples,
                matrix.nb_tasks
            )));
        }
        if matrix.nb_tasks != cache.increments.len() {
            return Err(ContinuumError::Serialization(format!(
                "{} task columns for {} increments",
                matrix.nb_tasks,
                cache.increments.len()
            )));
        }
        Ok(cache)
    }

    /// Writes the cache as JSON to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<(), ContinuumError> {
        let file = File::create(path).map_err(|e| io_error(path, e))?;
        serde_json::to_writer(BufWriter::new(file), self)
            .map_err(|e| ContinuumError::Serialization(e.to_string()))
    }
}

fn io_error(path: &Path, e: std::io::Error) -> ContinuumError {
    ContinuumError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Decodes every label map once and keeps the set of classes it contains.
pub fn extract_class_sets<L: LabelMapDecoder>(
    decoder: &L,
    references: &[L::Ref],
) -> Result<Vec<ClassSet>, ContinuumError> {
    let class_sets = references
        .iter()
        .map(|reference| decoder.unique_classes(reference))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("Extracted class sets of {} label maps", class_sets.len());
    Ok(class_sets)
}

/// Computes which sample belongs to which task.
///
/// Task `t` owns the slice of `class_order` starting after the classes of
/// the previous tasks and spanning `increments[t]` classes.
///
/// # Arguments
///
/// * `class_sets` - The classes present in every sample.
/// * `increments` - Number of classes introduced by each task.
/// * `class_order` - The global class order.
/// * `mode` - The inclusion policy, see [`Mode`].
///
/// # Errors
///
/// Returns `ContinuumError::IncrementMismatch` if `increments` does not sum to
/// the length of `class_order`.
pub fn filter_samples(
    class_sets: &[ClassSet],
    increments: &[usize],
    class_order: &[ClassId],
    mode: Mode,
) -> Result<MembershipMatrix, ContinuumError> {
    let total: usize = increments.iter().sum();
    if total != class_order.len() {
        return Err(ContinuumError::IncrementMismatch {
            expected: class_order.len(),
            actual: total,
        });
    }
    let mut matrix = MembershipMatrix::new(class_sets.len(), increments.len());

    for (task_id, (&inc, offset)) in increments.iter().zip(task_offsets(increments)).enumerate() {
        let labels: ClassSet = class_order[offset..offset + inc].iter().collect();
        let old_labels: ClassSet = class_order[..offset].iter().collect();
        let all_labels = labels.union(&old_labels).union(&ClassSet::pseudo_classes());

        for (index, classes) in class_sets.iter().enumerate() {
            let member = match mode {
                Mode::Overlap => classes.intersects(&labels),
                Mode::Disjoint => classes.intersects(&labels) && classes.is_subset(&all_labels),
            };
            if member {
                matrix.set(index, task_id);
            }
        }
    }

    Ok(matrix)
}

#[cfg(test)]
#[path = "membership_test.rs"]
mod tests;
