// continuum-scenarios/src/increments.rs

use continuum_core::{ClassId, ContinuumError};

/// How many new classes each task introduces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Increment {
    /// The same number of classes for every task (after an optional initial task).
    Fixed(usize),
    /// An explicit number of classes per task.
    List(Vec<usize>),
}

impl From<usize> for Increment {
    fn from(increment: usize) -> Self {
        Increment::Fixed(increment)
    }
}

impl From<Vec<usize>> for Increment {
    fn from(increments: Vec<usize>) -> Self {
        Increment::List(increments)
    }
}

impl From<&[usize]> for Increment {
    fn from(increments: &[usize]) -> Self {
        Increment::List(increments.to_vec())
    }
}

/// Resolves an increment specification into per-task class counts.
///
/// The returned counts always sum to `class_order.len()`.
///
/// # Arguments
///
/// * `increment` - Classes per task, or an explicit list.
/// * `initial_increment` - Size of the first task when `increment` is
///   `Fixed`; `0` disables it. Ignored for `List`.
/// * `class_order` - The classes to distribute.
///
/// # Errors
///
/// * `ContinuumError::IncrementMismatch` if a list does not sum to the class count.
/// * `ContinuumError::InvalidIncrement` for a zero increment or a zero list entry.
/// * `ContinuumError::UnevenIncrement` if the classes left after the initial
///   task are not a multiple of `increment`.
pub fn define_increments(
    increment: &Increment,
    initial_increment: usize,
    class_order: &[ClassId],
) -> Result<Vec<usize>, ContinuumError> {
    let nb_classes = class_order.len();
    match increment {
        Increment::List(increments) => {
            if increments.iter().any(|&inc| inc == 0) {
                return Err(ContinuumError::InvalidIncrement(format!(
                    "every task must introduce at least one class, got {:?}",
                    increments
                )));
            }
            let total: usize = increments.iter().sum();
            if total != nb_classes {
                return Err(ContinuumError::IncrementMismatch {
                    expected: nb_classes,
                    actual: total,
                });
            }
            Ok(increments.clone())
        }
        Increment::Fixed(0) => Err(ContinuumError::InvalidIncrement(
            "increment must be an int > 0".to_string(),
        )),
        Increment::Fixed(inc) => {
            let inc = *inc;
            let uneven = || ContinuumError::UnevenIncrement {
                nb_classes,
                initial_increment,
                increment: inc,
            };
            let remaining = nb_classes.checked_sub(initial_increment).ok_or_else(uneven)?;
            if remaining % inc != 0 {
                return Err(uneven());
            }
            let mut increments = Vec::with_capacity(1 + remaining / inc);
            if initial_increment > 0 {
                increments.push(initial_increment);
            }
            increments.extend(std::iter::repeat(inc).take(remaining / inc));
            Ok(increments)
        }
    }
}

/// Start offset of every task's slice into the class order.
pub(crate) fn task_offsets(increments: &[usize]) -> Vec<usize> {
    increments
        .iter()
        .scan(0, |acc, &inc| {
            let start = *acc;
            *acc += inc;
            Some(start)
        })
        .collect()
}

#[cfg(test)]
#[path = "increments_test.rs"]
mod tests;
