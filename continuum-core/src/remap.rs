// continuum-core/src/remap.rs

use crate::class_set::ClassSet;
use crate::error::ContinuumError;
use crate::label_map::LabelMap;
use crate::types::{ClassId, BACKGROUND, VOID};

/// Per-task mapping from raw class identifiers to task-local identifiers.
///
/// The mapping is total over the `0..=255` class domain:
/// - a class of the queried task maps to its 0-based position in the global
///   class order;
/// - at test time, background maps to itself when `test_background` is set and
///   to void otherwise, and void always maps to void;
/// - every other identifier falls through to [`LabelRemap::DEFAULT`].
///
/// During training, background and void are not special-cased and therefore
/// take the default like any class outside the task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRemap {
    table: [ClassId; 256],
    explicit: ClassSet,
}

impl LabelRemap {
    /// Target of every identifier without an explicit entry.
    pub const DEFAULT: ClassId = BACKGROUND;

    /// Builds the mapping for a task owning `labels`.
    ///
    /// # Arguments
    ///
    /// * `labels` - The classes introduced by the queried task(s).
    /// * `class_order` - The global class order; positions become targets.
    /// * `train` - Whether the mapping is used on training data.
    /// * `test_background` - At test time, score background as class `0`
    ///   instead of ignoring it.
    ///
    /// # Errors
    ///
    /// Returns `ContinuumError::InvalidClassOrder` if a label is missing from
    /// `class_order` or its position does not fit a class identifier.
    pub fn new(
        labels: &[ClassId],
        class_order: &[ClassId],
        train: bool,
        test_background: bool,
    ) -> Result<Self, ContinuumError> {
        // identifiers without an entry keep the default
        let mut table = [Self::DEFAULT; 256];
        let mut explicit = ClassSet::new();

        for &label in labels {
            let position = class_order
                .iter()
                .position(|&c| c == label)
                .ok_or_else(|| {
                    ContinuumError::InvalidClassOrder(format!(
                        "label {} is not part of the class order",
                        label
                    ))
                })?;
            table[label as usize] = ClassId::try_from(position).map_err(|_| {
                ContinuumError::InvalidClassOrder(format!(
                    "position {} of label {} does not fit a class identifier",
                    position, label
                ))
            })?;
            explicit.insert(label);
        }

        if !train {
            table[BACKGROUND as usize] = if test_background { BACKGROUND } else { VOID };
            table[VOID as usize] = VOID;
            explicit.insert(BACKGROUND);
            explicit.insert(VOID);
        }

        Ok(LabelRemap { table, explicit })
    }

    /// Maps a single raw identifier.
    pub fn lookup(&self, raw: ClassId) -> ClassId {
        self.table[raw as usize]
    }

    /// Returns `true` if `raw` has its own entry rather than the default.
    pub fn is_explicit(&self, raw: ClassId) -> bool {
        self.explicit.contains(raw)
    }

    /// Identifiers with their own entry.
    pub fn explicit_classes(&self) -> &ClassSet {
        &self.explicit
    }

    /// Rewrites every pixel of `label_map`.
    pub fn apply_inplace(&self, label_map: &mut LabelMap) {
        label_map.map_inplace(|v| self.lookup(v));
    }

    /// Returns a remapped copy of `label_map`.
    pub fn apply(&self, label_map: &LabelMap) -> LabelMap {
        let mut out = label_map.clone();
        self.apply_inplace(&mut out);
        out
    }
}

#[cfg(test)]
#[path = "remap_test.rs"]
mod tests;
