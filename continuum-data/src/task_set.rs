// continuum-data/src/task_set.rs
//! The bundle a scenario hands out for one task (or a group of tasks).

use crate::datasets::Dataset;
use crate::decoder::LabelMapDecoder;
use continuum_core::{Compose, ContinuumError, DataType, LabelMap, LabelRemap};

/// Samples selected for a task together with everything needed to consume them.
///
/// A `TaskSet` owns its own copy of the selected samples and task ids, so
/// later accesses on the scenario never change it.
#[derive(Debug, Clone)]
pub struct TaskSet<X, Y> {
    x: Vec<X>,
    y: Vec<Y>,
    t: Vec<usize>,
    trsf: Compose<X>,
    target_trsf: Option<LabelRemap>,
    data_type: DataType,
}

impl<X, Y> TaskSet<X, Y>
where
    X: Clone + Send + 'static,
    Y: Clone + Send + 'static,
{
    /// Creates a new `TaskSet`.
    ///
    /// # Errors
    ///
    /// Returns `ContinuumError::LengthMismatch` if `y` or `t` does not have one
    /// entry per sample.
    pub fn new(
        x: Vec<X>,
        y: Vec<Y>,
        t: Vec<usize>,
        trsf: Compose<X>,
        target_trsf: Option<LabelRemap>,
        data_type: DataType,
    ) -> Result<Self, ContinuumError> {
        if y.len() != x.len() {
            return Err(ContinuumError::LengthMismatch {
                what: "task set labels".to_string(),
                expected: x.len(),
                actual: y.len(),
            });
        }
        if t.len() != x.len() {
            return Err(ContinuumError::LengthMismatch {
                what: "task set task ids".to_string(),
                expected: x.len(),
                actual: t.len(),
            });
        }
        Ok(TaskSet {
            x,
            y,
            t,
            trsf,
            target_trsf,
            data_type,
        })
    }

    pub fn x(&self) -> &[X] {
        &self.x
    }

    pub fn y(&self) -> &[Y] {
        &self.y
    }

    /// Task id of every sample, in sample order.
    pub fn task_ids(&self) -> &[usize] {
        &self.t
    }

    pub fn transform(&self) -> &Compose<X> {
        &self.trsf
    }

    pub fn target_transform(&self) -> Option<&LabelRemap> {
        self.target_trsf.as_ref()
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Returns the untransformed sample, label and task id at `index`.
    pub fn get_raw(&self, index: usize) -> Result<(&X, &Y, usize), ContinuumError> {
        match (self.x.get(index), self.y.get(index), self.t.get(index)) {
            (Some(x), Some(y), Some(&t)) => Ok((x, y, t)),
            _ => Err(ContinuumError::IndexOutOfBounds {
                index,
                len: self.x.len(),
            }),
        }
    }

    /// Decodes the label map of sample `index` and applies the target transform.
    ///
    /// Without a target transform the decoded map is returned unchanged.
    pub fn get_target<L>(&self, index: usize, decoder: &L) -> Result<LabelMap, ContinuumError>
    where
        L: LabelMapDecoder<Ref = Y>,
    {
        let (_, y, _) = self.get_raw(index)?;
        let mut label_map = decoder.decode(y)?;
        if let Some(remap) = &self.target_trsf {
            remap.apply_inplace(&mut label_map);
        }
        Ok(label_map)
    }
}

impl<X, Y> Dataset for TaskSet<X, Y>
where
    X: Clone + Send + 'static,
    Y: Clone + Send + 'static,
{
    type Item = (X, Y, usize);

    /// Returns the transformed sample, its label and its task id.
    fn get(&self, index: usize) -> Result<Self::Item, ContinuumError> {
        let (x, y, t) = self.get_raw(index)?;
        let x = self.trsf.apply(x.clone())?;
        Ok((x, y.clone(), t))
    }

    fn len(&self) -> usize {
        self.x.len()
    }
}

#[cfg(test)]
#[path = "task_set_test.rs"]
mod tests;
