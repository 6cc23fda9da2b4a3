// continuum-core/src/label_map.rs

use crate::class_set::ClassSet;
use crate::error::ContinuumError;
use crate::types::ClassId;

/// A dense, row-major map of class identifiers (one per pixel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    data: Vec<ClassId>,
    shape: Vec<usize>,
}

impl LabelMap {
    /// Creates a label map, checking that `data` fills `shape` exactly.
    ///
    /// # Errors
    ///
    /// Returns `ContinuumError::LabelMapShape` if the product of `shape` differs
    /// from `data.len()`.
    pub fn new(data: Vec<ClassId>, shape: Vec<usize>) -> Result<Self, ContinuumError> {
        let numel: usize = shape.iter().product();
        if numel != data.len() {
            return Err(ContinuumError::LabelMapShape {
                data_len: data.len(),
                shape,
            });
        }
        Ok(LabelMap { data, shape })
    }

    /// A label map of `shape` where every pixel is `class`.
    pub fn filled(class: ClassId, shape: Vec<usize>) -> Self {
        let numel = shape.iter().product();
        LabelMap {
            data: vec![class; numel],
            shape,
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn data(&self) -> &[ClassId] {
        &self.data
    }

    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Returns the pixel at a multi-dimensional `index`.
    pub fn get(&self, index: &[usize]) -> Option<ClassId> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut offset = 0;
        for (&i, &dim) in index.iter().zip(self.shape.iter()) {
            if i >= dim {
                return None;
            }
            offset = offset * dim + i;
        }
        self.data.get(offset).copied()
    }

    /// The set of distinct classes present in the map.
    pub fn unique_classes(&self) -> ClassSet {
        self.data.iter().collect()
    }

    /// Rewrites every pixel through `f`.
    pub fn map_inplace<F: Fn(ClassId) -> ClassId>(&mut self, f: F) {
        for v in self.data.iter_mut() {
            *v = f(*v);
        }
    }

    pub fn into_data(self) -> Vec<ClassId> {
        self.data
    }
}

#[cfg(test)]
#[path = "label_map_test.rs"]
mod tests;
