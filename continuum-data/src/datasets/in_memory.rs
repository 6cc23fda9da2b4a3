use super::traits::{ContinuumDataset, Dataset};
use continuum_core::{ContinuumError, DataType};

/// A dataset holding its samples and labels in two parallel `Vec`s.
///
/// # Type Parameters
///
/// * `X`: The sample type.
/// * `Y`: The label type (a class, or a label-map reference for segmentation).
#[derive(Debug, Clone)]
pub struct InMemoryDataset<X, Y> {
    x: Vec<X>,
    y: Vec<Y>,
    train: bool,
    data_type: DataType,
}

impl<X, Y> InMemoryDataset<X, Y>
where
    X: Clone + Send + Sync + 'static,
    Y: Clone + Send + Sync + 'static,
{
    /// Creates a new `InMemoryDataset`.
    ///
    /// # Errors
    ///
    /// Returns `ContinuumError::LengthMismatch` if `x` and `y` differ in length.
    pub fn new(x: Vec<X>, y: Vec<Y>, train: bool, data_type: DataType) -> Result<Self, ContinuumError> {
        if x.len() != y.len() {
            return Err(ContinuumError::LengthMismatch {
                what: "dataset labels".to_string(),
                expected: x.len(),
                actual: y.len(),
            });
        }
        Ok(Self {
            x,
            y,
            train,
            data_type,
        })
    }

    pub fn x(&self) -> &[X] {
        &self.x
    }

    pub fn y(&self) -> &[Y] {
        &self.y
    }
}

impl<X, Y> ContinuumDataset for InMemoryDataset<X, Y>
where
    X: Clone + Send + Sync + 'static,
    Y: Clone + Send + Sync + 'static,
{
    type X = X;
    type Y = Y;

    fn get_data(&self) -> Result<(Vec<X>, Vec<Y>), ContinuumError> {
        Ok((self.x.clone(), self.y.clone()))
    }

    fn is_train(&self) -> bool {
        self.train
    }

    fn data_type(&self) -> DataType {
        self.data_type
    }
}

impl<X, Y> Dataset for InMemoryDataset<X, Y>
where
    X: Clone + Send + Sync + 'static,
    Y: Clone + Send + Sync + 'static,
{
    type Item = (X, Y);

    /// Returns a clone of the sample and label at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ContinuumError::IndexOutOfBounds` if the index is out of bounds.
    fn get(&self, index: usize) -> Result<Self::Item, ContinuumError> {
        match (self.x.get(index), self.y.get(index)) {
            (Some(x), Some(y)) => Ok((x.clone(), y.clone())),
            _ => Err(ContinuumError::IndexOutOfBounds {
                index,
                len: self.x.len(),
            }),
        }
    }

    fn len(&self) -> usize {
        self.x.len()
    }
}

#[cfg(test)]
#[path = "in_memory_test.rs"]
mod tests;
