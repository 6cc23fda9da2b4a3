// continuum-core/src/transform.rs

use crate::error::ContinuumError;
use std::fmt;
use std::sync::Arc;

/// A transformation applied to one sample.
///
/// Scenarios never run transforms themselves; they only decide which chain a
/// task gets and hand it to the task bundle.
pub trait Transform<T>: Send + Sync {
    /// Applies the transform to `input`.
    fn apply(&self, input: T) -> Result<T, ContinuumError>;

    /// A human readable name, used in debug output and error messages.
    fn name(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

/// A named closure usable as a [`Transform`].
pub struct Lambda<F> {
    name: String,
    func: F,
}

impl<F> Lambda<F> {
    pub fn new<T>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(T) -> Result<T, ContinuumError> + Send + Sync,
    {
        Lambda {
            name: name.into(),
            func,
        }
    }
}

impl<T, F> Transform<T> for Lambda<F>
where
    F: Fn(T) -> Result<T, ContinuumError> + Send + Sync,
{
    fn apply(&self, input: T) -> Result<T, ContinuumError> {
        (self.func)(input)
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

/// An ordered chain of transforms applied one after the other.
///
/// Cloning is cheap: transforms are shared behind `Arc`.
pub struct Compose<T> {
    transforms: Vec<Arc<dyn Transform<T>>>,
}

impl<T> Compose<T> {
    pub fn new(transforms: Vec<Arc<dyn Transform<T>>>) -> Self {
        Compose { transforms }
    }

    /// A chain that leaves samples untouched.
    pub fn identity() -> Self {
        Compose {
            transforms: Vec::new(),
        }
    }

    pub fn push(&mut self, transform: Arc<dyn Transform<T>>) {
        self.transforms.push(transform);
    }

    /// Returns a new chain running `self` first, then `next`.
    pub fn then(&self, next: &Compose<T>) -> Compose<T> {
        let mut transforms = self.transforms.clone();
        transforms.extend(next.transforms.iter().cloned());
        Compose { transforms }
    }

    pub fn transforms(&self) -> &[Arc<dyn Transform<T>>] {
        &self.transforms
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Names of the chained transforms, in application order.
    pub fn names(&self) -> Vec<String> {
        self.transforms.iter().map(|t| t.name()).collect()
    }

    /// Runs `input` through the whole chain.
    pub fn apply(&self, input: T) -> Result<T, ContinuumError> {
        self.transforms
            .iter()
            .try_fold(input, |acc, transform| transform.apply(acc))
    }
}

impl<T> Clone for Compose<T> {
    fn clone(&self) -> Self {
        Compose {
            transforms: self.transforms.clone(),
        }
    }
}

impl<T> Default for Compose<T> {
    fn default() -> Self {
        Compose::identity()
    }
}

impl<T> fmt::Debug for Compose<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compose")
            .field("transforms", &self.names())
            .finish()
    }
}

impl<T> FromIterator<Arc<dyn Transform<T>>> for Compose<T> {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Transform<T>>>>(iter: I) -> Self {
        Compose::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod tests;
