// continuum-data/src/decoder.rs

use continuum_core::{ClassSet, ContinuumError, LabelMap};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Turns a sample's label reference into its dense label map.
pub trait LabelMapDecoder: Send + Sync {
    /// How a dataset refers to a label map (a path, a key, ...).
    type Ref;

    /// Decodes the label map behind `reference`.
    fn decode(&self, reference: &Self::Ref) -> Result<LabelMap, ContinuumError>;

    /// The distinct classes present in the label map.
    fn unique_classes(&self, reference: &Self::Ref) -> Result<ClassSet, ContinuumError> {
        Ok(self.decode(reference)?.unique_classes())
    }
}

/// Label maps kept in memory, keyed by reference.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLabelMaps<K: Eq + Hash> {
    maps: HashMap<K, LabelMap>,
}

impl<K: Eq + Hash + Debug> InMemoryLabelMaps<K> {
    pub fn new() -> Self {
        InMemoryLabelMaps {
            maps: HashMap::new(),
        }
    }

    pub fn insert(&mut self, reference: K, label_map: LabelMap) -> Option<LabelMap> {
        self.maps.insert(reference, label_map)
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

impl<K: Eq + Hash + Debug> FromIterator<(K, LabelMap)> for InMemoryLabelMaps<K> {
    fn from_iter<I: IntoIterator<Item = (K, LabelMap)>>(iter: I) -> Self {
        InMemoryLabelMaps {
            maps: iter.into_iter().collect(),
        }
    }
}

impl<K> LabelMapDecoder for InMemoryLabelMaps<K>
where
    K: Eq + Hash + Debug + Send + Sync,
{
    type Ref = K;

    fn decode(&self, reference: &K) -> Result<LabelMap, ContinuumError> {
        self.maps
            .get(reference)
            .cloned()
            .ok_or_else(|| ContinuumError::DecodeError {
                reference: format!("{:?}", reference),
                reason: "no label map registered".to_string(),
            })
    }

    fn unique_classes(&self, reference: &K) -> Result<ClassSet, ContinuumError> {
        self.maps
            .get(reference)
            .map(LabelMap::unique_classes)
            .ok_or_else(|| ContinuumError::DecodeError {
                reference: format!("{:?}", reference),
                reason: "no label map registered".to_string(),
            })
    }
}

#[cfg(test)]
#[path = "decoder_test.rs"]
mod tests;
