// continuum-core/src/class_set.rs

use crate::types::{ClassId, BACKGROUND, VOID};
use std::fmt;

/// A set of class identifiers over the closed `0..=255` domain.
///
/// Stored as a 256-bit mask, so membership, union, intersection and
/// inclusion tests are all constant time.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClassSet {
    bits: [u64; 4],
}

impl ClassSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        ClassSet { bits: [0; 4] }
    }

    /// The pseudo-classes `{BACKGROUND, VOID}`.
    pub fn pseudo_classes() -> Self {
        [BACKGROUND, VOID].into_iter().collect()
    }

    /// Inserts `class`, returning `true` if it was not already present.
    pub fn insert(&mut self, class: ClassId) -> bool {
        let (word, mask) = Self::locate(class);
        let absent = self.bits[word] & mask == 0;
        self.bits[word] |= mask;
        absent
    }

    pub fn contains(&self, class: ClassId) -> bool {
        let (word, mask) = Self::locate(class);
        self.bits[word] & mask != 0
    }

    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    /// Returns `true` if the two sets share at least one class.
    pub fn intersects(&self, other: &ClassSet) -> bool {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .any(|(a, b)| a & b != 0)
    }

    /// Returns `true` if every class of `self` is in `other`.
    pub fn is_subset(&self, other: &ClassSet) -> bool {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .all(|(a, b)| a & !b == 0)
    }

    pub fn union(&self, other: &ClassSet) -> ClassSet {
        let mut bits = self.bits;
        for (w, o) in bits.iter_mut().zip(other.bits.iter()) {
            *w |= o;
        }
        ClassSet { bits }
    }

    /// Iterates the classes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = ClassId> + '_ {
        (0..=ClassId::MAX).filter(move |&c| self.contains(c))
    }

    fn locate(class: ClassId) -> (usize, u64) {
        ((class >> 6) as usize, 1u64 << (class & 63))
    }
}

impl FromIterator<ClassId> for ClassSet {
    fn from_iter<I: IntoIterator<Item = ClassId>>(iter: I) -> Self {
        let mut set = ClassSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<ClassId> for ClassSet {
    fn extend<I: IntoIterator<Item = ClassId>>(&mut self, iter: I) {
        for class in iter {
            self.insert(class);
        }
    }
}

impl<'a> FromIterator<&'a ClassId> for ClassSet {
    fn from_iter<I: IntoIterator<Item = &'a ClassId>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl fmt::Debug for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
#[path = "class_set_test.rs"]
mod tests;
