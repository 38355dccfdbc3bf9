// file: src/models/inclusion.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of enumerated options that are switched on for a task.
///
/// Backed by an ordered set, so two sets with the same members compare equal
/// no matter which order the options were toggled in. Stored as a JSON array;
/// duplicates in stored data collapse on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InclusionSet<T: Ord>(BTreeSet<T>);

impl<T: Ord> Default for InclusionSet<T> {
    fn default() -> Self {
        Self(BTreeSet::new())
    }
}

impl<T: Ord + Copy> InclusionSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new set with `value` added when `included` is true and removed otherwise.
    ///
    /// The checkbox that drives this reflects current membership, so repeating
    /// the same toggle leaves the set unchanged.
    pub fn toggled(&self, value: T, included: bool) -> Self {
        let mut next = self.0.clone();
        if included {
            next.insert(value);
        } else {
            next.remove(&value);
        }
        Self(next)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.0.contains(value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.0.iter()
    }
}

impl<T: Ord> FromIterator<T> for InclusionSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
