//! Category set
//!
//! Category labels are unique by exact text and listed in the order they
//! were first added. Categories are never renamed or removed.

use crate::error::{TrackerError, TrackerResult};

/// Insertion-ordered set of category labels
#[derive(Debug, Default)]
pub struct CategorySet {
    names: Vec<String>,
}

impl CategorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category; returns `false` if it was already known
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Look up a category by its 1-based position in [`CategorySet::names`]
    pub fn by_position(&self, position: usize) -> TrackerResult<&str> {
        position
            .checked_sub(1)
            .and_then(|index| self.names.get(index))
            .map(String::as_str)
            .ok_or_else(|| TrackerError::category_not_found(format!("#{}", position)))
    }

    /// Snapshot of all category names in insertion order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
