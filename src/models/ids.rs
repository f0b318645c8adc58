//! Strongly-typed ID wrapper for expenses
//!
//! Expenses are identified by a synthetic UUID rather than by their
//! description/category text.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "exp-";

/// Identifier assigned to an expense when it is first recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, &self.0.to_string()[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = ExpenseId::new();
        let display = id.to_string();
        assert!(display.starts_with("exp-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(ExpenseId::new(), ExpenseId::new());
    }

    #[test]
    fn test_serializes_as_full_uuid() {
        let id = ExpenseId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json.len(), 38);
        assert_eq!(serde_json::from_str::<ExpenseId>(&json).unwrap(), id);
    }
}
