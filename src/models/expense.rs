//! Expense model
//!
//! A single expense line item. Description and category together identify
//! an expense: recording the same pair twice replaces the earlier amount.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Free-text description (may be empty)
    pub description: String,

    /// Category label
    pub category: String,

    /// Amount spent, never negative
    pub amount: Money,

    /// When the amount was last recorded
    pub recorded_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(description: impl Into<String>, category: impl Into<String>, amount: Money) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            category: category.into(),
            amount,
            recorded_at: Utc::now(),
        }
    }

    /// The `"<description> (<category>)"` label used for display
    pub fn composite_key(&self) -> String {
        format!("{} ({})", self.description, self.category)
    }

    /// Whether this expense has the given description/category pair
    pub fn has_key(&self, description: &str, category: &str) -> bool {
        self.description == description && self.category == category
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.composite_key(), self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_key() {
        let expense = Expense::new("Coffee", "Food", Money::from_cents(350));
        assert_eq!(expense.composite_key(), "Coffee (Food)");
        assert_eq!(expense.to_string(), "Coffee (Food) - $3.50");
    }

    #[test]
    fn test_has_key_is_exact() {
        let expense = Expense::new("Coffee", "Food", Money::zero());
        assert!(expense.has_key("Coffee", "Food"));
        assert!(!expense.has_key("coffee", "Food"));
        assert!(!expense.has_key("Coffee", "Food "));
    }

    #[test]
    fn test_empty_description_allowed() {
        let expense = Expense::new("", "Misc", Money::from_cents(100));
        assert_eq!(expense.composite_key(), " (Misc)");
    }
}
