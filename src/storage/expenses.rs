//! In-memory expense store
//!
//! Keeps expenses in the order they were first recorded. Description and
//! category together are unique; recording an existing pair replaces the
//! amount in place. The sum of all amounts always fits in a [`Money`], so
//! totals and category subtotals cannot overflow.

use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpenseId, Money};

/// What happened when an expense was recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recorded {
    /// A new expense was added
    Created(ExpenseId),
    /// An existing expense had its amount overwritten
    Replaced { id: ExpenseId, previous: Money },
}

/// Insertion-ordered collection of expenses
#[derive(Debug, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an expense, replacing the amount of an existing
    /// description/category pair (last write wins)
    pub fn record(
        &mut self,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
    ) -> TrackerResult<Recorded> {
        if amount.is_negative() {
            return Err(TrackerError::Validation(format!(
                "Expense amount cannot be negative: {}",
                amount
            )));
        }

        let description = description.into();
        let category = category.into();

        self.expenses
            .iter()
            .filter(|e| !e.has_key(&description, &category))
            .try_fold(amount, |acc, e| acc.checked_add(e.amount))
            .ok_or_else(|| {
                TrackerError::Validation("Total spending would be too large to track".into())
            })?;

        if let Some(existing) = self
            .expenses
            .iter_mut()
            .find(|e| e.has_key(&description, &category))
        {
            let previous = existing.amount;
            existing.amount = amount;
            existing.recorded_at = chrono::Utc::now();
            debug!(id = %existing.id, %previous, %amount, "replaced expense amount");
            return Ok(Recorded::Replaced {
                id: existing.id,
                previous,
            });
        }

        let expense = Expense::new(description, category, amount);
        let id = expense.id;
        debug!(%id, key = %expense.composite_key(), %amount, "recorded expense");
        self.expenses.push(expense);
        Ok(Recorded::Created(id))
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> TrackerResult<&Expense> {
        self.expenses
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| TrackerError::expense_not_found(id.to_string()))
    }

    /// All expenses in the order they were first recorded
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Sum of all current amounts
    pub fn total(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
