//! Grand Total Report

use crate::models::Money;
use crate::storage::ExpenseStore;

use super::NO_EXPENSES;

/// Total spending across all categories
#[derive(Debug, Clone, Copy)]
pub struct GrandTotalReport {
    pub total: Money,
    pub expense_count: usize,
}

impl GrandTotalReport {
    /// Recompute the total from the store
    pub fn generate(store: &ExpenseStore) -> Self {
        Self {
            total: store.total(),
            expense_count: store.len(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        if self.expense_count == 0 {
            return format!("{}\n", NO_EXPENSES);
        }

        format!(
            "Total Spending across all categories: {}\n",
            self.total.format_with_symbol(currency_symbol)
        )
    }
}
