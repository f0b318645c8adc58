//! Category Totals Report
//!
//! Subtotal of expense amounts per category, in order of first appearance.

use crate::models::Money;
use crate::storage::ExpenseStore;

use super::NO_EXPENSES;

/// Subtotal for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category label
    pub category: String,
    /// Sum of expenses in this category
    pub total: Money,
    /// Number of expenses in this category
    pub expense_count: usize,
}

/// Spending per category
#[derive(Debug, Clone)]
pub struct CategoryTotalsReport {
    pub categories: Vec<CategoryTotal>,
}

impl CategoryTotalsReport {
    /// Accumulate subtotals from the store
    pub fn generate(store: &ExpenseStore) -> Self {
        let mut categories: Vec<CategoryTotal> = Vec::new();

        for expense in store.all() {
            match categories.iter_mut().find(|c| c.category == expense.category) {
                Some(entry) => {
                    entry.total += expense.amount;
                    entry.expense_count += 1;
                }
                None => categories.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: expense.amount,
                    expense_count: 1,
                }),
            }
        }

        Self { categories }
    }

    /// Sum of all category subtotals
    pub fn total(&self) -> Money {
        self.categories.iter().map(|c| c.total).sum()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        if self.categories.is_empty() {
            return format!("{}\n", NO_EXPENSES);
        }

        let mut output = String::from("Total Spending by Category:\n");
        for category in &self.categories {
            output.push_str(&format!(
                "{} - {}\n",
                category.category,
                category.total.format_with_symbol(currency_symbol)
            ));
        }
        output
    }
}
