//! Expense List Report
//!
//! Every recorded expense with its amount, in the order first recorded.

use crate::models::Money;
use crate::storage::ExpenseStore;

use super::NO_EXPENSES;

/// One row of the expense list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseListRow {
    /// `"<description> (<category>)"`
    pub label: String,
    /// Current amount
    pub amount: Money,
}

/// All expenses
#[derive(Debug, Clone)]
pub struct ExpenseListReport {
    pub rows: Vec<ExpenseListRow>,
}

impl ExpenseListReport {
    /// Snapshot the store
    pub fn generate(store: &ExpenseStore) -> Self {
        let rows = store
            .all()
            .iter()
            .map(|expense| ExpenseListRow {
                label: expense.composite_key(),
                amount: expense.amount,
            })
            .collect();

        Self { rows }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        if self.rows.is_empty() {
            return format!("{}\n", NO_EXPENSES);
        }

        let mut output = String::from("All Expenses:\n");
        for row in &self.rows {
            output.push_str(&format!(
                "{} - {}\n",
                row.label,
                row.amount.format_with_symbol(currency_symbol)
            ));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let report = ExpenseListReport::generate(&ExpenseStore::new());
        assert!(report.rows.is_empty());
        assert_eq!(report.format_terminal("$"), "No expenses recorded.\n");
    }

    #[test]
    fn test_lists_in_recorded_order() {
        let mut store = ExpenseStore::new();
        store.record("Rent", "Housing", Money::from_cents(120_000)).unwrap();
        store.record("Coffee", "Food", Money::from_cents(350)).unwrap();

        let report = ExpenseListReport::generate(&store);
        assert_eq!(
            report.format_terminal("$"),
            "All Expenses:\nRent (Housing) - $1200.00\nCoffee (Food) - $3.50\n"
        );
    }

    #[test]
    fn test_reflects_overwrite() {
        let mut store = ExpenseStore::new();
        store.record("Coffee", "Food", Money::from_cents(350)).unwrap();
        store.record("Coffee", "Food", Money::from_cents(400)).unwrap();

        let report = ExpenseListReport::generate(&store);
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].amount.cents(), 400);
    }
}
