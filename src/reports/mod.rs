//! Reports module for the expense tracker
//!
//! Read-only views over the expense store: the full expense list,
//! subtotals per category, and the grand total.

pub mod category_totals;
pub mod expense_list;
pub mod grand_total;

pub use category_totals::{CategoryTotal, CategoryTotalsReport};
pub use expense_list::{ExpenseListReport, ExpenseListRow};
pub use grand_total::GrandTotalReport;

/// Shown by every report when nothing has been recorded
pub const NO_EXPENSES: &str = "No expenses recorded.";
