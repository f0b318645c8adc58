//! Collecting one expense from the user

use std::io::{BufRead, Write};

use crate::error::TrackerResult;
use crate::models::Money;
use crate::storage::CategorySet;

use super::console::Console;
use super::selector::{choose_category, prompt_new_category};

/// What the user entered for one expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseInput {
    pub description: String,
    pub amount: Money,
    pub category: String,
}

/// Prompt for description, amount and category
///
/// With `force_new_category` the category menu is skipped and the user is
/// asked for a new category straight away.
pub fn collect_expense<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    categories: &CategorySet,
    force_new_category: bool,
) -> TrackerResult<ExpenseInput> {
    let description = console.prompt("Enter the expense description: ")?;
    let amount = console.prompt_amount("Enter the amount (0 or positive number): ")?;

    let category = if force_new_category {
        prompt_new_category(console)?
    } else {
        choose_category(console, categories)?
    };

    Ok(ExpenseInput {
        description,
        amount,
        category,
    })
}
