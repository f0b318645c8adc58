//! Category selection
//!
//! Asks whether to create a new category or reuse an existing one. Loops
//! until a category label is produced.

use std::io::{BufRead, Write};

use crate::error::TrackerResult;
use crate::storage::CategorySet;

use super::console::Console;

/// Ask for a brand new category label
pub fn prompt_new_category<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> TrackerResult<String> {
    console.prompt("Enter the new category: ")
}

/// Let the user create a category or pick one of `categories`
pub fn choose_category<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    categories: &CategorySet,
) -> TrackerResult<String> {
    loop {
        console.say("Do you want to:")?;
        console.say("1. Add a new category")?;
        console.say("2. Use an existing category")?;

        let choice = console.prompt("Choose 1 or 2: ")?;
        match choice.trim() {
            "1" => return prompt_new_category(console),
            "2" if categories.is_empty() => {
                console.say("No categories available. Please add a new category.")?;
            }
            "2" => {
                if let Some(category) = pick_existing(console, categories)? {
                    return Ok(category);
                }
                console.say("Invalid choice, please try again.")?;
            }
            _ => console.say("Invalid input! You must choose either 1 or 2.")?,
        }
    }
}

/// List the categories and read a 1-based index; `None` if it is invalid
fn pick_existing<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    categories: &CategorySet,
) -> TrackerResult<Option<String>> {
    console.say("Existing categories:")?;
    for (i, name) in categories.names().iter().enumerate() {
        console.say(format!("{}. {}", i + 1, name))?;
    }

    let answer = console.prompt("Choose a category by number: ")?;
    let picked = answer
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|position| categories.by_position(position).ok())
        .map(str::to_string);

    Ok(picked)
}
