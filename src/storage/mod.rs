//! Storage layer for the expense tracker
//!
//! Expenses and categories live in memory for the duration of a session.
//! The only files written are exports and settings, both via atomic writes.

pub mod categories;
pub mod expenses;
pub mod file_io;

pub use categories::CategorySet;
pub use expenses::{ExpenseStore, Recorded};
pub use file_io::{write_atomic, write_json_atomic};

/// Counts export attempts within one run so repeated saves get distinct names
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SaveCounter(u32);

impl SaveCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment and return the new value (first call returns 1)
    pub fn next(&mut self) -> u32 {
        self.0 += 1;
        self.0
    }

    pub fn current(&self) -> u32 {
        self.0
    }
}

/// All state owned by one tracker session
#[derive(Debug, Default)]
pub struct AppState {
    pub expenses: ExpenseStore,
    pub categories: CategorySet,
    pub save_counter: SaveCounter,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_counter_starts_at_one() {
        let mut counter = SaveCounter::new();
        assert_eq!(counter.current(), 0);
        assert_eq!(counter.next(), 1);
        assert_eq!(counter.next(), 2);
        assert_eq!(counter.current(), 2);
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = AppState::new();
        assert!(state.expenses.is_empty());
        assert!(state.categories.is_empty());
        assert_eq!(state.save_counter.current(), 0);
    }
}
