//! Expense Tracker - interactive terminal expense tracking
//!
//! Collects expense line items (description, amount, category) at the
//! console, reports totals, and saves a tab-delimited list that pastes
//! straight into a spreadsheet.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expenses, money amounts and IDs
//! - `storage`: In-memory expense store, category set and atomic file writes
//! - `session`: The prompt-driven menu loop
//! - `reports`: Expense list, category subtotals and grand total
//! - `export`: Timestamped tab-delimited export files
//! - `opener`: Showing the export folder in the file browser
//! - `audit`: Append-only audit log
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::export::Exporter;
//! use expense_tracker::session::Session;
//!
//! let stdin = std::io::stdin();
//! let mut session = Session::new(stdin.lock(), std::io::stdout(), Exporter::new("lists"));
//! session.run()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod opener;
pub mod reports;
pub mod session;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
