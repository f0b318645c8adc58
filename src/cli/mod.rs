//! CLI command handlers
//!
//! Bridges clap argument parsing with the session, settings and audit log.

pub mod config;
pub mod history;
pub mod run;

pub use config::{handle_config_command, handle_init_command};
pub use history::handle_history_command;
pub use run::{handle_run_command, RunOptions};
