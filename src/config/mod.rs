//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution (config dir, desktop export dir)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
