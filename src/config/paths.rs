//! Path management for the expense tracker
//!
//! Resolves where settings and the audit log live, and where exported
//! expense lists are written.
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_TRACKER_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/expense-tracker` on Linux,
//!    `~/Library/Application Support/expense-tracker` on macOS,
//!    `%APPDATA%\expense-tracker\config` on Windows)

use std::path::{Path, PathBuf};

use directories::{ProjectDirs, UserDirs};

use crate::error::TrackerError;

/// Default name of the folder created under the desktop for exports
pub const DEFAULT_EXPORT_FOLDER: &str = "Expense Tracker Lists";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Base directory for settings and the audit log
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Create a new TrackerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform config directory can be determined.
    pub fn new() -> Result<Self, TrackerError> {
        let base_dir = if let Ok(custom) = std::env::var("EXPENSE_TRACKER_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create TrackerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if settings have been written (via `init` or a previous save)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// The export directory under the user's desktop
///
/// Falls back to `<home>/Desktop` when the platform reports no desktop
/// directory (common on headless Linux).
pub fn default_export_dir(folder_name: &str) -> Result<PathBuf, TrackerError> {
    let dirs = UserDirs::new()
        .ok_or_else(|| TrackerError::Config("Could not determine home directory".into()))?;

    let desktop = dirs
        .desktop_dir()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dirs.home_dir().join("Desktop"));

    Ok(desktop.join(folder_name))
}

fn resolve_default_path() -> Result<PathBuf, TrackerError> {
    ProjectDirs::from("", "", "expense-tracker")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TrackerError::Config("Could not determine config directory".into()))
}
