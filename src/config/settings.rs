//! User settings for the expense tracker
//!
//! Manages user preferences including the export location, currency symbol,
//! and whether the export folder is opened after saving.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::{default_export_dir, TrackerPaths, DEFAULT_EXPORT_FOLDER};
use crate::error::TrackerError;
use crate::storage::file_io::write_json_atomic;

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in reports
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Folder created under the desktop for exported lists
    #[serde(default = "default_export_folder_name")]
    pub export_folder_name: String,

    /// Explicit export directory, overriding the desktop folder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// Open the export folder in the file browser when the session ends
    #[serde(default = "default_true")]
    pub open_folder_after_save: bool,

    /// Record expense and export events in the audit log (off unless set)
    #[serde(default)]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_export_folder_name() -> String {
    DEFAULT_EXPORT_FOLDER.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            export_folder_name: default_export_folder_name(),
            export_dir: None,
            open_folder_after_save: true,
            audit_enabled: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrackerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Directory exported lists are written to
    pub fn resolve_export_dir(&self) -> Result<PathBuf, TrackerError> {
        match &self.export_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_export_dir(&self.export_folder_name),
        }
    }
}
