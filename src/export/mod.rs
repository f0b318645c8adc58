//! Export module for the expense tracker
//!
//! Saves the current expenses to a timestamped, tab-delimited text file in
//! the export directory.

pub mod tsv;

pub use tsv::export_expenses_tsv;

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::{debug, info};

use crate::error::TrackerError;
use crate::storage::{write_atomic, AppState};

/// Timestamp embedded in export file names
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Why a save did not produce a file
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Error creating folder: {0}")]
    CreateFolder(std::io::Error),

    #[error("Error saving expenses: {0}")]
    Write(TrackerError),
}

/// Build `<base>_<yyyyMMdd_HHmmss>_<counter>.txt`
pub fn export_file_name(base_name: &str, timestamp: NaiveDateTime, counter: u32) -> String {
    format!(
        "{}_{}_{}.txt",
        base_name,
        timestamp.format(TIMESTAMP_FORMAT),
        counter
    )
}

/// Writes export files into one directory
#[derive(Debug, Clone)]
pub struct Exporter {
    export_dir: PathBuf,
}

impl Exporter {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
        }
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Save every expense in `state` under a new file name
    ///
    /// The save counter is advanced before anything touches the disk, so a
    /// failed attempt still consumes a number.
    pub fn save(
        &self,
        state: &mut AppState,
        base_name: &str,
        now: NaiveDateTime,
    ) -> Result<PathBuf, SaveError> {
        let counter = state.save_counter.next();
        let file_name = export_file_name(base_name, now, counter);

        if !self.export_dir.exists() {
            debug!(dir = %self.export_dir.display(), "creating export directory");
            std::fs::create_dir_all(&self.export_dir).map_err(SaveError::CreateFolder)?;
        }

        let path = self.export_dir.join(file_name);
        write_atomic(&path, |writer| export_expenses_tsv(&state.expenses, writer))
            .map_err(SaveError::Write)?;

        info!(path = %path.display(), expenses = state.expenses.len(), "saved expenses");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 30)
            .unwrap()
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name("march", timestamp(), 1),
            "march_20250307_090530_1.txt"
        );
    }

    #[test]
    fn test_save_creates_directory_and_file() {
        let temp_dir = TempDir::new().unwrap();
        let export_dir = temp_dir.path().join("Desktop").join("Expense Tracker Lists");
        let exporter = Exporter::new(&export_dir);

        let mut state = AppState::new();
        state
            .expenses
            .record("Coffee", "Food", Money::from_cents(350))
            .unwrap();

        let path = exporter.save(&mut state, "march", timestamp()).unwrap();

        assert_eq!(path, export_dir.join("march_20250307_090530_1.txt"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Description\tCategory\tAmount\nCoffee\tFood\t3.50\n"
        );
        assert_eq!(state.save_counter.current(), 1);
    }

    #[test]
    fn test_repeated_saves_get_distinct_names() {
        let temp_dir = TempDir::new().unwrap();
        let exporter = Exporter::new(temp_dir.path());
        let mut state = AppState::new();

        let first = exporter.save(&mut state, "list", timestamp()).unwrap();
        let second = exporter.save(&mut state, "list", timestamp()).unwrap();

        assert_ne!(first, second);
        assert!(second.ends_with("list_20250307_090530_2.txt"));
    }

    #[test]
    fn test_folder_creation_failure() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file in the way").unwrap();

        let exporter = Exporter::new(blocker.join("exports"));
        let mut state = AppState::new();

        let err = exporter.save(&mut state, "list", timestamp()).unwrap_err();
        assert!(matches!(err, SaveError::CreateFolder(_)));
        assert!(err.to_string().starts_with("Error creating folder: "));
    }

    #[test]
    fn test_write_failure_leaves_no_file() {
        let temp_dir = TempDir::new().unwrap();
        let exporter = Exporter::new(temp_dir.path());
        let mut state = AppState::new();

        // A path separator in the base name points into a missing directory
        let err = exporter
            .save(&mut state, "missing/list", timestamp())
            .unwrap_err();

        assert!(matches!(err, SaveError::Write(_)));
        assert!(err.to_string().starts_with("Error saving expenses: "));
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }
}
