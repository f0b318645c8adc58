//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't leave half-written files behind
//! on failure.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::TrackerError;

/// Sibling path used while a file is being written
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn flush_and_sync(writer: &mut BufWriter<File>) -> Result<(), TrackerError> {
    writer
        .flush()
        .map_err(|e| TrackerError::Io(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TrackerError::Io(format!("Failed to sync data: {}", e)))
}

/// Write a file atomically (write to temp, then rename)
///
/// The closure receives a buffered writer over the temp file. The target
/// is either completely written or not touched at all. The parent
/// directory must already exist.
pub fn write_atomic<P, F>(path: P, write: F) -> Result<(), TrackerError>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> Result<(), TrackerError>,
{
    let path = path.as_ref();
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| TrackerError::Io(format!("Failed to create {}: {}", temp_path.display(), e)))?;

    let mut writer = BufWriter::new(file);

    let result = write(&mut writer).and_then(|()| flush_and_sync(&mut writer));

    if let Err(err) = result {
        drop(writer);
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    drop(writer);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TrackerError::Io(format!("Failed to rename temp file: {}", e))
    })
}

/// Write JSON to a file atomically, creating parent directories
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), TrackerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    write_atomic(path, |writer| {
        serde_json::to_writer_pretty(writer, data)
            .map_err(|e| TrackerError::Json(format!("Failed to serialize data: {}", e)))
    })
}
