//! CLI command for browsing the audit log

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::TrackerPaths;
use crate::error::TrackerResult;

/// Render audit entries, oldest first
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history recorded.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output
}

/// Show the most recent audit log entries
pub fn handle_history_command(paths: &TrackerPaths, limit: usize) -> TrackerResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(limit)?;
    print!("{}", format_history(&entries));
    Ok(())
}
