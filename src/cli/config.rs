//! CLI commands for configuration

use std::path::Path;

use crate::config::{Settings, TrackerPaths};
use crate::error::TrackerResult;

/// Render paths and effective settings
pub fn format_config(paths: &TrackerPaths, settings: &Settings, export_dir: &Path) -> String {
    let mut output = String::new();
    output.push_str("Expense Tracker Configuration\n");
    output.push_str("=============================\n");
    output.push_str(&format!("Config directory: {}\n", paths.base_dir().display()));
    output.push_str(&format!("Settings file:    {}\n", paths.settings_file().display()));
    output.push_str(&format!("Audit log:        {}\n", paths.audit_log().display()));
    output.push_str(&format!("Export directory: {}\n", export_dir.display()));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Currency symbol:        {}\n", settings.currency_symbol));
    output.push_str(&format!("  Open folder after save: {}\n", settings.open_folder_after_save));
    output.push_str(&format!("  Audit log enabled:      {}\n", settings.audit_enabled));
    output
}

/// Show current configuration and paths
pub fn handle_config_command(
    paths: &TrackerPaths,
    settings: &Settings,
    export_dir: &Path,
) -> TrackerResult<()> {
    print!("{}", format_config(paths, settings, export_dir));
    if !paths.is_initialized() {
        println!();
        println!(
            "No settings file yet; defaults are in use. \
             Run 'expense-tracker init' to create one."
        );
    }
    Ok(())
}

/// Write the settings file so it can be edited
pub fn handle_init_command(paths: &TrackerPaths, settings: &Settings) -> TrackerResult<()> {
    if paths.is_initialized() {
        println!("Settings already exist at: {}", paths.settings_file().display());
        return Ok(());
    }

    settings.save(paths)?;
    println!("Settings written to: {}", paths.settings_file().display());
    Ok(())
}
