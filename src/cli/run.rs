//! Interactive session command

use std::io;
use std::path::PathBuf;

use tracing::info;

use crate::audit::AuditLogger;
use crate::config::{Settings, TrackerPaths};
use crate::error::TrackerResult;
use crate::export::Exporter;
use crate::opener::SystemOpener;
use crate::session::Session;

/// Command-line overrides for a session
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Export directory overriding settings and the desktop default
    pub export_dir: Option<PathBuf>,
    /// Skip opening the export folder after saving
    pub no_open: bool,
}

/// Run the interactive tracker on stdin/stdout
pub fn handle_run_command(
    paths: &TrackerPaths,
    settings: &Settings,
    options: RunOptions,
) -> TrackerResult<()> {
    let export_dir = match options.export_dir {
        Some(dir) => dir,
        None => settings.resolve_export_dir()?,
    };
    info!(export_dir = %export_dir.display(), "starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), Exporter::new(export_dir))
        .with_currency_symbol(settings.currency_symbol.as_str());

    if settings.open_folder_after_save && !options.no_open {
        session = session.with_opener(Box::new(SystemOpener));
    }
    if settings.audit_enabled {
        session = session.with_audit(AuditLogger::new(paths.audit_log()));
    }

    session.run()
}
