//! Opening the export folder in the platform file browser
//!
//! Launching is best-effort: a missing launcher is reported as unsupported
//! rather than treated as an error.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

/// Result of trying to show a folder to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The file browser was launched
    Opened,
    /// No file browser integration is available
    Unsupported,
    /// Launching failed
    Failed(String),
}

/// Something that can show a directory to the user
pub trait FolderOpener {
    fn open(&self, dir: &Path) -> OpenOutcome;
}

/// Launches the platform's file browser
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl SystemOpener {
    /// Program used to open folders on this platform
    pub fn launcher() -> Option<&'static str> {
        if cfg!(target_os = "macos") {
            Some("open")
        } else if cfg!(windows) {
            Some("explorer")
        } else if cfg!(any(
            target_os = "linux",
            target_os = "freebsd",
            target_os = "openbsd",
            target_os = "netbsd",
            target_os = "dragonfly"
        )) {
            Some("xdg-open")
        } else {
            None
        }
    }
}

impl FolderOpener for SystemOpener {
    fn open(&self, dir: &Path) -> OpenOutcome {
        if !dir.is_dir() {
            return OpenOutcome::Failed(format!("The folder {} doesn't exist.", dir.display()));
        }

        let Some(launcher) = Self::launcher() else {
            return OpenOutcome::Unsupported;
        };

        debug!(launcher, dir = %dir.display(), "opening export folder");

        match Command::new(launcher)
            .arg(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(mut child) => {
                // Launchers exit as soon as the browser is up; reap it off-thread
                std::thread::spawn(move || {
                    let _ = child.wait();
                });
                OpenOutcome::Opened
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => OpenOutcome::Unsupported,
            Err(e) => OpenOutcome::Failed(e.to_string()),
        }
    }
}

/// Message shown to the user for an outcome
pub fn describe_outcome(outcome: &OpenOutcome, dir: &Path) -> String {
    match outcome {
        OpenOutcome::Opened => format!("Folder opened: {}", dir.display()),
        OpenOutcome::Unsupported => "Desktop is not supported on this system.".to_string(),
        OpenOutcome::Failed(message) => format!("Error opening folder: {}", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_folder_fails_without_launching() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        let outcome = SystemOpener.open(&missing);
        assert!(matches!(outcome, OpenOutcome::Failed(_)));
        assert!(describe_outcome(&outcome, &missing).starts_with("Error opening folder: "));
    }

    #[test]
    fn test_describe_outcome() {
        let dir = Path::new("/tmp/Expense Tracker Lists");
        assert_eq!(
            describe_outcome(&OpenOutcome::Opened, dir),
            "Folder opened: /tmp/Expense Tracker Lists"
        );
        assert_eq!(
            describe_outcome(&OpenOutcome::Unsupported, dir),
            "Desktop is not supported on this system."
        );
    }

    #[test]
    fn test_launcher_known_on_common_platforms() {
        if cfg!(any(target_os = "linux", target_os = "macos", windows)) {
            assert!(SystemOpener::launcher().is_some());
        }
    }
}
