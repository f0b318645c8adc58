use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_config_command, handle_history_command, handle_init_command, handle_run_command,
    RunOptions,
};
use expense_tracker::config::{Settings, TrackerPaths};

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Interactive terminal expense tracker",
    long_about = "Enter expenses with a description, amount and category, view totals \
                  by category, and save a tab-delimited list you can paste into a \
                  spreadsheet."
)]
struct Cli {
    /// Directory exported lists are written to
    #[arg(long, global = true, env = "EXPENSE_TRACKER_EXPORT_DIR")]
    export_dir: Option<PathBuf>,

    /// Don't open the export folder after saving
    #[arg(long, global = true)]
    no_open: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (the default)
    Run,

    /// Show current configuration and paths
    Config,

    /// Write a settings file with the defaults
    Init,

    /// Show recent entries from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "expense_tracker=debug"
    } else {
        "expense_tracker=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None | Some(Commands::Run) => {
            let options = RunOptions {
                export_dir: cli.export_dir,
                no_open: cli.no_open,
            };
            handle_run_command(&paths, &settings, options)?;
        }
        Some(Commands::Config) => {
            let export_dir = match cli.export_dir {
                Some(dir) => dir,
                None => settings.resolve_export_dir()?,
            };
            handle_config_command(&paths, &settings, &export_dir)?;
        }
        Some(Commands::Init) => handle_init_command(&paths, &settings)?,
        Some(Commands::History { limit }) => handle_history_command(&paths, limit)?,
    }

    Ok(())
}
