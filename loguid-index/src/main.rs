//! Compare loguid listings of local and NAS log storage.
//!
//! Listings are produced by the loguid reader, one `LOGUID  LOG` entry per
//! line. The tool reports logs shared between both locations, logs present
//! in only one, and loguids stored under several names.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use loguid_index::compare::{Command, CompareOptions, Indices, OutputFormat, run_command};
use loguid_index::core::types::Location;
use loguid_index::exit_codes;
use loguid_index::io::config::{CompareConfig, DEFAULT_CONFIG_PATH, load_config, read_config};
use loguid_index::logging;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "loguid-index-compare",
    version,
    about = "Compare log listings created with the loguid reader"
)]
struct Cli {
    /// Index file of local logs [default: ./log-index-local.txt]
    #[arg(short, long, value_name = "PATH", global = true)]
    local: Option<PathBuf>,

    /// Index file of NAS logs [default: ./log-index-nas.txt]
    #[arg(short, long, value_name = "PATH", global = true)]
    nas: Option<PathBuf>,

    /// Config file [default: ./loguid-index.toml, if present]
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Find logs that are shared between local and nas.
    Shared,
    /// Find logs that are only in LOCATION.
    Only {
        /// Location to process.
        location: Location,
    },
    /// Find logs that exist multiple times in LOCATION.
    Duplicates {
        /// Location to process.
        location: Location,
    },
    /// List logs in LOCATION that have no loguid.
    Missing {
        /// Location to process.
        location: Location,
    },
    /// Count shared, unshared and duplicate logs in both locations.
    Summary,
}

impl From<CliCommand> for Command {
    fn from(command: CliCommand) -> Self {
        match command {
            CliCommand::Shared => Command::Shared,
            CliCommand::Only { location } => Command::Only(location),
            CliCommand::Duplicates { location } => Command::Duplicates(location),
            CliCommand::Missing { location } => Command::Missing(location),
            CliCommand::Summary => Command::Summary,
        }
    }
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => read_config(path)?,
        None => load_config(Path::new(DEFAULT_CONFIG_PATH))?,
    };
    let (local, nas) = resolve_paths(&cli, &config);
    debug!(local = %local.display(), nas = %nas.display(), "resolved index paths");

    let indices = Indices::load(&local, &nas)?;
    let options = CompareOptions {
        format: if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
        missing_loguid: config.missing_loguid,
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    run_command(
        cli.command.into(),
        &indices,
        &options,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;
    Ok(())
}

/// Command line flags override the config file.
fn resolve_paths(cli: &Cli, config: &CompareConfig) -> (PathBuf, PathBuf) {
    let local = cli.local.clone().unwrap_or_else(|| config.local_index.clone());
    let nas = cli.nas.clone().unwrap_or_else(|| config.nas_index.clone());
    (local, nas)
}
