//! Command dispatch for `loguid-index-compare`.
//!
//! Results go to `out`; "nothing found" notices go to `err` and are not
//! failures.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::core::index::LogIndex;
use crate::core::types::Location;
use crate::core::{queries, render};
use crate::io::index_file::load_index;

/// Query to run against the two listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Loguids present in both listings.
    Shared,
    /// Logs whose loguid is only in the given location.
    Only(Location),
    /// Loguids stored under several log names in the given location.
    Duplicates(Location),
    /// Logs the loguid reader could not assign a loguid to.
    Missing(Location),
    /// Counts over both listings.
    Summary,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Whether a command produced any rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOptions {
    pub format: OutputFormat,
    /// Loguid under which logs without a UID are listed.
    pub missing_loguid: String,
}

/// Both listings, loaded once per invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Indices {
    pub local: LogIndex,
    pub nas: LogIndex,
}

impl Indices {
    /// Load both listings. Fails before any output if either is unreadable.
    pub fn load(local: &Path, nas: &Path) -> Result<Self> {
        let local = load_index(local).context("load local index")?;
        let nas = load_index(nas).context("load nas index")?;
        Ok(Self { local, nas })
    }

    pub fn location(&self, location: Location) -> &LogIndex {
        match location {
            Location::Local => &self.local,
            Location::Nas => &self.nas,
        }
    }
}

/// Run `command` and write its result.
pub fn run_command(
    command: Command,
    indices: &Indices,
    options: &CompareOptions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Outcome> {
    debug!(?command, format = ?options.format, "running command");
    let outcome = match command {
        Command::Shared => {
            let rows = queries::shared(&indices.local, &indices.nas);
            emit(rows.as_slice(), render::shared, options.format, out)?;
            found_or_warn(rows.is_empty(), "No shared logs found", err)?
        }
        Command::Only(location) => {
            let logs = queries::only(
                indices.location(location),
                indices.location(location.other()),
            );
            emit(logs.as_slice(), render::logs, options.format, out)?;
            found_or_warn(
                logs.is_empty(),
                &format!("No logs found only in {location}"),
                err,
            )?
        }
        Command::Duplicates(location) => {
            let duplicates = queries::duplicates(indices.location(location));
            emit(duplicates.as_slice(), render::duplicates, options.format, out)?;
            found_or_warn(duplicates.is_empty(), "No duplicate logs found", err)?
        }
        Command::Missing(location) => {
            let logs = queries::missing(indices.location(location), &options.missing_loguid);
            emit(logs.as_slice(), render::logs, options.format, out)?;
            found_or_warn(
                logs.is_empty(),
                &format!("No logs without loguid found in {location}"),
                err,
            )?
        }
        Command::Summary => {
            let summary = queries::summary(&indices.local, &indices.nas, &options.missing_loguid);
            emit(&summary, render::summary, options.format, out)?;
            Outcome::Found
        }
    };
    debug!(?outcome, "command finished");
    Ok(outcome)
}

fn emit<T, F>(value: &T, text: F, format: OutputFormat, out: &mut impl Write) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    let payload = match format {
        OutputFormat::Text => text(value),
        OutputFormat::Json => {
            let mut payload = serde_json::to_string_pretty(value).context("serialize json")?;
            payload.push('\n');
            payload
        }
    };
    out.write_all(payload.as_bytes()).context("write output")?;
    Ok(())
}

fn found_or_warn(empty: bool, notice: &str, err: &mut impl Write) -> Result<Outcome> {
    if !empty {
        return Ok(Outcome::Found);
    }
    writeln!(err, "{notice}").context("write notice")?;
    Ok(Outcome::Empty)
}
