//! Test-only helpers for building indices and listing files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::index::{LogIndex, SEPARATOR};

/// Build an index from `(loguid, log)` pairs.
pub fn index(entries: &[(&str, &str)]) -> LogIndex {
    entries.iter().copied().collect()
}

/// Render `(loguid, log)` pairs as a listing, with the header comment the
/// loguid reader output usually carries.
pub fn listing(entries: &[(&str, &str)]) -> String {
    let mut out = String::from("# loguid  log\n");
    for (loguid, log) in entries {
        out.push_str(&format!("{loguid}{SEPARATOR}{log}\n"));
    }
    out
}

/// Temporary directory holding listing and config files.
pub struct IndexFixture {
    dir: TempDir,
}

impl IndexFixture {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    /// Write a listing of `(loguid, log)` pairs to `name`.
    pub fn write_listing(&self, name: &str, entries: &[(&str, &str)]) -> Result<PathBuf> {
        self.write(name, &listing(entries))
    }
}
