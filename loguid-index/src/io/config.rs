//! Optional comparator configuration (`loguid-index.toml`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "loguid-index.toml";

/// Loguid the loguid reader writes for logs that carry no UID.
pub const MISSING_LOGUID_PLACEHOLDER: &str = "MISSING (run this log through the logcutter)";

/// Comparator configuration (TOML).
///
/// Missing fields default to the conventional listing names in the working
/// directory. Command line flags take precedence over these values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CompareConfig {
    /// Listing of the local log directory.
    pub local_index: PathBuf,

    /// Listing of the NAS log directory.
    pub nas_index: PathBuf,

    /// Loguid recorded for logs without a UID.
    pub missing_loguid: String,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            local_index: PathBuf::from("./log-index-local.txt"),
            nas_index: PathBuf::from("./log-index-nas.txt"),
            missing_loguid: MISSING_LOGUID_PLACEHOLDER.to_string(),
        }
    }
}

impl CompareConfig {
    pub fn validate(&self) -> Result<()> {
        if self.local_index.as_os_str().is_empty() {
            return Err(anyhow!("local_index must be a non-empty path"));
        }
        if self.nas_index.as_os_str().is_empty() {
            return Err(anyhow!("nas_index must be a non-empty path"));
        }
        if self.missing_loguid.trim().is_empty() {
            return Err(anyhow!("missing_loguid must be non-empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `CompareConfig::default()`.
pub fn load_config(path: &Path) -> Result<CompareConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        let cfg = CompareConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    read_config(path)
}

/// Load config from a TOML file that must exist.
pub fn read_config(path: &Path) -> Result<CompareConfig> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CompareConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), ?cfg, "config loaded");
    Ok(cfg)
}
