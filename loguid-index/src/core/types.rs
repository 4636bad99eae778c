use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

/// Storage location a listing was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Local,
    Nas,
}

impl Location {
    /// The location on the other side of the comparison.
    pub fn other(self) -> Self {
        match self {
            Self::Local => Self::Nas,
            Self::Nas => Self::Local,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Nas => "nas",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A loguid present in both listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedRow {
    pub loguid: String,
    pub local: Vec<String>,
    pub nas: Vec<String>,
}

/// A loguid stored under more than one log name within one listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Duplicate {
    pub loguid: String,
    pub logs: Vec<String>,
}

/// Per-location counts reported by `summary`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocationSummary {
    /// Distinct loguids in the listing.
    pub loguids: usize,
    /// Distinct (loguid, log) entries in the listing.
    pub logs: usize,
    /// Loguids absent from the other listing.
    pub only: usize,
    /// Loguids with more than one log name.
    pub duplicates: usize,
    /// Logs recorded without a loguid.
    pub missing: usize,
}

/// Counts over both listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub shared: usize,
    pub local: LocationSummary,
    pub nas: LocationSummary,
}
