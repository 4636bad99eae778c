//! Read-only queries over a pair of log indices.

use crate::core::index::LogIndex;
use crate::core::types::{Duplicate, LocationSummary, SharedRow, Summary};

/// Loguids present in both indices.
///
/// Rows are ordered by the smallest local log name, then by loguid.
pub fn shared(local: &LogIndex, nas: &LogIndex) -> Vec<SharedRow> {
    let mut rows: Vec<SharedRow> = local
        .iter()
        .filter_map(|(loguid, local_logs)| {
            nas.get(loguid).map(|nas_logs| SharedRow {
                loguid: loguid.to_string(),
                local: local_logs.to_vec(),
                nas: nas_logs.to_vec(),
            })
        })
        .collect();
    rows.sort_by(|a, b| {
        a.local
            .first()
            .cmp(&b.local.first())
            .then_with(|| a.loguid.cmp(&b.loguid))
    });
    rows
}

/// Log names whose loguid appears in `location` but not in `other`, sorted.
pub fn only(location: &LogIndex, other: &LogIndex) -> Vec<String> {
    let mut logs: Vec<String> = location
        .iter()
        .filter(|(loguid, _)| !other.contains(loguid))
        .flat_map(|(_, logs)| logs.iter().cloned())
        .collect();
    logs.sort();
    logs
}

/// Loguids carrying more than one log name, in loguid order.
pub fn duplicates(index: &LogIndex) -> Vec<Duplicate> {
    index
        .iter()
        .filter(|(_, logs)| logs.len() > 1)
        .map(|(loguid, logs)| Duplicate {
            loguid: loguid.to_string(),
            logs: logs.to_vec(),
        })
        .collect()
}

/// Log names recorded under the loguid reader's placeholder for logs
/// without a UID.
pub fn missing(index: &LogIndex, placeholder: &str) -> Vec<String> {
    index.get(placeholder).map(<[String]>::to_vec).unwrap_or_default()
}

/// Entry, overlap and duplicate counts for both indices.
pub fn summary(local: &LogIndex, nas: &LogIndex, placeholder: &str) -> Summary {
    let shared = local.loguids().filter(|loguid| nas.contains(loguid)).count();
    Summary {
        shared,
        local: location_summary(local, nas, placeholder),
        nas: location_summary(nas, local, placeholder),
    }
}

fn location_summary(index: &LogIndex, other: &LogIndex, placeholder: &str) -> LocationSummary {
    LocationSummary {
        loguids: index.len(),
        logs: index.log_count(),
        only: index.loguids().filter(|loguid| !other.contains(loguid)).count(),
        duplicates: index.iter().filter(|(_, logs)| logs.len() > 1).count(),
        missing: index.get(placeholder).map_or(0, <[String]>::len),
    }
}
