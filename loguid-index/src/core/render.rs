//! Plain-text rendering of query results.

use crate::core::types::{Duplicate, SharedRow, Summary};

const LIST_SEPARATOR: &str = ", ";
const COLUMN_SEPARATOR: &str = " -> ";

/// Two aligned columns: local names, then NAS names.
///
/// The left column is padded to the widest local string, counted in chars.
pub fn shared(rows: &[SharedRow]) -> String {
    let left: Vec<String> = rows.iter().map(|row| row.local.join(LIST_SEPARATOR)).collect();
    let width = left.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for (l, row) in left.iter().zip(rows) {
        out.push_str(&format!(
            "{l:<width$}{}{}\n",
            COLUMN_SEPARATOR,
            row.nas.join(LIST_SEPARATOR)
        ));
    }
    out
}

/// One log name per line.
pub fn logs(logs: &[String]) -> String {
    logs.iter().map(|log| format!("{log}\n")).collect()
}

/// Loguid, its log names, then a blank line, per duplicate.
pub fn duplicates(duplicates: &[Duplicate]) -> String {
    let mut out = String::new();
    for duplicate in duplicates {
        out.push_str(&duplicate.loguid);
        out.push('\n');
        out.push_str(&logs(&duplicate.logs));
        out.push('\n');
    }
    out
}

pub fn summary(summary: &Summary) -> String {
    let mut out = format!("shared: {}\n", summary.shared);
    for (name, side) in [("local", &summary.local), ("nas", &summary.nas)] {
        out.push_str(&format!("{name}.loguids: {}\n", side.loguids));
        out.push_str(&format!("{name}.logs: {}\n", side.logs));
        out.push_str(&format!("{name}.only: {}\n", side.only));
        out.push_str(&format!("{name}.duplicates: {}\n", side.duplicates));
        out.push_str(&format!("{name}.missing: {}\n", side.missing));
    }
    out
}
