//! Listing parser and the in-memory loguid index.
//!
//! A listing holds one entry per line, `LOGUID<two spaces>LOG`. Lines whose
//! first non-whitespace character is `#` are comments.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

/// Separator between loguid and log name.
pub const SEPARATOR: &str = "  ";

/// Mapping from loguid to the sorted, duplicate-free log names carrying it.
///
/// Every loguid maps to at least one name. The index is not mutated after
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogIndex {
    entries: BTreeMap<String, Vec<String>>,
}

impl LogIndex {
    /// Parse a listing.
    ///
    /// Parsing is tolerant: a line without separator is recorded under the
    /// whole line as loguid with an empty log name. Whitespace-only lines are
    /// skipped.
    pub fn parse(contents: &str) -> Self {
        let mut unseparated = 0usize;
        let index: Self = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| {
                line.split_once(SEPARATOR).unwrap_or_else(|| {
                    unseparated += 1;
                    (line, "")
                })
            })
            .collect();
        if unseparated > 0 {
            debug!(unseparated, "lines without separator recorded with empty log name");
        }
        index
    }

    pub fn get(&self, loguid: &str) -> Option<&[String]> {
        self.entries.get(loguid).map(Vec::as_slice)
    }

    pub fn contains(&self, loguid: &str) -> bool {
        self.entries.contains_key(loguid)
    }

    /// Number of distinct loguids.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct (loguid, log) entries.
    pub fn log_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Iterate entries in loguid order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(loguid, logs)| (loguid.as_str(), logs.as_slice()))
    }

    pub fn loguids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LogIndex {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut grouped: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (loguid, log) in iter {
            grouped.entry(loguid.into()).or_default().insert(log.into());
        }
        let entries = grouped
            .into_iter()
            .map(|(loguid, logs)| (loguid, logs.into_iter().collect()))
            .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_groups_logs_by_loguid() {
        let index = LogIndex::parse("abc  foo.log\nabc  bar.log\nxyz  baz.log\n");
        assert_eq!(index.len(), 2);
        assert_eq!(
            index.get("abc"),
            Some(&["bar.log".to_string(), "foo.log".to_string()][..])
        );
        assert_eq!(index.get("xyz"), Some(&["baz.log".to_string()][..]));
    }

    #[test]
    fn parse_skips_comments_and_blank_lines() {
        let index = LogIndex::parse("# header\n   # indented\n\n   \nabc  foo.log\n");
        assert_eq!(index.loguids().collect::<Vec<_>>(), vec!["abc"]);
    }

    #[test]
    fn comment_only_listing_is_empty() {
        let index = LogIndex::parse("# generated by loguidreader\n# nothing here\n");
        assert!(index.is_empty());
        assert_eq!(index.log_count(), 0);
    }

    #[test]
    fn repeated_entries_collapse() {
        let index = LogIndex::parse("abc  foo.log\nabc  foo.log\n");
        assert_eq!(index.get("abc"), Some(&["foo.log".to_string()][..]));
        assert_eq!(index.log_count(), 1);
    }

    #[test]
    fn line_without_separator_records_empty_name() {
        let index = LogIndex::parse("xyz\n");
        assert_eq!(index.get("xyz"), Some(&[String::new()][..]));
    }

    #[test]
    fn single_space_is_not_a_separator() {
        let index = LogIndex::parse("abc foo.log\n");
        assert_eq!(index.get("abc foo.log"), Some(&[String::new()][..]));
        assert!(!index.contains("abc"));
    }

    #[test]
    fn splits_on_first_separator_only() {
        let index = LogIndex::parse("abc   spaced  name.log\n");
        assert_eq!(index.get("abc"), Some(&[" spaced  name.log".to_string()][..]));
    }

    #[test]
    fn trims_surrounding_whitespace_and_crlf() {
        let index = LogIndex::parse("  abc  foo.log  \r\n");
        assert_eq!(index.get("abc"), Some(&["foo.log".to_string()][..]));
    }

    #[test]
    fn placeholder_loguid_with_spaces_is_kept_whole() {
        let index =
            LogIndex::parse("MISSING (run this log through the logcutter)  /logs/a.log\n");
        assert!(index.contains("MISSING (run this log through the logcutter)"));
    }

    #[test]
    fn parse_is_idempotent() {
        let listing = "b  2.log\na  1.log\n# c\nb  1.log\n";
        assert_eq!(LogIndex::parse(listing), LogIndex::parse(listing));
    }
}
