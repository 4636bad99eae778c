//! Stable exit codes for `loguid-index-compare`.

/// Command completed, including queries that found nothing.
pub const OK: i32 = 0;
/// An index or config file could not be read or is invalid.
pub const INVALID: i32 = 1;
/// Command line could not be parsed (clap's usage error code).
pub const USAGE: i32 = 2;
