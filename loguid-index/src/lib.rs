//! Compare log listings produced by the loguid reader.
//!
//! Each listing maps a log UID (loguid) to the log files carrying it. Two
//! listings are compared: one for the local log directory and one for the NAS.
//!
//! - **[`core`]**: Pure, deterministic logic (parsing, queries, rendering).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Reading listing files and the optional config file.
//!
//! [`compare`] ties both together to implement the CLI commands.

pub mod compare;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
