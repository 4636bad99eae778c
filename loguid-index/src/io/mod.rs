//! I/O helpers for comparator commands.

pub mod config;
pub mod index_file;
