//! Deterministic, pure logic for log index comparison.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! indices and return deterministic outputs suitable for tests.

pub mod index;
pub mod queries;
pub mod render;
pub mod types;
