//! Shared utilities.
//!
//! - [`reader`] - File opening with automatic `.gz`/`.zst` decompression
//! - [`progress`] - Progress reporting while the log is read
//! - [`format`] - Number formatting for summary output

pub mod format;
pub mod progress;
pub mod reader;
