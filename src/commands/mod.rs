//! Command implementations.
//!
//! - [`analyze`] - The full analysis pipeline: load the log, run the
//!   three analyzers, write the CSV report, and print the console report

pub mod analyze;
