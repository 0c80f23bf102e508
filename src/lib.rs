//! # Access Audit Tools
//!
//! Command-line tool for analyzing web server access logs.
//!
//! ## Overview
//!
//! This crate runs three independent extraction passes over an access log
//! and reports the results to the console and to a CSV file:
//!
//! - **Request counting** - requests per IP address, sorted by volume
//! - **Endpoint hotspot** - the single most frequently accessed path
//! - **Suspicious activity** - IPs whose failed-login count exceeds a
//!   configurable threshold
//!
//! The whole log is loaded into memory up front and each analyzer makes
//! its own pass over the line sequence. There is no streaming and no
//! shared accumulator state between analyzers.
//!
//! ## Architecture
//!
//! - [`accesslog`] - Log line loading and the extraction patterns
//! - [`analysis`] - The three analyzers
//! - [`report`] - Console and CSV report rendering
//! - [`commands`] - The `analyze` pipeline command
//! - [`utils`] - Shared utilities (compressed file reading, progress,
//!   number formatting)
//!
//! ## Example Usage
//!
//! ```bash
//! # Analyze the default log file (sample.log)
//! access-audit
//!
//! # Explicit paths and a custom failed-login threshold
//! access-audit --log-file access.log --output results.csv --threshold 5
//!
//! # Compressed logs work directly
//! access-audit --log-file access.log.gz
//! ```

pub mod accesslog;
pub mod analysis;
pub mod commands;
pub mod config;
pub mod report;
pub mod utils;
