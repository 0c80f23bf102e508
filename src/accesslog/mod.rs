//! Access log loading and extraction patterns.
//!
//! - [`source`] - Loads the full log into an ordered line sequence with
//!   a typed error distinguishing "file missing" from other read failures
//! - [`patterns`] - Compiled regular expressions shared by the analyzers

pub mod patterns;
pub mod source;
