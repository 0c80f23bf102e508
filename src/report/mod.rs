//! Report rendering.
//!
//! Consumes the three analyzer outputs and produces two renderings:
//!
//! - [`console`] - Fixed-width text for the terminal
//! - [`csv`] - A three-section CSV artifact

pub mod console;
pub mod csv;
