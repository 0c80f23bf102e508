//! Extraction patterns for access log lines.
//!
//! Two patterns cover everything the analyzers need:
//!
//! - An IPv4-shaped token: four dot-separated runs of decimal digits.
//!   Octet ranges are intentionally NOT validated, so `999.999.999.999`
//!   matches. Tightening this would change observable behavior on
//!   malformed logs.
//! - A quoted HTTP request line, from which only the path is captured,
//!   e.g. `/home` out of `"GET /home HTTP/1.1"`.

use regex::Regex;

/// Compiled extraction patterns, built once per run and shared by all
/// analyzers.
#[derive(Debug)]
pub struct LogPatterns {
    /// Matches the first IPv4-shaped token in a line.
    pub ipv4: Regex,
    /// Captures the path from a quoted `"METHOD /path ..."` fragment.
    pub request_line: Regex,
}

impl LogPatterns {
    pub fn new() -> Self {
        Self {
            ipv4: Regex::new(r"\d+\.\d+\.\d+\.\d+").expect("invalid IPv4 pattern"),
            request_line: Regex::new(r#""[A-Z]+\s(/[^\s]*)"#)
                .expect("invalid request line pattern"),
        }
    }
}
