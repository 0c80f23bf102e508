//! Console report rendering.
//!
//! Produces the fixed-width text report printed after a run. Empty
//! results render as explicit "none found" messages rather than being
//! omitted.

use crate::analysis::endpoints::TopEndpoint;
use crate::analysis::IpCount;
use std::fmt::Write;

/// Renders the full console report as a single string.
pub fn render(requests: &[IpCount], top: &TopEndpoint, suspicious: &[IpCount]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{:<20} {}", "IP Address", "Request Count");
    for entry in requests {
        let _ = writeln!(out, "{:<20} {}", entry.ip, entry.count);
    }

    let _ = writeln!(out, "\nMost Frequently Accessed Endpoint:");
    match &top.path {
        Some(path) => {
            let _ = writeln!(out, "{} (Accessed {} times)", path, top.count);
        }
        None => {
            let _ = writeln!(out, "No endpoints found.");
        }
    }

    let _ = writeln!(out, "\nSuspicious Activity Detected:");
    if suspicious.is_empty() {
        let _ = writeln!(out, "No suspicious activity detected.");
    } else {
        for entry in suspicious {
            let _ = writeln!(out, "{:<20} {}", entry.ip, entry.count);
        }
    }

    out
}
