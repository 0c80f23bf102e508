//! Failed-login detection.
//!
//! A line counts as a failed attempt when it contains the substring
//! `401` anywhere or the literal phrase `Invalid credentials`. Either
//! marker alone qualifies. The markers are raw substrings, not parsed
//! status fields, so e.g. a byte count of `4012` also qualifies a line.
//! That looseness is inherited behavior, kept on purpose.

use crate::accesslog::patterns::LogPatterns;
use crate::analysis::IpCount;
use std::collections::HashMap;

const STATUS_MARKER: &str = "401";
const PHRASE_MARKER: &str = "Invalid credentials";

/// Tallies failed-login attempts per IP and keeps addresses whose count
/// strictly exceeds `threshold`.
///
/// Addresses at or below the threshold are dropped entirely, not
/// reported as zero. Qualified lines without an IPv4-shaped token
/// contribute nothing. The result is in first-seen order.
pub fn detect_suspicious_activity(
    lines: &[String],
    patterns: &LogPatterns,
    threshold: usize,
) -> Vec<IpCount> {
    let mut attempts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for line in lines {
        if !line.contains(STATUS_MARKER) && !line.contains(PHRASE_MARKER) {
            continue;
        }
        let Some(m) = patterns.ipv4.find(line) else {
            continue;
        };
        let ip = m.as_str();

        match attempts.get_mut(ip) {
            Some(count) => *count += 1,
            None => {
                attempts.insert(ip.to_string(), 1);
                order.push(ip.to_string());
            }
        }
    }

    order
        .into_iter()
        .filter_map(|ip| {
            let count = attempts[&ip];
            (count > threshold).then_some(IpCount { ip, count })
        })
        .collect()
}
