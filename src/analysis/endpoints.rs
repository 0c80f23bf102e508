//! Endpoint hotspot analysis.
//!
//! Extracts the request path from each quoted `"METHOD /path ..."`
//! fragment and reports the single most frequently accessed path.

use crate::accesslog::patterns::LogPatterns;
use std::collections::HashMap;

/// The most frequently accessed endpoint, or a sentinel when no line
/// matched the request-line pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopEndpoint {
    /// `None` means no endpoint data exists, as opposed to a real path
    /// with a zero count (which cannot occur).
    pub path: Option<String>,
    pub count: usize,
}

impl TopEndpoint {
    /// The no-data sentinel. Callers must branch on this rather than
    /// printing a meaningless path.
    pub fn none() -> Self {
        Self {
            path: None,
            count: 0,
        }
    }
}

/// Finds the most frequently accessed endpoint path.
///
/// The HTTP method is discarded; only the path is tallied. When several
/// paths tie for the maximum, the first-seen one wins, keeping the
/// result deterministic across runs. Returns the sentinel iff zero
/// lines matched.
pub fn most_frequent_endpoint(lines: &[String], patterns: &LogPatterns) -> TopEndpoint {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for line in lines {
        let Some(caps) = patterns.request_line.captures(line) else {
            continue;
        };
        let path = &caps[1];

        match counts.get_mut(path) {
            Some(count) => *count += 1,
            None => {
                counts.insert(path.to_string(), 1);
                order.push(path.to_string());
            }
        }
    }

    let mut top = TopEndpoint::none();
    for path in order {
        let count = counts[&path];
        if count > top.count {
            top = TopEndpoint {
                path: Some(path),
                count,
            };
        }
    }
    top
}
