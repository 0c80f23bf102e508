//! Per-IP request counting.
//!
//! Counts, for each IPv4-shaped address, the number of lines in which
//! it appeared. Only the first address in a line is counted, even when
//! several IP-like tokens are present (e.g. X-Forwarded-For chains).

use crate::accesslog::patterns::LogPatterns;
use crate::analysis::IpCount;
use std::collections::HashMap;

/// Tallies requests per IP address across all lines.
///
/// Every observed address appears in the result, including count-1
/// entries. The result is sorted descending by count; addresses with
/// equal counts keep their first-seen order (the sort is stable and the
/// accumulator preserves insertion order).
pub fn count_requests_per_ip(lines: &[String], patterns: &LogPatterns) -> Vec<IpCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    // First-seen order, so ties sort deterministically.
    let mut order: Vec<String> = Vec::new();

    for line in lines {
        let Some(m) = patterns.ipv4.find(line) else {
            continue;
        };
        let ip = m.as_str();

        match counts.get_mut(ip) {
            Some(count) => *count += 1,
            None => {
                counts.insert(ip.to_string(), 1);
                order.push(ip.to_string());
            }
        }
    }

    let mut tally: Vec<IpCount> = order
        .into_iter()
        .map(|ip| {
            let count = counts[&ip];
            IpCount { ip, count }
        })
        .collect();

    tally.sort_by(|a, b| b.count.cmp(&a.count));
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_counts_one_per_line() {
        let patterns = LogPatterns::new();
        let input = lines(&[
            r#"203.0.113.5 - - "GET /home HTTP/1.1" 200"#,
            r#"203.0.113.5 - - "GET /about HTTP/1.1" 200"#,
            r#"198.51.100.9 - - "POST /login HTTP/1.1" 200"#,
        ]);

        let tally = count_requests_per_ip(&input, &patterns);
        assert_eq!(tally.len(), 2);
        assert_eq!(tally[0].ip, "203.0.113.5");
        assert_eq!(tally[0].count, 2);
        assert_eq!(tally[1].ip, "198.51.100.9");
        assert_eq!(tally[1].count, 1);
    }

    #[test]
    fn test_first_address_wins_when_line_has_several() {
        let patterns = LogPatterns::new();
        let input = lines(&["192.0.2.1 via 10.0.0.1 request"]);

        let tally = count_requests_per_ip(&input, &patterns);
        assert_eq!(tally.len(), 1);
        assert_eq!(tally[0].ip, "192.0.2.1");
    }

    #[test]
    fn test_lines_without_address_are_skipped() {
        let patterns = LogPatterns::new();
        let input = lines(&["no address here", "also none 1.2.3"]);
        assert!(count_requests_per_ip(&input, &patterns).is_empty());
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let patterns = LogPatterns::new();
        let input = lines(&[
            "10.0.0.2 a",
            "10.0.0.1 b",
            "10.0.0.3 c",
            "10.0.0.3 d",
        ]);

        let tally = count_requests_per_ip(&input, &patterns);
        let ips: Vec<&str> = tally.iter().map(|t| t.ip.as_str()).collect();
        assert_eq!(ips, vec!["10.0.0.3", "10.0.0.2", "10.0.0.1"]);
    }

    #[test]
    fn test_sum_of_counts_equals_matching_lines() {
        let patterns = LogPatterns::new();
        let input = lines(&[
            "10.0.0.1 a",
            "no match",
            "10.0.0.1 b",
            "10.0.0.2 c",
            "still no match",
        ]);

        let tally = count_requests_per_ip(&input, &patterns);
        let total: usize = tally.iter().map(|t| t.count).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_out_of_range_octets_still_count() {
        let patterns = LogPatterns::new();
        let input = lines(&["999.999.999.999 malformed but counted"]);

        let tally = count_requests_per_ip(&input, &patterns);
        assert_eq!(tally[0].ip, "999.999.999.999");
    }
}
