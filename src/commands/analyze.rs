//! The analysis pipeline command.
//!
//! Loads the full log into memory, runs the three analyzers over the
//! shared line sequence, writes the CSV report, and prints the console
//! report.
//!
//! # Usage
//!
//! ```bash
//! # Defaults: sample.log in, log_analysis_results.csv out, threshold 3
//! access-audit
//!
//! # Custom input and threshold
//! access-audit --log-file access.log.gz --threshold 5
//! ```
//!
//! An empty log is not an error: the command prints a "no data" message
//! and exits successfully without writing a report file. A missing or
//! unreadable log, or an unwritable report path, aborts the run.

use crate::accesslog::patterns::LogPatterns;
use crate::accesslog::source;
use crate::analysis::{endpoints, requests, suspicious};
use crate::config::AnalysisConfig;
use crate::report;
use crate::utils::format::format_number;
use anyhow::Result;

pub fn run(config: &AnalysisConfig) -> Result<()> {
    let lines = source::read_log_lines(&config.log_file)?;

    if lines.is_empty() {
        println!("No log data to process. Exiting.");
        return Ok(());
    }

    let patterns = LogPatterns::new();

    let ip_requests = requests::count_requests_per_ip(&lines, &patterns);
    let top_endpoint = endpoints::most_frequent_endpoint(&lines, &patterns);
    let suspicious_ips = suspicious::detect_suspicious_activity(
        &lines,
        &patterns,
        config.failed_login_threshold,
    );

    report::csv::write_report(
        &config.output_csv,
        &ip_requests,
        &top_endpoint,
        &suspicious_ips,
    )?;

    print!(
        "{}",
        report::console::render(&ip_requests, &top_endpoint, &suspicious_ips)
    );

    eprintln!(
        "\nProcessed {} lines, {} unique addresses. Report written to: {}",
        format_number(lines.len()),
        format_number(ip_requests.len()),
        config.output_csv.display()
    );

    Ok(())
}
