//! Pipeline configuration.
//!
//! All knobs live in [`AnalysisConfig`], which is built by the CLI and
//! passed into the pipeline entry point. The defaults match a bare
//! invocation with no arguments.

use std::path::PathBuf;

/// Default input log file.
pub const DEFAULT_LOG_FILE: &str = "sample.log";

/// Default output CSV file.
pub const DEFAULT_OUTPUT_CSV: &str = "log_analysis_results.csv";

/// Default failed-login threshold. Addresses must exceed this count
/// strictly to be flagged as suspicious.
pub const DEFAULT_FAILED_LOGIN_THRESHOLD: usize = 3;

/// Configuration for a single analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Path to the access log (plain text, `.gz`, or `.zst`).
    pub log_file: PathBuf,
    /// Path the CSV report is written to.
    pub output_csv: PathBuf,
    /// Failed-login count above which an address is flagged.
    pub failed_login_threshold: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            output_csv: PathBuf::from(DEFAULT_OUTPUT_CSV),
            failed_login_threshold: DEFAULT_FAILED_LOGIN_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.log_file, PathBuf::from("sample.log"));
        assert_eq!(config.output_csv, PathBuf::from("log_analysis_results.csv"));
        assert_eq!(config.failed_login_threshold, 3);
    }
}
