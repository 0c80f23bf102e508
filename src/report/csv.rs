//! CSV report writing.
//!
//! The report is a single CSV file with three sections in fixed order,
//! separated by blank lines:
//!
//! 1. `IP Address,Request Count` and the per-IP request tally
//! 2. `Most Accessed Endpoint,Access Count` and exactly one row
//! 3. `IP Address,Failed Login Attempts` and the suspicious set
//!
//! Section headers are written even when there is no data beneath them,
//! so the file shape is stable across inputs. A write failure is fatal
//! to the run; no partial file is cleaned up.

use crate::analysis::endpoints::TopEndpoint;
use crate::analysis::IpCount;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the three-section CSV report to `path`.
///
/// Each section gets its own `csv::Writer` over the shared file handle;
/// the blank separator lines go straight to the file, since a CSV
/// writer would render a zero-field record as `""` rather than an
/// empty line.
pub fn write_report(
    path: impl AsRef<Path>,
    requests: &[IpCount],
    top: &TopEndpoint,
    suspicious: &[IpCount],
) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create output directory: {}", parent.display()))?;
        }
    }

    let mut file = File::create(path)
        .with_context(|| format!("failed to create report file: {}", path.display()))?;

    {
        let mut writer = csv::Writer::from_writer(&mut file);
        writer.write_record(["IP Address", "Request Count"])?;
        for entry in requests {
            writer.write_record([entry.ip.as_str(), &entry.count.to_string()])?;
        }
        writer.flush()?;
    }

    file.write_all(b"\n")
        .with_context(|| format!("failed to write report file: {}", path.display()))?;

    {
        let mut writer = csv::Writer::from_writer(&mut file);
        writer.write_record(["Most Accessed Endpoint", "Access Count"])?;
        writer.write_record([top.path.as_deref().unwrap_or(""), &top.count.to_string()])?;
        writer.flush()?;
    }

    file.write_all(b"\n")
        .with_context(|| format!("failed to write report file: {}", path.display()))?;

    {
        let mut writer = csv::Writer::from_writer(&mut file);
        writer.write_record(["IP Address", "Failed Login Attempts"])?;
        for entry in suspicious {
            writer.write_record([entry.ip.as_str(), &entry.count.to_string()])?;
        }
        writer.flush()?;
    }

    file.flush()
        .with_context(|| format!("failed to write report file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ip(ip: &str, count: usize) -> IpCount {
        IpCount {
            ip: ip.to_string(),
            count,
        }
    }

    #[test]
    fn test_three_sections_with_data() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.csv");

        let requests = vec![ip("198.51.100.9", 4), ip("203.0.113.5", 2)];
        let top = TopEndpoint {
            path: Some("/login".to_string()),
            count: 4,
        };
        let suspicious = vec![ip("198.51.100.9", 4)];

        write_report(&path, &requests, &top, &suspicious).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let expected = "IP Address,Request Count\n\
                        198.51.100.9,4\n\
                        203.0.113.5,2\n\
                        \n\
                        Most Accessed Endpoint,Access Count\n\
                        /login,4\n\
                        \n\
                        IP Address,Failed Login Attempts\n\
                        198.51.100.9,4\n";
        assert_eq!(contents, expected);
    }

    #[test]
    fn test_headers_written_even_when_sections_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.csv");

        write_report(&path, &[], &TopEndpoint::none(), &[]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let expected = "IP Address,Request Count\n\
                        \n\
                        Most Accessed Endpoint,Access Count\n\
                        ,0\n\
                        \n\
                        IP Address,Failed Login Attempts\n";
        assert_eq!(contents, expected);
    }

    #[test]
    fn test_separator_rows_are_truly_blank() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.csv");

        let requests = vec![ip("10.0.0.1", 1)];
        let top = TopEndpoint {
            path: Some("/a".to_string()),
            count: 1,
        };

        write_report(&path, &requests, &top, &[]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        // A zero-field record would serialize as a quoted empty field;
        // the separators must be empty lines instead.
        assert!(!contents.contains("\"\""));
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[2], "");
        assert_eq!(lines[5], "");
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        // The target is a directory, so File::create fails.
        let result = write_report(dir.path(), &[], &TopEndpoint::none(), &[]);
        assert!(result.is_err());
    }
}
