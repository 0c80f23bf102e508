//! Log line source.
//!
//! Loads the entire log into memory as an ordered sequence of lines.
//! The analyzers each make their own pass over the sequence, so memory
//! use is proportional to the log size. That is an explicit
//! simplicity-over-scalability choice for the file sizes this tool
//! targets.
//!
//! A missing file and an unreadable file surface as distinct
//! [`SourceError`] variants, so callers can never confuse "the log had
//! zero lines" with "the log could not be opened".

use crate::utils::progress::ProgressBar;
use crate::utils::reader::open_file;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to produce the line sequence.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("log file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read log file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads the full log file into an ordered vector of lines.
///
/// Trailing newlines are stripped. Supports plain text, `.gz`, and
/// `.zst` files. An empty file yields `Ok` with an empty vector, which
/// downstream treats as "nothing to process".
pub fn read_log_lines(path: impl AsRef<Path>) -> Result<Vec<String>, SourceError> {
    let path = path.as_ref();

    let file = open_file(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SourceError::NotFound {
            path: path.to_path_buf(),
        },
        _ => SourceError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    // Byte-based progress when the on-disk size is known. For compressed
    // files the decompressed byte count can overshoot, so cap at size.
    let file_size = std::fs::metadata(path).ok().map(|m| m.len() as usize);
    let progress = match file_size {
        Some(size) => ProgressBar::new(size, "Reading"),
        None => ProgressBar::new_spinner("Reading"),
    };

    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    let mut bytes_read = 0;

    for line in reader.lines() {
        let line = line.map_err(|e| SourceError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        bytes_read += line.len() + 1;

        if lines.len() % 10_000 == 0 {
            match file_size {
                Some(size) => progress.update(bytes_read.min(size)),
                None => progress.update(lines.len()),
            }
        }

        lines.push(line);
    }

    if let Some(size) = file_size {
        progress.update(size);
    }
    progress.finish();

    Ok(lines)
}
