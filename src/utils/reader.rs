//! File opening with automatic decompression.
//!
//! Access logs are often rotated into `.gz` or `.zst` archives; this
//! module lets the analyzer read them directly without manual
//! extraction. Detection is by file extension only.

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Opens a file, transparently decompressing `.gz` and `.zst` by
/// extension. Anything else is read as plain text.
pub fn open_file(path: impl AsRef<Path>) -> io::Result<Box<dyn Read + Send>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    match path.extension().and_then(|e| e.to_str()).unwrap_or("") {
        "gz" => Ok(Box::new(GzDecoder::new(file))),
        "zst" => Ok(Box::new(zstd::Decoder::new(file)?)),
        _ => Ok(Box::new(file)),
    }
}
