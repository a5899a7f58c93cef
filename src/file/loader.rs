//! JSON document loading.
//!
//! This module provides functions to load JSON documents from files or
//! stdin into `serde_json::Value` structures, ready for rendering and path
//! selection. Gzipped input is detected by extension on files and by the
//! gzip magic bytes on stdin.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Loads and parses a JSON file from the filesystem.
///
/// Files ending in `.gz` are transparently decompressed before parsing.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents are not
/// valid JSON.
///
/// # Examples
///
/// ```no_run
/// use parsequill::file::loader::load_json_file;
///
/// let value = load_json_file("events.json").unwrap();
/// ```
pub fn load_json_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref).context("Failed to read file")?
    };

    serde_json::from_str(&content).context("Failed to parse JSON")
}

/// Loads and parses JSON from standard input.
///
/// Reads stdin to EOF; gzip-compressed input is detected by its magic
/// bytes and decompressed. This is useful for piping data in:
///
/// ```no_run
/// use parsequill::file::loader::load_json_from_stdin;
///
/// // Usage: echo '{"key": "value"}' | parsequill tree
/// let value = load_json_from_stdin().unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if reading stdin fails or the contents are not valid
/// JSON.
pub fn load_json_from_stdin() -> Result<Value> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    // Check for gzip magic bytes (0x1f 0x8b)
    let content = if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in stdin")?
    };

    serde_json::from_str(&content).context("Failed to parse JSON from stdin")
}

/// Reads and decompresses a gzipped file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, is not valid gzip, or
/// the decompressed content is not valid UTF-8.
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped stdin")?;
    Ok(content)
}
