//! User-facing per-URL status lines.
//!
//! `✓` marks a saved image, `✗` marks anything that was skipped.

use crate::fetcher::{FetchError, FetchOutcome};
use std::io::{self, Write};

/// Writes the status line(s) for one URL.
pub fn write_outcome<W: Write>(
    out: &mut W,
    url: &str,
    result: &Result<FetchOutcome, FetchError>,
) -> io::Result<()> {
    match result {
        Ok(FetchOutcome::Saved { filename, path }) => {
            writeln!(out, "✓ Successfully fetched: {}", filename)?;
            writeln!(out, "✓ Image saved to {}", path.display())
        }
        Ok(FetchOutcome::Duplicate { filename }) => {
            writeln!(out, "✗ Duplicate skipped: {}", filename)
        }
        Err(FetchError::NotImage { .. }) => writeln!(out, "✗ Skipped (not an image): {}", url),
        Err(e @ FetchError::Network(_)) => writeln!(out, "✗ Connection error: {}", e),
        Err(e @ FetchError::HttpStatus { .. }) => writeln!(out, "✗ HTTP error: {}", e),
        Err(e @ FetchError::Write { .. }) => writeln!(out, "✗ An error occurred: {}", e),
    }
}
