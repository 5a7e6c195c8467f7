//! Session driver: one interactive run from prompt to closing message.
//!
//! Owns the output directory and the seen-hash index for the lifetime of the
//! run and feeds every URL through the fetcher in input order.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::FetcherConfig;
use crate::dedup::SeenHashes;
use crate::fetcher::{FetchError, FetchOutcome, ImageFetcher};
use crate::report;

pub const BANNER: &str = "Welcome to the Ubuntu Image Fetcher";
pub const TAGLINE: &str = "A tool for mindfully collecting images from the web";
pub const PROMPT: &str = "Please enter image URLs (comma-separated): ";
pub const CLOSING_MESSAGE: &str = "Connection strengthened. Community enriched.";

/// Splits a comma-separated line into trimmed, non-empty URLs, in order.
pub fn parse_url_list(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads one line (up to `\n` or end of input). Invalid UTF-8 is replaced
/// with U+FFFD rather than failing the run.
pub fn read_url_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut raw = Vec::new();
    input.read_until(b'\n', &mut raw)?;
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

/// Per-run totals.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Paths written this run, in fetch order.
    pub saved: Vec<PathBuf>,
    pub duplicates: usize,
    pub failures: usize,
}

impl RunSummary {
    fn record(&mut self, result: &Result<FetchOutcome, FetchError>) {
        match result {
            Ok(FetchOutcome::Saved { path, .. }) => self.saved.push(path.clone()),
            Ok(FetchOutcome::Duplicate { .. }) => self.duplicates += 1,
            Err(_) => self.failures += 1,
        }
    }

    /// Number of URLs that were fetched (or attempted).
    pub fn attempted(&self) -> usize {
        self.saved.len() + self.duplicates + self.failures
    }
}

pub struct Session {
    output_dir: PathBuf,
    seen: SeenHashes,
    fetcher: ImageFetcher,
}

impl Session {
    /// Starts a run: creates the output directory (if absent) and an empty
    /// hash index.
    pub fn open(cfg: &FetcherConfig) -> Result<Self> {
        fs::create_dir_all(&cfg.output_dir).with_context(|| {
            format!("failed to create output dir: {}", cfg.output_dir.display())
        })?;
        tracing::debug!("output dir ready: {}", cfg.output_dir.display());
        Ok(Self {
            output_dir: cfg.output_dir.clone(),
            seen: SeenHashes::new(),
            fetcher: ImageFetcher::new(cfg),
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Fetches a single URL against this run's output dir and hash index.
    pub fn fetch(&mut self, url: &str) -> Result<FetchOutcome, FetchError> {
        self.fetcher.fetch(url, &self.output_dir, &mut self.seen)
    }

    /// Fetches every URL in order, writing status lines to `out`.
    ///
    /// A failed URL never stops the loop; only an error writing to `out` does.
    pub fn run<W: Write>(&mut self, urls: &[String], out: &mut W) -> io::Result<RunSummary> {
        let mut summary = RunSummary::default();
        for url in urls {
            let result = self.fetch(url);
            if let Err(e) = &result {
                tracing::info!("skipped {}: {}", url, e);
            }
            report::write_outcome(out, url, &result)?;
            summary.record(&result);
        }
        Ok(summary)
    }
}

/// Runs the whole interactive flow: banner, prompt, one line of URLs, fetch
/// loop, closing message.
///
/// End of input counts as an empty line; invalid UTF-8 is replaced, not fatal.
pub fn run_interactive<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    cfg: &FetcherConfig,
) -> Result<RunSummary> {
    writeln!(out, "{}", BANNER)?;
    writeln!(out, "{}\n", TAGLINE)?;
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    let line = read_url_line(&mut input).context("failed to read URL list")?;
    let urls = parse_url_list(&line);
    tracing::info!("received {} url(s)", urls.len());

    let mut session = Session::open(cfg)?;
    let summary = session.run(&urls, out)?;

    writeln!(out, "\n{}", CLOSING_MESSAGE)?;
    out.flush()?;

    tracing::info!(
        "run finished: {} saved, {} duplicate(s), {} failed",
        summary.saved.len(),
        summary.duplicates,
        summary.failures
    );
    Ok(summary)
}
