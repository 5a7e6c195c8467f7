//! Image fetcher: GET one URL, validate it as an image, dedup and save.
//!
//! Failures are returned as [`FetchError`] values so the session can report
//! them and move on to the next URL.

mod error;
mod http;

pub use error::{classify_curl_error, FetchError, TransportKind};
pub use http::{HttpOptions, HttpResponse};

use crate::checksum;
use crate::config::FetcherConfig;
use crate::dedup::SeenHashes;
use crate::url_model;
use std::fs;
use std::path::{Path, PathBuf};

/// What happened to a URL that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Bytes were new this run and written to `path`.
    Saved { filename: String, path: PathBuf },
    /// Same bytes were already saved earlier in the run; nothing written.
    Duplicate { filename: String },
}

impl FetchOutcome {
    /// The saved path, if this fetch wrote a file.
    pub fn saved_path(&self) -> Option<&Path> {
        match self {
            FetchOutcome::Saved { path, .. } => Some(path),
            FetchOutcome::Duplicate { .. } => None,
        }
    }
}

/// True if the declared content type marks an image (`image/...`).
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type.starts_with("image/")
}

#[derive(Debug, Clone)]
pub struct ImageFetcher {
    http: HttpOptions,
}

impl ImageFetcher {
    pub fn new(cfg: &FetcherConfig) -> Self {
        Self {
            http: HttpOptions::from(cfg),
        }
    }

    /// Fetches `url` and, if it is a new image, saves it under `output_dir`.
    ///
    /// `seen` is the run's hash index; it is only updated when a file was
    /// written.
    pub fn fetch(
        &self,
        url: &str,
        output_dir: &Path,
        seen: &mut SeenHashes,
    ) -> Result<FetchOutcome, FetchError> {
        let response = http::get(url, &self.http).map_err(|e| {
            match classify_curl_error(&e) {
                TransportKind::Timeout => {
                    tracing::warn!("GET {} timed out after {:?}", url, self.http.timeout)
                }
                kind => tracing::warn!("GET {} failed ({:?}): {}", url, kind, e),
            }
            FetchError::Network(e)
        })?;

        tracing::debug!(
            "GET {} -> HTTP {} content-type={:?} bytes={}",
            url,
            response.status,
            response.content_type,
            response.body.len()
        );

        if !response.is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                code: response.status,
            });
        }

        let content_type = response.content_type.unwrap_or_default();
        if !is_image_content_type(&content_type) {
            return Err(FetchError::NotImage {
                url: url.to_string(),
                content_type,
            });
        }

        store_image(url, &response.body, output_dir, seen)
    }
}

/// Dedup-and-save step for a body already validated as an image.
///
/// Names the file after `url`, skips it if `seen` already holds the body's
/// hash, otherwise writes (create or truncate) and records the hash.
pub fn store_image(
    url: &str,
    body: &[u8],
    output_dir: &Path,
    seen: &mut SeenHashes,
) -> Result<FetchOutcome, FetchError> {
    let filename = url_model::derive_filename(url);
    let hash = checksum::md5_hex(body);

    if seen.contains(&hash) {
        tracing::info!("duplicate content {} for {}, not saving {}", hash, url, filename);
        return Ok(FetchOutcome::Duplicate { filename });
    }

    let path = output_dir.join(&filename);
    fs::write(&path, body).map_err(|source| FetchError::Write {
        path: path.clone(),
        source,
    })?;
    seen.insert(hash);

    tracing::info!("saved {} ({} bytes) from {}", path.display(), body.len(), url);
    Ok(FetchOutcome::Saved { filename, path })
}
