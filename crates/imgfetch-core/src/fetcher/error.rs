//! Per-URL fetch failures and transport error classification.

use std::io;
use std::path::PathBuf;

/// Why a single URL produced no saved image. Never fatal to the run.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, DNS, refused connection, etc.).
    #[error("{0}")]
    Network(#[from] curl::Error),
    /// Final response had a non-2xx status.
    #[error("HTTP {code} for url: {url}")]
    HttpStatus { url: String, code: u32 },
    /// Declared `Content-Type` does not start with `image/`.
    #[error("content type {content_type:?} is not an image: {url}")]
    NotImage { url: String, content_type: String },
    /// Saving the body failed (permission denied, disk full, missing dir).
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Coarse kind of a transport failure, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Timeout,
    Connection,
    Other,
}

/// Classify a curl error.
pub fn classify_curl_error(e: &curl::Error) -> TransportKind {
    if e.is_operation_timedout() {
        return TransportKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return TransportKind::Connection;
    }
    TransportKind::Other
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Network(e) if classify_curl_error(e) == TransportKind::Timeout)
    }
}
