//! Blocking HTTP GET into memory.
//!
//! One libcurl easy handle per request. Redirects are followed and the status
//! and `Content-Type` reported are those of the final response.

use crate::config::FetcherConfig;
use std::time::Duration;

/// Request settings shared by every GET in a run.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub user_agent: String,
    /// Whole-request timeout (connect + transfer).
    pub timeout: Duration,
    pub max_redirects: u32,
}

impl From<&FetcherConfig> for HttpOptions {
    fn from(cfg: &FetcherConfig) -> Self {
        Self {
            user_agent: cfg.user_agent.clone(),
            timeout: cfg.timeout(),
            max_redirects: cfg.max_redirects,
        }
    }
}

/// Final response of a GET: status, declared content type, full body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a GET on `url` and buffers the whole body.
///
/// Only transport-level failures are errors; any HTTP status is returned as-is.
/// Runs in the current thread.
pub fn get(url: &str, opts: &HttpOptions) -> Result<HttpResponse, curl::Error> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.useragent(&opts.user_agent)?;
    easy.follow_location(true)?;
    easy.max_redirections(opts.max_redirects)?;
    easy.timeout(opts.timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    let content_type = easy.content_type()?.map(str::to_string);

    Ok(HttpResponse {
        status,
        content_type,
        body,
    })
}
