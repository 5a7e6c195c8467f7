//! URL modeling and filename derivation.
//!
//! Derives the local filename for a fetched image from the final segment of
//! the URL path, or synthesizes one from a hash of the URL itself.

mod path;

pub use path::{last_path_segment, url_path};

use crate::checksum;

/// Number of hex digits of the URL hash used in synthesized names.
const SYNTHETIC_HASH_LEN: usize = 8;

/// Derives the filename for saving the image fetched from `url`.
///
/// Uses the last path segment when it carries an extension (contains a `.`).
/// Otherwise returns `downloaded_<first 8 hex of md5(url)>.jpg`. Never empty,
/// and the same URL always yields the same name.
///
/// # Examples
///
/// - `derive_filename("https://example.com/img/cat.png")` → `"cat.png"`
/// - `derive_filename("https://example.com/")` → `"downloaded_<hash>.jpg"`
pub fn derive_filename(url: &str) -> String {
    let segment = last_path_segment(url);
    if has_extension(segment) {
        segment.to_string()
    } else {
        synthetic_filename(url)
    }
}

fn has_extension(segment: &str) -> bool {
    !segment.is_empty() && segment != "." && segment != ".." && segment.contains('.')
}

/// `downloaded_<8 hex>.jpg` for URLs whose path gives no usable name.
pub fn synthetic_filename(url: &str) -> String {
    let digest = checksum::md5_hex(url.as_bytes());
    format!("downloaded_{}.jpg", &digest[..SYNTHETIC_HASH_LEN])
}
