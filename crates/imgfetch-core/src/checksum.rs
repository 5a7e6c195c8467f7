//! MD5 content hashing for in-run duplicate detection and synthesized names.
//!
//! Not an integrity check: collisions only cost a skipped image.

/// MD5 of `data` as 32 lowercase hex characters.
pub fn md5_hex(data: &[u8]) -> String {
    format!("{:x}", md5::compute(data))
}
