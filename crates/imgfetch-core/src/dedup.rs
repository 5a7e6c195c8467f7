//! In-run index of content hashes already saved.

use std::collections::HashSet;

/// Content hashes of every image written during the current run.
///
/// Owned by the session and passed by `&mut` into each fetch; dropped with
/// the process. A hash is only recorded after its bytes reached disk.
#[derive(Debug, Default)]
pub struct SeenHashes {
    hashes: HashSet<String>,
}

impl SeenHashes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, hash: &str) -> bool {
        self.hashes.contains(hash)
    }

    /// Records `hash`. Returns false if it was already present.
    pub fn insert(&mut self, hash: String) -> bool {
        self.hashes.insert(hash)
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}
