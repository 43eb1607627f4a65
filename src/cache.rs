//! Request cache keyed by batch size.

use std::sync::Arc;

use ahash::AHashMap;

use crate::core::Record;

/// A raw, unsorted batch as obtained from a data source.
pub type Batch = Arc<[Arc<Record>]>;

/// Maps a requested batch size to the batch fetched for it.
///
/// Entries are write-once and live as long as the cache: there is no eviction and no
/// invalidation, so a size is fetched from the source at most once.
#[derive(Debug, Default)]
pub struct RequestCache {
    entries: AHashMap<usize, Batch>,
}

impl RequestCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, size: usize) -> Option<Batch> {
        self.entries.get(&size).cloned()
    }

    /// Stores `batch` under `size` unless an entry already exists.
    ///
    /// Returns the batch that is cached for `size` afterwards.
    pub fn put(&mut self, size: usize, batch: Batch) -> Batch {
        self.entries.entry(size).or_insert(batch).clone()
    }

    pub fn contains(&self, size: usize) -> bool {
        self.entries.contains_key(&size)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
