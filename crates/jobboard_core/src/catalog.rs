use std::collections::HashSet;

use crate::{JobKey, JobListing};

/// In-memory listing for the current fetch.
///
/// `replace` drops the previous set unconditionally; there is no merging
/// across fetches and no persistence. Duplicate keys within a single batch
/// keep the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogStore {
    entries: Vec<JobListing>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the catalog with a freshly fetched batch, deduplicated by
    /// identity key (first occurrence wins).
    pub fn replace(&mut self, entries: Vec<JobListing>) {
        let mut seen: HashSet<JobKey> = HashSet::with_capacity(entries.len());
        self.entries = entries
            .into_iter()
            .filter(|listing| seen.insert(listing.key.clone()))
            .collect();
    }

    /// Current entries in fetch order.
    pub fn current(&self) -> &[JobListing] {
        &self.entries
    }

    pub fn get(&self, key: &JobKey) -> Option<&JobListing> {
        self.entries.iter().find(|listing| &listing.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
