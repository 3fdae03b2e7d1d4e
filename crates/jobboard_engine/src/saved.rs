use std::collections::BTreeMap;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use board_logging::board_warn;
use jobboard_core::{JobKey, SavedEntry};

use crate::store::DurableStore;
use crate::StoreError;

/// The single storage key for the whole saved-set blob.
const SAVED_SET_KEY: &str = "saved_jobs.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedEntry {
    title: String,
    company: String,
    salary: String,
    location: String,
    description: String,
}

/// The durable saved-jobs subset.
///
/// Every mutation serializes the whole next map and writes it as one
/// replacement blob; the in-memory map is committed only after the write
/// succeeds. A storage failure therefore leaves memory at its
/// pre-mutation value, and in-memory and durable state never diverge.
pub struct SavedSetStore<S> {
    store: S,
    entries: BTreeMap<JobKey, SavedEntry>,
}

impl<S: DurableStore> SavedSetStore<S> {
    /// Loads the persisted saved set. An absent blob is an empty set; a
    /// corrupt or unreadable blob is logged and treated as empty, never
    /// surfaced as an error.
    pub fn load(store: S) -> Self {
        let entries = match store.read(SAVED_SET_KEY) {
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<PersistedEntry>>(&bytes) {
                Ok(persisted) => persisted
                    .into_iter()
                    .map(restore_entry)
                    .map(|entry| (entry.key.clone(), entry))
                    .collect(),
                Err(err) => {
                    board_warn!("Corrupt saved-set blob, starting empty: {}", err);
                    BTreeMap::new()
                }
            },
            Ok(None) => BTreeMap::new(),
            Err(err) => {
                board_warn!("Failed to read saved set, starting empty: {}", err);
                BTreeMap::new()
            }
        };
        Self { store, entries }
    }

    /// Idempotent insert-or-refresh. Storage is rewritten only when the
    /// snapshot actually changes.
    pub fn add(&mut self, entry: SavedEntry) -> Result<(), StoreError> {
        if self.entries.get(&entry.key) == Some(&entry) {
            return Ok(());
        }
        let mut next = self.entries.clone();
        next.insert(entry.key.clone(), entry);
        self.commit(next)
    }

    /// Idempotent removal; an absent key succeeds without a write.
    pub fn remove(&mut self, key: &JobKey) -> Result<(), StoreError> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut next = self.entries.clone();
        next.remove(key);
        self.commit(next)
    }

    /// Entries in key order.
    pub fn list(&self) -> Vec<SavedEntry> {
        self.entries.values().cloned().collect()
    }

    pub fn contains(&self, key: &JobKey) -> bool {
        self.entries.contains_key(key)
    }

    fn commit(&mut self, next: BTreeMap<JobKey, SavedEntry>) -> Result<(), StoreError> {
        let persisted: Vec<PersistedEntry> = next.values().map(persist_entry).collect();
        let blob = serde_json::to_vec_pretty(&persisted)
            .map_err(|err| StoreError::Serialization(err.to_string()))?;
        self.store.write(SAVED_SET_KEY, Bytes::from(blob))?;
        self.entries = next;
        Ok(())
    }
}

fn persist_entry(entry: &SavedEntry) -> PersistedEntry {
    PersistedEntry {
        title: entry.title.clone(),
        company: entry.company.clone(),
        salary: entry.salary.clone(),
        location: entry.location.clone(),
        description: entry.description.clone(),
    }
}

/// Keys are recomputed from the snapshot fields on load so identity
/// normalization has a single source of truth.
fn restore_entry(persisted: PersistedEntry) -> SavedEntry {
    SavedEntry {
        key: JobKey::resolve(&persisted.title, &persisted.company),
        title: persisted.title,
        company: persisted.company,
        salary: persisted.salary,
        location: persisted.location,
        description: persisted.description,
    }
}
