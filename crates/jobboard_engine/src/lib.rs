//! Jobboard engine: listing transport, durable storage and effect execution.
mod engine;
mod fetch;
mod saved;
mod store;
mod types;

pub use engine::{EngineConfig, EngineHandle};
pub use fetch::{FetchSettings, HttpListingFetcher, ListingFetcher};
pub use saved::SavedSetStore;
pub use store::{ensure_store_dir, DurableStore, FileStore};
pub use types::{EngineEvent, FailureKind, FetchError, RawListing, StoreError};
