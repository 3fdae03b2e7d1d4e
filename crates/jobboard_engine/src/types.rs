use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use jobboard_core::{JobListing, SavedEntry};

/// Wire shape of one listing entry.
///
/// The remote source omits fields at will; every field defaults to an
/// empty string rather than failing the batch. Whatever identifier the
/// source attaches is ignored entirely: it changes on every fetch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawListing {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
}

impl RawListing {
    /// Resolves the content identity and produces a catalog listing.
    pub fn into_listing(self) -> JobListing {
        JobListing::new(
            self.title,
            self.company,
            self.salary,
            self.location,
            self.description,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    /// Body was not the expected JSON array of listing entries.
    InvalidResponse,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::InvalidResponse => write!(f, "invalid response shape"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Errors from the durable saved-set storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("io failure: {0}")]
    Io(String),
    #[error("serialization failure: {0}")]
    Serialization(String),
}

/// Events emitted by the engine loop back to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ListingsFetched {
        generation: u64,
        result: Result<Vec<JobListing>, FetchError>,
    },
    /// Authoritative saved-set contents after a successful load or mutation.
    SavedSetChanged { entries: Vec<SavedEntry> },
    /// A mutation failed to persist; the in-memory set was rolled back.
    SavedMutationFailed { error: StoreError },
    ApplicationSubmitted { result: Result<(), FetchError> },
}
