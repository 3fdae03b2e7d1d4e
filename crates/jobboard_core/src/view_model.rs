use std::collections::BTreeMap;

use crate::{ApplicationField, JobKey};

/// One visible catalog row: listing fields plus the computed saved flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub key: JobKey,
    pub title: String,
    pub company: String,
    pub salary: String,
    pub location: String,
    pub description: String,
    pub is_saved: bool,
}

/// Status of the most recent application submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Accepted,
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Catalog rows after reconciliation and query filtering, fetch order.
    pub rows: Vec<JobRowView>,
    /// Saved entries in key order, available even without a live catalog.
    pub saved: Vec<JobRowView>,
    pub job_count: usize,
    pub saved_count: usize,
    pub query: String,
    pub loading: bool,
    pub last_fetch_error: Option<String>,
    pub last_store_error: Option<String>,
    pub form_errors: BTreeMap<ApplicationField, String>,
    pub submission: SubmissionStatus,
    pub dirty: bool,
}
