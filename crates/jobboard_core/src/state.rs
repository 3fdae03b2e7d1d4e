use std::collections::BTreeMap;

use crate::catalog::CatalogStore;
use crate::filter::filter_rows;
use crate::reconcile::reconcile;
use crate::view_model::{AppViewModel, JobRowView, SubmissionStatus};
use crate::{ApplicationField, JobKey, JobListing, SavedEntry};

/// The whole application state.
///
/// The saved map only ever changes through `replace_saved`, fed by the
/// engine's confirmation after a durable write succeeded. Nothing in here
/// mutates it optimistically, so in-memory and persisted saved state cannot
/// drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    catalog: CatalogStore,
    saved: BTreeMap<JobKey, SavedEntry>,
    query: String,
    fetch_generation: u64,
    fetch_in_flight: bool,
    last_fetch_error: Option<String>,
    last_store_error: Option<String>,
    form_errors: BTreeMap<ApplicationField, String>,
    submission: SubmissionStatus,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the full view model. Saved flags and the filtered row set
    /// are recomputed on every call, never cached or stored.
    pub fn view(&self) -> AppViewModel {
        let rows = reconcile(self.catalog.current(), &self.saved);
        let rows = filter_rows(&rows, &self.query);
        let saved = self.saved.values().map(saved_row).collect();
        AppViewModel {
            rows,
            saved,
            job_count: self.catalog.len(),
            saved_count: self.saved.len(),
            query: self.query.clone(),
            loading: self.fetch_in_flight,
            last_fetch_error: self.last_fetch_error.clone(),
            last_store_error: self.last_store_error.clone(),
            form_errors: self.form_errors.clone(),
            submission: self.submission.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Starts a new fetch and returns its generation tag. Any fetch still
    /// in flight is superseded: its completion will no longer match.
    pub(crate) fn begin_fetch(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.fetch_in_flight = true;
        self.fetch_generation
    }

    pub(crate) fn is_current_fetch(&self, generation: u64) -> bool {
        generation == self.fetch_generation
    }

    pub(crate) fn apply_listings(&mut self, listings: Vec<JobListing>) {
        self.catalog.replace(listings);
        self.fetch_in_flight = false;
        self.last_fetch_error = None;
    }

    pub(crate) fn apply_fetch_failure(&mut self, message: String) {
        self.fetch_in_flight = false;
        self.last_fetch_error = Some(message);
    }

    pub(crate) fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub(crate) fn catalog_entry(&self, key: &JobKey) -> Option<&JobListing> {
        self.catalog.get(key)
    }

    pub(crate) fn saved_entry(&self, key: &JobKey) -> Option<&SavedEntry> {
        self.saved.get(key)
    }

    /// Wholesale replacement of the saved set with authoritative contents.
    pub(crate) fn replace_saved(&mut self, entries: Vec<SavedEntry>) {
        self.saved = entries
            .into_iter()
            .map(|entry| (entry.key.clone(), entry))
            .collect();
        self.last_store_error = None;
    }

    pub(crate) fn apply_store_failure(&mut self, message: String) {
        self.last_store_error = Some(message);
    }

    pub(crate) fn set_form_errors(&mut self, errors: BTreeMap<ApplicationField, String>) {
        self.form_errors = errors;
    }

    pub(crate) fn set_submission(&mut self, status: SubmissionStatus) {
        self.submission = status;
    }
}

fn saved_row(entry: &SavedEntry) -> JobRowView {
    JobRowView {
        key: entry.key.clone(),
        title: entry.title.clone(),
        company: entry.company.clone(),
        salary: entry.salary.clone(),
        location: entry.location.clone(),
        description: entry.description.clone(),
        is_saved: true,
    }
}
