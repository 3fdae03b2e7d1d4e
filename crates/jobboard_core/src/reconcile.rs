use std::collections::BTreeMap;

use crate::view_model::JobRowView;
use crate::{JobKey, JobListing, SavedEntry};

/// Merges the current catalog with the saved set into view rows.
///
/// Pure single pass in catalog (fetch) order; `is_saved` is true exactly
/// when the listing's key is present in `saved` at this moment. The flag is
/// derived here and nowhere else.
pub fn reconcile(
    catalog: &[JobListing],
    saved: &BTreeMap<JobKey, SavedEntry>,
) -> Vec<JobRowView> {
    catalog
        .iter()
        .map(|listing| JobRowView {
            key: listing.key.clone(),
            title: listing.title.clone(),
            company: listing.company.clone(),
            salary: listing.salary.clone(),
            location: listing.location.clone(),
            description: listing.description.clone(),
            is_saved: saved.contains_key(&listing.key),
        })
        .collect()
}
