use crate::JobKey;

/// A listing entry from the most recent fetch.
///
/// The whole set is replaced by the next fetch; nothing here survives a
/// refresh except through the saved set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListing {
    pub key: JobKey,
    pub title: String,
    pub company: String,
    pub salary: String,
    pub location: String,
    pub description: String,
}

impl JobListing {
    /// Builds a listing and resolves its identity key from the raw fields.
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        salary: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let company = company.into();
        let key = JobKey::resolve(&title, &company);
        Self {
            key,
            title,
            company,
            salary: salary.into(),
            location: location.into(),
            description: description.into(),
        }
    }
}

/// Durable snapshot of a listing's display fields, keyed by identity.
///
/// Lets the saved list be rebuilt after a restart without a live catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedEntry {
    pub key: JobKey,
    pub title: String,
    pub company: String,
    pub salary: String,
    pub location: String,
    pub description: String,
}

impl SavedEntry {
    /// Captures the display fields of `listing` under its identity key.
    pub fn snapshot_of(listing: &JobListing) -> Self {
        Self {
            key: listing.key.clone(),
            title: listing.title.clone(),
            company: listing.company.clone(),
            salary: listing.salary.clone(),
            location: listing.location.clone(),
            description: listing.description.clone(),
        }
    }
}
