use std::fmt;

/// Stable, content-derived identity for a job listing.
///
/// The remote listing source assigns a fresh random identifier on every
/// fetch, so identity is derived from the normalized `(title, company)`
/// pair instead. Two entries sharing a normalized title and company always
/// compare equal, whatever their other fields say. Genuinely distinct
/// postings with the same title and company (say, at different locations)
/// collide; that is an accepted limitation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JobKey {
    title: String,
    company: String,
}

impl JobKey {
    /// Resolves the identity key for a raw `(title, company)` pair.
    ///
    /// Total over arbitrary input; empty fields produce a valid
    /// (if degenerate) key rather than an error.
    pub fn resolve(title: &str, company: &str) -> Self {
        Self {
            title: normalize(title),
            company: normalize(company),
        }
    }

    /// Normalized title component.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Normalized company component.
    pub fn company(&self) -> &str {
        &self.company
    }
}

impl fmt::Display for JobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.title, self.company)
    }
}

fn normalize(field: &str) -> String {
    field.trim().to_lowercase()
}
