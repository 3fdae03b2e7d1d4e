use std::time::Duration;

use serde::Serialize;

use jobboard_core::ApplicationRecord;

use crate::{FailureKind, FetchError, RawListing};

/// Transport settings for the listing source. Timeout policy lives here,
/// not in the core.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://empllo.com/api/v1".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The remote listing transport.
#[async_trait::async_trait]
pub trait ListingFetcher: Send + Sync {
    /// Fetches the current listing, optionally narrowed by a remote
    /// search query.
    async fn fetch(&self, query: Option<&str>) -> Result<Vec<RawListing>, FetchError>;

    /// Submits an application form to the listing source.
    async fn submit_application(&self, record: &ApplicationRecord) -> Result<(), FetchError>;
}

#[derive(Debug, Clone)]
pub struct HttpListingFetcher {
    settings: FetchSettings,
}

impl HttpListingFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn listing_url(&self, query: Option<&str>) -> Result<url::Url, FetchError> {
        let mut url = url::Url::parse(&self.settings.endpoint)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if let Some(query) = query {
            url.query_pairs_mut().append_pair("q", query);
        }
        Ok(url)
    }

    fn apply_url(&self) -> Result<url::Url, FetchError> {
        let joined = format!("{}/apply", self.settings.endpoint.trim_end_matches('/'));
        url::Url::parse(&joined)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

/// Submission body: the content identity stands in for the remote id the
/// source does not keep stable.
#[derive(Debug, Serialize)]
struct ApplicationPayload<'a> {
    job_title: &'a str,
    job_company: &'a str,
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    cover_letter: &'a str,
}

#[async_trait::async_trait]
impl ListingFetcher for HttpListingFetcher {
    async fn fetch(&self, query: Option<&str>) -> Result<Vec<RawListing>, FetchError> {
        let url = self.listing_url(query)?;
        let client = self.build_client()?;

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice::<Vec<RawListing>>(&body)
            .map_err(|err| FetchError::new(FailureKind::InvalidResponse, err.to_string()))
    }

    async fn submit_application(&self, record: &ApplicationRecord) -> Result<(), FetchError> {
        let url = self.apply_url()?;
        let client = self.build_client()?;
        let payload = ApplicationPayload {
            job_title: record.job_key.title(),
            job_company: record.job_key.company(),
            name: &record.name,
            email: &record.email,
            phone: &record.phone,
            cover_letter: &record.cover_letter,
        };

        let response = client
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        Ok(())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
