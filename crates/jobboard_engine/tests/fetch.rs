use std::time::Duration;

use jobboard_core::{ApplicationRecord, JobKey};
use jobboard_engine::{FailureKind, FetchSettings, HttpListingFetcher, ListingFetcher};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> FetchSettings {
    FetchSettings {
        endpoint: format!("{}/jobs", server.uri()),
        ..FetchSettings::default()
    }
}

#[tokio::test]
async fn fetcher_parses_listing_batch_and_resolves_identity() {
    let server = MockServer::start().await;
    // The remote id changes per fetch and must be ignored.
    let body = json!([
        {
            "id": "3f2c9a52-3c13-4b9d-9a57-2f4d1f0a77aa",
            "title": "Software Engineer",
            "company": "Tech Corp",
            "salary": "$100,000 - $150,000",
            "location": "New York, NY",
            "description": "Looking for a skilled software engineer..."
        },
        {
            "id": "77b0f0de-91f5-4f6e-8a3d-64d3a1c2b911",
            "title": "UX Designer",
            "company": "Design Studio",
            "salary": "$90,000 - $130,000",
            "location": "Remote",
            "description": "Creative UX designer with 3+ years..."
        }
    ]);
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let fetcher = HttpListingFetcher::new(settings_for(&server));
    let raw = fetcher.fetch(None).await.expect("fetch ok");

    assert_eq!(raw.len(), 2);
    assert_eq!(raw[0].title, "Software Engineer");

    let listings: Vec<_> = raw.into_iter().map(|entry| entry.into_listing()).collect();
    assert_eq!(
        listings[0].key,
        JobKey::resolve("Software Engineer", "Tech Corp")
    );
    assert_eq!(
        listings[1].key,
        JobKey::resolve("UX Designer", "Design Studio")
    );
}

#[tokio::test]
async fn absent_fields_default_to_empty_strings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "title": "Data Engineer" }])),
        )
        .mount(&server)
        .await;

    let fetcher = HttpListingFetcher::new(settings_for(&server));
    let raw = fetcher.fetch(None).await.expect("fetch ok");

    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0].title, "Data Engineer");
    assert_eq!(raw[0].company, "");
    assert_eq!(raw[0].salary, "");
    assert_eq!(raw[0].location, "");
    assert_eq!(raw[0].description, "");
}

#[tokio::test]
async fn non_array_body_is_an_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "jobs": [] })))
        .mount(&server)
        .await;

    let fetcher = HttpListingFetcher::new(settings_for(&server));
    let err = fetcher.fetch(None).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::InvalidResponse);
}

#[tokio::test]
async fn http_failure_maps_to_status_kind() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetcher = HttpListingFetcher::new(settings_for(&server));
    let err = fetcher.fetch(None).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let fetcher = HttpListingFetcher::new(settings);
    let err = fetcher.fetch(None).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn search_query_is_forwarded_to_the_source() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .and(query_param("q", "designer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpListingFetcher::new(settings_for(&server));
    fetcher.fetch(Some("designer")).await.expect("fetch ok");
}

#[tokio::test]
async fn application_submission_posts_identity_and_form_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/jobs/apply"))
        .and(body_partial_json(json!({
            "job_title": "software engineer",
            "job_company": "tech corp",
            "name": "Ada Lovelace",
            "email": "ada@example.com"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpListingFetcher::new(settings_for(&server));
    let record = ApplicationRecord {
        job_key: JobKey::resolve("Software Engineer", "Tech Corp"),
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "+1 555 010 0199".to_string(),
        cover_letter: "Long enough to pass validation, which is not re-checked here."
            .to_string(),
    };

    fetcher.submit_application(&record).await.expect("submit ok");
}

#[tokio::test]
async fn rejected_submission_maps_to_status_kind() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/jobs/apply"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let fetcher = HttpListingFetcher::new(settings_for(&server));
    let record = ApplicationRecord {
        job_key: JobKey::resolve("Software Engineer", "Tech Corp"),
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "+1 555 010 0199".to_string(),
        cover_letter: "Long enough to pass validation, which is not re-checked here."
            .to_string(),
    };
    let err = fetcher.submit_application(&record).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}
