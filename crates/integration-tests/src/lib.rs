//! Integration tests for the Keap contact viewer.
//!
//! Every test runs against a `wiremock` server standing in for the Keap
//! REST API, so no credentials or network access are needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p keap-viewer-integration-tests
//! ```

#![allow(clippy::missing_panics_doc, clippy::unwrap_used)]

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use keap_viewer::{
    config::{KeapConfig, ViewerConfig},
    routes,
    state::AppState,
};
use secrecy::SecretString;
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::MockServer;

/// Token the tests configure; mocks match on it.
pub const TEST_TOKEN: &str = "KeapAK-7f3c9a1e5b2d8046";

/// Keap configuration pointing at a mock server.
#[must_use]
pub fn keap_config(server: &MockServer) -> KeapConfig {
    KeapConfig {
        base_url: server.uri(),
        api_token: SecretString::from(TEST_TOKEN),
        timeout: Duration::from_secs(5),
    }
}

/// Full application router backed by a mock Keap server.
#[must_use]
pub fn test_app(server: &MockServer) -> Router {
    let config = ViewerConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        keap: keap_config(server),
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 0.0,
        sentry_traces_sample_rate: 0.0,
    };

    routes::router(AppState::new(&config).unwrap())
}

/// Send a GET through the router and collect status, headers and body.
pub async fn get(app: Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

/// A pool customer with salt in a custom field.
#[must_use]
pub fn salt_contact() -> Value {
    json!({
        "id": 5,
        "given_name": "Pat",
        "family_name": "Pool",
        "email_addresses": [{ "email": "pat@pools.test", "field": "EMAIL1" }],
        "phone_numbers": [{ "number": "8135550199", "field": "PHONE1" }],
        "custom_fields": [{ "id": 22, "content": "Salt water system" }],
        "addresses": [{
            "line1": "1 Deep End",
            "locality": "Tampa",
            "region": "FL",
            "zip_code": "33601",
            "country_code": "USA"
        }]
    })
}

/// A sparse record as Keap returns it for contacts with little data.
#[must_use]
pub fn sparse_contact() -> Value {
    json!({
        "id": 9,
        "given_name": "Robin",
        "family_name": null,
        "email_addresses": null,
        "phone_numbers": [],
        "custom_fields": [{ "id": 22, "content": null }]
    })
}

/// A `GET /v1/contacts` response body.
#[must_use]
pub fn contact_page(contacts: Vec<Value>) -> Value {
    let count = contacts.len();
    json!({ "contacts": contacts, "count": count, "next": null })
}
