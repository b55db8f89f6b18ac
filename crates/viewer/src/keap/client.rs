//! Keap REST API client.
//!
//! Thin wrapper over `reqwest` for the three contact calls the viewer makes.
//! Every request carries the bearer token and a JSON content type; any
//! non-success status or malformed body is an error. No retries, no
//! pagination traversal, no caching.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::instrument;

use keap_viewer_core::{Contact, ContactId, ContactPage};

use super::{ContactSource, KeapError};
use crate::config::KeapConfig;

/// Page size used by email search.
pub const SEARCH_LIMIT: u32 = 50;

/// Keap REST API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct KeapClient {
    client: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for KeapClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeapClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl KeapClient {
    /// Create a new Keap API client.
    ///
    /// # Errors
    ///
    /// Returns error if the token is not a valid header value or the HTTP
    /// client fails to build.
    pub fn new(config: &KeapConfig) -> Result<Self, KeapError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", config.api_token.expose_secret());
        let mut auth_header = HeaderValue::from_str(&auth_value)
            .map_err(|e| KeapError::Config(format!("Invalid API token format: {e}")))?;
        auth_header.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_header);

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `url` and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, KeapError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Keap returned an error status");
            return Err(KeapError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| KeapError::Parse(e.to_string()))
    }
}

impl ContactSource for KeapClient {
    #[instrument(skip(self))]
    async fn list_contacts(&self, limit: u32, offset: u32) -> Result<ContactPage, KeapError> {
        let url = format!(
            "{}/v1/contacts?limit={limit}&offset={offset}",
            self.base_url
        );
        let page: ContactPage = self.get_json(&url).await?;
        tracing::debug!(returned = page.contacts.len(), count = page.count, "Fetched contacts");
        Ok(page)
    }

    #[instrument(skip(self, id), fields(contact_id = %id))]
    async fn get_contact(&self, id: ContactId) -> Result<Contact, KeapError> {
        let url = format!("{}/v1/contacts/{id}", self.base_url);
        self.get_json(&url).await
    }

    #[instrument(skip(self, email))]
    async fn search_contacts(&self, email: &str) -> Result<ContactPage, KeapError> {
        let url = format!(
            "{}/v1/contacts?email={}&limit={SEARCH_LIMIT}",
            self.base_url,
            urlencoding::encode(email)
        );
        self.get_json(&url).await
    }
}
