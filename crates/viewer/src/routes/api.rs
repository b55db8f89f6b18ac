//! JSON contact API.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use keap_viewer_core::ContactPage;

use crate::{
    error::Result,
    keap::{ContactSource, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT},
    state::AppState,
};

/// Query parameters for `GET /api/contacts`.
#[derive(Debug, Default, Deserialize)]
pub struct ContactsQuery {
    /// Email search term. When present, paging parameters are ignored.
    pub email: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ContactsQuery {
    /// Page size, clamped to what Keap accepts.
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .clamp(1, MAX_PAGE_LIMIT)
    }

    /// Search term, if a non-blank one was supplied.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
    }
}

/// List or search contacts as JSON.
///
/// # Errors
///
/// Returns 502 if the Keap request fails.
#[instrument(skip(state))]
pub async fn contacts(
    State(state): State<AppState>,
    Query(query): Query<ContactsQuery>,
) -> Result<Json<ContactPage>> {
    let page = match query.email() {
        Some(email) => state.keap().search_contacts(email).await?,
        None => {
            state
                .keap()
                .list_contacts(query.limit(), query.offset.unwrap_or(0))
                .await?
        }
    };

    tracing::debug!(count = page.contacts.len(), "Returning contacts");
    Ok(Json(page))
}
