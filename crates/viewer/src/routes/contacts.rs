//! Contact list and detail pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use keap_viewer_core::{Contact, ContactId, CustomField, PoolType, format_phone};

use crate::{
    controller::{LOAD_CONTACTS_FAILED, LOAD_DETAILS_FAILED, ViewerController},
    error::add_breadcrumb,
    filters,
    state::AppState,
};

const NO_EMAIL: &str = "No email";
const NO_PHONE: &str = "No phone";

/// List page query parameters.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub q: String,
}

/// One row of the contact list.
#[derive(Debug, Clone)]
pub struct ContactRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub pool_type: PoolType,
    pub pool_badge: &'static str,
}

/// A value with its optional Keap label (`EMAIL1`, `PHONE2`, ...).
#[derive(Debug, Clone)]
pub struct LabeledValue {
    pub value: String,
    pub label: Option<String>,
}

/// Everything the detail page shows for one contact.
#[derive(Debug, Clone)]
pub struct ContactDetailView {
    pub id: i64,
    pub name: String,
    pub pool_type: PoolType,
    pub pool_badge: &'static str,
    pub emails: Vec<LabeledValue>,
    pub phones: Vec<LabeledValue>,
    pub addresses: Vec<Vec<String>>,
    pub custom_fields: Vec<CustomField>,
}

// =============================================================================
// Type Conversions
// =============================================================================

/// CSS class for a pool type badge.
const fn pool_badge(pool_type: PoolType) -> &'static str {
    match pool_type {
        PoolType::Salt => "badge badge-salt",
        PoolType::Chlorine => "badge badge-chlorine",
        PoolType::Unknown => "badge badge-unknown",
    }
}

impl From<&Contact> for ContactRow {
    fn from(contact: &Contact) -> Self {
        let pool_type = contact.pool_type();

        Self {
            id: contact.id.as_i64(),
            name: contact.display_name(),
            email: contact
                .primary_email()
                .filter(|email| !email.is_empty())
                .unwrap_or(NO_EMAIL)
                .to_string(),
            phone: contact
                .primary_phone()
                .filter(|phone| !phone.is_empty())
                .map_or_else(|| NO_PHONE.to_string(), format_phone),
            pool_type,
            pool_badge: pool_badge(pool_type),
        }
    }
}

impl From<&Contact> for ContactDetailView {
    fn from(contact: &Contact) -> Self {
        let pool_type = contact.pool_type();

        Self {
            id: contact.id.as_i64(),
            name: contact.display_name(),
            pool_type,
            pool_badge: pool_badge(pool_type),
            emails: contact
                .email_addresses
                .iter()
                .map(|e| LabeledValue {
                    value: e.email.clone(),
                    label: e.field.clone(),
                })
                .collect(),
            phones: contact
                .phone_numbers
                .iter()
                .map(|p| LabeledValue {
                    value: p.number.clone(),
                    label: p.field.clone(),
                })
                .collect(),
            addresses: contact
                .addresses
                .iter()
                .map(keap_viewer_core::Address::display_lines)
                .filter(|lines| !lines.is_empty())
                .collect(),
            custom_fields: contact.custom_fields.clone(),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Contact list page template.
#[derive(Template, WebTemplate)]
#[template(path = "contacts/index.html")]
pub struct ContactsIndexTemplate {
    pub contacts: Vec<ContactRow>,
    pub query: String,
}

/// Contact detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "contacts/show.html")]
pub struct ContactShowTemplate {
    pub contact: ContactDetailView,
}

/// Load failure page with a single recovery link.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
    pub action_href: String,
    pub action_label: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Contact list page.
///
/// Loads the first page of contacts and filters it by `?q=`.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>, Query(query): Query<ListQuery>) -> Response {
    let mut viewer = ViewerController::new(state.keap().clone());

    if viewer.load().await.is_err() {
        let retry_href = if query.q.is_empty() {
            "/".to_string()
        } else {
            format!("/?q={}", urlencoding::encode(&query.q))
        };

        return (
            StatusCode::BAD_GATEWAY,
            ErrorTemplate {
                title: "Error Loading Contacts".to_string(),
                message: viewer.error().unwrap_or(LOAD_CONTACTS_FAILED).to_string(),
                action_href: retry_href,
                action_label: "Try Again".to_string(),
            },
        )
            .into_response();
    }

    viewer.set_query(query.q);

    ContactsIndexTemplate {
        contacts: viewer.filtered().into_iter().map(ContactRow::from).collect(),
        query: viewer.query().to_string(),
    }
    .into_response()
}

/// Contact detail page.
///
/// Always fetches the full record from Keap.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let mut viewer = ViewerController::new(state.keap().clone());
    let id = ContactId::new(id);

    let contact_id = id.to_string();
    add_breadcrumb(
        "navigation",
        "Viewed contact detail",
        Some(&[("contact_id", contact_id.as_str())]),
    );

    let fetched = viewer.select(id).await.is_ok();
    let selected = if fetched {
        viewer.selected().map(ContactDetailView::from)
    } else {
        None
    };

    let Some(contact) = selected else {
        return (
            StatusCode::BAD_GATEWAY,
            ErrorTemplate {
                title: "Error Loading Contact".to_string(),
                message: viewer.error().unwrap_or(LOAD_DETAILS_FAILED).to_string(),
                action_href: "/".to_string(),
                action_label: "Back to Contacts".to_string(),
            },
        )
            .into_response();
    };

    ContactShowTemplate { contact }.into_response()
}
