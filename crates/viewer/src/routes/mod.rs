//! HTTP route handlers for the viewer.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Contact list (`?q=` filters the loaded page)
//! GET  /contacts/:id           - Contact detail
//! GET  /api/contacts           - Contacts as JSON (`?email=`, `?limit=`, `?offset=`)
//! GET  /health                 - Health check
//! GET  /static/*               - Stylesheet
//! ```

pub mod api;
pub mod contacts;

use std::time::Duration;

use axum::{Router, middleware::from_fn, routing::get};
use tower_http::{
    services::ServeDir,
    trace::{DefaultOnResponse, OnResponse, TraceLayer},
};
use tracing::Span;

use crate::{
    middleware::{request_id_middleware, security_headers_middleware},
    state::AppState,
};

/// Directory holding the stylesheet, resolved at build time.
const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Create all page and API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(contacts::index))
        .route("/contacts/{id}", get(contacts::show))
        .route("/api/contacts", get(api::contacts))
        .route("/health", get(health))
}

/// Build the full application router with middleware applied.
///
/// Sentry layers are added by the binary so tests can drive this router
/// without a Sentry client.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri().path(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: Duration, span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not call Keap.
async fn health() -> &'static str {
    "ok"
}
