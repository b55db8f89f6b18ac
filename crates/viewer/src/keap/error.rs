//! Keap API errors.

use thiserror::Error;

/// Errors that can occur when talking to the Keap REST API.
///
/// The UI collapses every variant into one "load failed" message; the
/// variants exist for logs and error tracking.
#[derive(Debug, Error)]
pub enum KeapError {
    /// Transport-level failure (connect, TLS, timeout).
    #[error("Keap request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Keap answered with a non-success status.
    #[error("Keap API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The response body was not the expected JSON shape.
    #[error("Keap response parse error: {0}")]
    Parse(String),

    /// The client could not be built from configuration.
    #[error("Keap configuration error: {0}")]
    Config(String),
}

impl KeapError {
    /// HTTP status returned by Keap, if the request got that far.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
