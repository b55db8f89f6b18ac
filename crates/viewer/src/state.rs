//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ViewerConfig;
use crate::keap::{KeapClient, KeapError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// Keap client. Per-session view state lives in a
/// [`ViewerController`](crate::controller::ViewerController) built per request.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    keap: KeapClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the Keap client cannot be built from configuration.
    pub fn new(config: &ViewerConfig) -> Result<Self, KeapError> {
        let keap = KeapClient::new(&config.keap)?;

        Ok(Self {
            inner: Arc::new(AppStateInner { keap }),
        })
    }

    /// Get a reference to the Keap API client.
    #[must_use]
    pub fn keap(&self) -> &KeapClient {
        &self.inner.keap
    }
}
