//! Viewer controller: in-memory state for one contact viewing session.
//!
//! Holds the loaded contact list, the current search query, the selected
//! contact and the view mode. Derived state (the filtered list) is computed
//! on demand from the loaded list and the query.
//!
//! ```text
//!            select (fetch ok)
//!   ┌──────┐ ───────────────▶ ┌────────┐
//!   │ List │                  │ Detail │
//!   └──────┘ ◀─────────────── └────────┘
//!                 back
//! ```

use keap_viewer_core::{Contact, ContactId, filter_contacts};

use crate::keap::{ContactSource, KeapError};

/// Number of contacts requested on load.
pub const LOAD_LIMIT: u32 = 100;

/// Error shown when the contact list cannot be loaded.
pub const LOAD_CONTACTS_FAILED: &str = "Failed to load contacts. Please check your API credentials.";

/// Error shown when a contact's details cannot be loaded.
pub const LOAD_DETAILS_FAILED: &str = "Failed to load contact details.";

/// Which view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Detail,
}

/// Session state for the contact viewer.
#[derive(Debug)]
pub struct ViewerController<S> {
    source: S,
    contacts: Vec<Contact>,
    query: String,
    selected: Option<Contact>,
    mode: ViewMode,
    error: Option<String>,
}

impl<S: ContactSource> ViewerController<S> {
    /// Create an empty controller in list mode.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            source,
            contacts: Vec::new(),
            query: String::new(),
            selected: None,
            mode: ViewMode::List,
            error: None,
        }
    }

    /// Load up to [`LOAD_LIMIT`] contacts, replacing the in-memory list.
    ///
    /// On failure the list is left empty and the user-facing error is set.
    /// A successful load clears any previous error.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`KeapError`] after recording the failure.
    pub async fn load(&mut self) -> Result<(), KeapError> {
        self.error = None;

        match self.source.list_contacts(LOAD_LIMIT, 0).await {
            Ok(page) => {
                tracing::debug!(loaded = page.contacts.len(), "Contacts loaded");
                self.contacts = page.contacts;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error loading contacts");
                self.contacts.clear();
                self.error = Some(LOAD_CONTACTS_FAILED.to_string());
                Err(e)
            }
        }
    }

    /// Replace the search query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Current search query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Every loaded contact, in server order.
    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Loaded contacts matching the current query, in server order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Contact> {
        filter_contacts(&self.contacts, &self.query)
    }

    /// Fetch the full record for `id` and switch to the detail view.
    ///
    /// Always re-fetches, even if the contact is already loaded. On failure
    /// the error is set and the view stays on the list.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`KeapError`] after recording the failure.
    pub async fn select(&mut self, id: ContactId) -> Result<&Contact, KeapError> {
        match self.source.get_contact(id).await {
            Ok(contact) => {
                self.mode = ViewMode::Detail;
                Ok(&*self.selected.insert(contact))
            }
            Err(e) => {
                tracing::error!(error = %e, contact_id = %id, "Error loading contact details");
                self.error = Some(LOAD_DETAILS_FAILED.to_string());
                Err(e)
            }
        }
    }

    /// Return to the list view, clearing the selection.
    pub fn back(&mut self) {
        self.selected = None;
        self.mode = ViewMode::List;
    }

    /// Contact shown in the detail view.
    #[must_use]
    pub const fn selected(&self) -> Option<&Contact> {
        self.selected.as_ref()
    }

    /// Current view mode.
    #[must_use]
    pub const fn mode(&self) -> ViewMode {
        self.mode
    }

    /// User-facing error from the last failed fetch.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The contact source this controller reads from.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use keap_viewer_core::{ContactPage, EmailAddress, PoolType};

    use super::*;

    /// Contact source that replays queued responses.
    #[derive(Default)]
    struct StubSource {
        pages: Mutex<VecDeque<Result<ContactPage, KeapError>>>,
        details: Mutex<VecDeque<Result<Contact, KeapError>>>,
        list_calls: Mutex<Vec<(u32, u32)>>,
    }

    impl StubSource {
        fn with_page(self, page: Result<ContactPage, KeapError>) -> Self {
            self.pages.lock().unwrap().push_back(page);
            self
        }

        fn with_detail(self, detail: Result<Contact, KeapError>) -> Self {
            self.details.lock().unwrap().push_back(detail);
            self
        }
    }

    impl ContactSource for StubSource {
        async fn list_contacts(&self, limit: u32, offset: u32) -> Result<ContactPage, KeapError> {
            self.list_calls.lock().unwrap().push((limit, offset));
            self.pages
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(ContactPage::default()))
        }

        async fn get_contact(&self, id: ContactId) -> Result<Contact, KeapError> {
            self.details
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Contact::new(id)))
        }

        async fn search_contacts(&self, _email: &str) -> Result<ContactPage, KeapError> {
            Ok(ContactPage::default())
        }
    }

    fn named(id: i64, given: &str, email: &str) -> Contact {
        let mut contact = Contact::new(ContactId::new(id));
        contact.given_name = Some(given.to_string());
        contact.email_addresses.push(EmailAddress {
            email: email.to_string(),
            field: None,
        });
        contact
    }

    fn page(contacts: Vec<Contact>) -> ContactPage {
        ContactPage {
            count: i64::try_from(contacts.len()).unwrap(),
            contacts,
            next: None,
        }
    }

    fn server_error() -> KeapError {
        KeapError::Api {
            status: 500,
            message: "boom".to_string(),
        }
    }

    #[tokio::test]
    async fn test_initial_state() {
        let viewer = ViewerController::new(StubSource::default());
        assert_eq!(viewer.mode(), ViewMode::List);
        assert!(viewer.contacts().is_empty());
        assert!(viewer.selected().is_none());
        assert!(viewer.error().is_none());
    }

    #[tokio::test]
    async fn test_load_requests_one_hundred() {
        let mut viewer = ViewerController::new(StubSource::default());
        viewer.load().await.unwrap();
        assert_eq!(*viewer.source().list_calls.lock().unwrap(), vec![(100, 0)]);
    }

    #[tokio::test]
    async fn test_load_replaces_list() {
        let source = StubSource::default()
            .with_page(Ok(page(vec![named(1, "Ada", "ada@a.com")])))
            .with_page(Ok(page(vec![
                named(2, "Grace", "grace@g.com"),
                named(3, "Alan", "alan@t.com"),
            ])));
        let mut viewer = ViewerController::new(source);

        viewer.load().await.unwrap();
        assert_eq!(viewer.contacts().len(), 1);

        viewer.load().await.unwrap();
        let ids: Vec<i64> = viewer.contacts().iter().map(|c| c.id.as_i64()).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn test_failed_load_then_retry() {
        let source = StubSource::default()
            .with_page(Err(server_error()))
            .with_page(Ok(page(vec![named(1, "Ada", "ada@a.com")])));
        let mut viewer = ViewerController::new(source);

        assert!(viewer.load().await.is_err());
        assert!(viewer.contacts().is_empty());
        assert_eq!(viewer.error(), Some(LOAD_CONTACTS_FAILED));

        viewer.load().await.unwrap();
        assert!(viewer.error().is_none());
        assert_eq!(viewer.contacts().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_reload_empties_list() {
        let source = StubSource::default()
            .with_page(Ok(page(vec![named(1, "Ada", "ada@a.com")])))
            .with_page(Err(KeapError::Parse("expected value".to_string())));
        let mut viewer = ViewerController::new(source);

        viewer.load().await.unwrap();
        assert!(viewer.load().await.is_err());
        assert!(viewer.contacts().is_empty());
        assert_eq!(viewer.error(), Some(LOAD_CONTACTS_FAILED));
    }

    #[tokio::test]
    async fn test_filter_follows_query() {
        let source = StubSource::default().with_page(Ok(page(vec![
            named(1, "Ada", "ada@a.com"),
            named(2, "Grace", "grace@g.com"),
        ])));
        let mut viewer = ViewerController::new(source);
        viewer.load().await.unwrap();

        assert_eq!(viewer.filtered().len(), 2);

        viewer.set_query("GRACE");
        let filtered = viewer.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, ContactId::new(2));

        viewer.set_query("  ");
        assert_eq!(viewer.filtered().len(), 2);
    }

    #[tokio::test]
    async fn test_select_refetches_and_switches_to_detail() {
        let mut full = named(1, "Ada", "ada@a.com");
        full.custom_fields.push(keap_viewer_core::CustomField {
            id: 9,
            content: Some("Salt system".to_string()),
        });
        let source = StubSource::default()
            .with_page(Ok(page(vec![named(1, "Ada", "ada@a.com")])))
            .with_detail(Ok(full));
        let mut viewer = ViewerController::new(source);
        viewer.load().await.unwrap();

        let selected = viewer.select(ContactId::new(1)).await.unwrap();
        assert_eq!(selected.pool_type(), PoolType::Salt);
        assert_eq!(viewer.mode(), ViewMode::Detail);
        assert_eq!(viewer.selected().unwrap().custom_fields.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_select_stays_on_list() {
        let source = StubSource::default()
            .with_page(Ok(page(vec![named(1, "Ada", "ada@a.com")])))
            .with_detail(Err(server_error()));
        let mut viewer = ViewerController::new(source);
        viewer.load().await.unwrap();

        assert!(viewer.select(ContactId::new(1)).await.is_err());
        assert_eq!(viewer.mode(), ViewMode::List);
        assert!(viewer.selected().is_none());
        assert_eq!(viewer.error(), Some(LOAD_DETAILS_FAILED));
        assert_eq!(viewer.contacts().len(), 1);
    }

    #[tokio::test]
    async fn test_back_keeps_list_and_clears_selection() {
        let source = StubSource::default().with_page(Ok(page(vec![
            named(1, "Ada", "ada@a.com"),
            named(2, "Grace", "grace@g.com"),
        ])));
        let mut viewer = ViewerController::new(source);
        viewer.load().await.unwrap();
        viewer.set_query("ada");

        viewer.select(ContactId::new(2)).await.unwrap();
        viewer.back();

        assert_eq!(viewer.mode(), ViewMode::List);
        assert!(viewer.selected().is_none());
        assert_eq!(viewer.contacts().len(), 2);
        assert_eq!(viewer.query(), "ada");
        assert_eq!(viewer.filtered().len(), 1);
    }
}
