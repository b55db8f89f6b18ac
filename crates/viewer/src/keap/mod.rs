//! Keap CRM integration.
//!
//! [`ContactSource`] is the seam between the viewer and the CRM: the
//! [`ViewerController`](crate::controller::ViewerController) only sees the
//! trait, [`KeapClient`] implements it over HTTP, and tests plug in stubs.

mod client;
mod error;

use std::future::Future;

use keap_viewer_core::{Contact, ContactId, ContactPage};

pub use client::{KeapClient, SEARCH_LIMIT};
pub use error::KeapError;

/// Default page size for contact listing.
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Largest page Keap will return.
pub const MAX_PAGE_LIMIT: u32 = 1000;

/// Read access to CRM contacts.
pub trait ContactSource: Send + Sync {
    /// Fetch one page of contacts.
    fn list_contacts(
        &self,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<ContactPage, KeapError>> + Send;

    /// Fetch the full record for one contact.
    fn get_contact(&self, id: ContactId) -> impl Future<Output = Result<Contact, KeapError>> + Send;

    /// Search contacts whose email contains `email`.
    fn search_contacts(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<ContactPage, KeapError>> + Send;
}
