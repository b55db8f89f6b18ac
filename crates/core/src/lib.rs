//! Keap Viewer Core - Shared types library.
//!
//! This crate provides the contact model and the derived view state used by
//! the `keap-viewer` web binary:
//! - Contact records as returned by the Keap REST API
//! - Client-side search over a loaded contact list
//! - Pool type classification from free-text custom fields
//! - Phone number display formatting
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. Everything here can be tested without a network or a renderer.
//!
//! # Modules
//!
//! - [`types`] - Contact records, IDs, pool types and phone formatting
//! - [`search`] - Query filtering over a loaded contact list

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod search;
pub mod types;

pub use search::{filter_contacts, matches_query};
pub use types::*;
