//! Keap contact viewer.
//!
//! Server-rendered pages for browsing and searching Keap CRM contacts, plus
//! a small JSON API over the same data. The binary in `main.rs` wires this
//! library to configuration, logging and Sentry.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod controller;
pub mod error;
pub mod filters;
pub mod keap;
pub mod middleware;
pub mod routes;
pub mod state;
