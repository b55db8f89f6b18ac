//! Core types for the Keap contact viewer.
//!
//! This module provides the contact model and the values derived from it.

pub mod contact;
pub mod id;
pub mod phone;
pub mod pool;

pub use contact::{
    Address, Contact, ContactPage, CustomField, EmailAddress, PhoneNumber, UNNAMED_CONTACT,
};
pub use id::*;
pub use phone::format_phone;
pub use pool::PoolType;
