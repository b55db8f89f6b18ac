//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Formats a phone number as `(AAA) BBB-CCCC` when it has ten digits.
///
/// Usage in templates: `{{ phone.number|phone }}`
#[askama::filter_fn]
pub fn phone(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(keap_viewer_core::format_phone(&value.to_string()))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}
