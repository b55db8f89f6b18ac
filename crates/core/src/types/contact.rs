//! Contact records as returned by the Keap REST API (`/v1/contacts`).
//!
//! Only `id` is guaranteed by the API. List fields that are missing or
//! `null` deserialize to empty lists, and unknown fields are ignored so the
//! model keeps working as Keap adds attributes.

use serde::{Deserialize, Deserializer, Serialize};

use super::id::ContactId;
use super::pool::PoolType;

/// Display name used when a contact has neither a given nor a family name.
pub const UNNAMED_CONTACT: &str = "Unnamed Contact";

/// A CRM contact snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email_addresses: Vec<EmailAddress>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone_numbers: Vec<PhoneNumber>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub custom_fields: Vec<CustomField>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub addresses: Vec<Address>,
}

/// An email entry with its Keap label (e.g. `EMAIL1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub field: Option<String>,
}

/// A phone entry with its Keap label (e.g. `PHONE1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub field: Option<String>,
}

/// A custom field value attached to a contact by the CRM operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub id: i64,
    /// Free-text content. Keap may send numbers or booleans here depending
    /// on the field type; those are kept as their JSON text.
    #[serde(default, deserialize_with = "content_as_text")]
    pub content: Option<String>,
}

/// A postal address. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub line1: Option<String>,
    #[serde(default)]
    pub line2: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
}

/// One page of contacts from a list or search call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub count: i64,
    /// URL of the next page, when Keap reports one.
    #[serde(default)]
    pub next: Option<String>,
}

impl Contact {
    /// Create a contact with only an ID.
    #[must_use]
    pub const fn new(id: ContactId) -> Self {
        Self {
            id,
            given_name: None,
            family_name: None,
            email_addresses: Vec::new(),
            phone_numbers: Vec::new(),
            custom_fields: Vec::new(),
            addresses: Vec::new(),
        }
    }

    /// Given and family name joined by a space, trimmed.
    ///
    /// Empty when the contact has no name parts.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.given_name.as_deref().unwrap_or(""),
            self.family_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }

    /// Name to show in the UI, falling back to [`UNNAMED_CONTACT`].
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = self.full_name();
        if name.is_empty() {
            UNNAMED_CONTACT.to_string()
        } else {
            name
        }
    }

    /// First listed email address.
    #[must_use]
    pub fn primary_email(&self) -> Option<&str> {
        self.email_addresses.first().map(|e| e.email.as_str())
    }

    /// First listed phone number, unformatted.
    #[must_use]
    pub fn primary_phone(&self) -> Option<&str> {
        self.phone_numbers.first().map(|p| p.number.as_str())
    }

    /// Pool type inferred from this contact's custom fields.
    #[must_use]
    pub fn pool_type(&self) -> PoolType {
        PoolType::classify(&self.custom_fields)
    }
}

impl Address {
    /// Lines for display: street lines, `"locality, region zip"`, country.
    ///
    /// Parts that are missing are skipped; a line with no parts is omitted.
    #[must_use]
    pub fn display_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(line1) = non_empty(self.line1.as_deref()) {
            lines.push(line1.to_string());
        }
        if let Some(line2) = non_empty(self.line2.as_deref()) {
            lines.push(line2.to_string());
        }

        let mut city_line = String::new();
        if let Some(locality) = non_empty(self.locality.as_deref()) {
            city_line.push_str(locality);
        }
        if let Some(region) = non_empty(self.region.as_deref()) {
            city_line.push_str(", ");
            city_line.push_str(region);
        }
        if let Some(zip) = non_empty(self.zip_code.as_deref()) {
            city_line.push(' ');
            city_line.push_str(zip);
        }
        let city_line = city_line.trim_start_matches(", ").trim().to_string();
        if !city_line.is_empty() {
            lines.push(city_line);
        }

        if let Some(country) = non_empty(self.country_code.as_deref()) {
            lines.push(country.to_string());
        }

        lines
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Deserialize `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize any JSON scalar as text; `null` becomes `None`.
fn content_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
