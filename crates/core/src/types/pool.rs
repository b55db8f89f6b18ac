//! Pool type classification.
//!
//! Keap has no pool equipment attribute; operators record it as free text in
//! custom fields ("Type: Salt Water", "Chlorine tabs", ...). The pool type is
//! inferred from the first custom field that mentions either keyword.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::contact::CustomField;

const SALT: &str = "salt";
const CHLORINE: &str = "chlorine";

/// Pool sanitation type derived from a contact's custom fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PoolType {
    Salt,
    Chlorine,
    #[default]
    Unknown,
}

impl PoolType {
    /// Classify from custom fields, in order.
    ///
    /// Picks the first field whose content contains "salt" or "chlorine"
    /// (case-insensitive). That field is `Salt` if it mentions salt at all,
    /// otherwise `Chlorine`. A field mentioning both is `Salt`.
    #[must_use]
    pub fn classify(fields: &[CustomField]) -> Self {
        let matched = fields
            .iter()
            .filter_map(|field| field.content.as_deref())
            .map(str::to_lowercase)
            .find(|content| content.contains(SALT) || content.contains(CHLORINE));

        match matched {
            Some(content) if content.contains(SALT) => Self::Salt,
            Some(content) if content.contains(CHLORINE) => Self::Chlorine,
            _ => Self::Unknown,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Salt => "Salt",
            Self::Chlorine => "Chlorine",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PoolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
