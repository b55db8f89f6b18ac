//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i64` (Keap IDs are JSON integers) with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_i64()`
/// - `From<i64>` and `Into<i64>` implementations
///
/// # Example
///
/// ```rust
/// # use keap_viewer_core::define_id;
/// define_id!(TagId);
/// define_id!(CompanyId);
///
/// let tag_id = TagId::new(1);
/// let company_id = CompanyId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: TagId = company_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new ID from an i64 value.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the underlying i64 value.
            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ContactId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_id_display() {
        assert_eq!(ContactId::new(42).to_string(), "42");
    }

    #[test]
    fn test_contact_id_serde_transparent() {
        let id: ContactId = serde_json::from_str("1234").unwrap();
        assert_eq!(id.as_i64(), 1234);
        assert_eq!(serde_json::to_string(&id).unwrap(), "1234");
    }

    #[test]
    fn test_contact_id_conversions() {
        let id = ContactId::from(7);
        assert_eq!(i64::from(id), 7);
    }
}
