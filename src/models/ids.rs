//! Strongly-typed ID wrappers for catalog records
//!
//! Catalog ids are human-chosen strings (`"external-audit"`,
//! `"resurgence-article"`). Wrapping them keeps a service id from being
//! passed where a publication id is expected.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from any string-like value
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the id as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the id is blank
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }
    };
}

define_id!(ServiceId);
define_id!(PublicationId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = ServiceId::new("external-audit");
        assert_eq!(id.to_string(), "external-audit");
        assert_eq!(id.as_str(), "external-audit");
    }

    #[test]
    fn test_id_compares_with_str() {
        let id = PublicationId::from("resurgence-article");
        assert!(id == *"resurgence-article");
    }

    #[test]
    fn test_blank_id() {
        assert!(ServiceId::new("  ").is_blank());
        assert!(!ServiceId::new("tax").is_blank());
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ServiceId::new("payroll");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"payroll\"");
        let back: ServiceId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
