//! Strongly-typed identifiers used across the entity model.
//!
//! Identifiers are opaque strings assigned by registries and other external
//! systems. Each entity kind gets its own nominal type so that, say, a
//! `DocumentId` cannot silently stand in for a `CertificateId`.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of an EAC certificate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CertificateId(String);

/// Identifier of a production source (facility or project).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductionSourceId(String);

/// Identifier of a document, unique within its owning certificate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

/// Identifier of a lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

/// Identifier of an organization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizationId(String);

macro_rules! impl_string_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap an identifier assigned by an external system.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Mint a fresh identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
            /// for determinism.
            pub fn generate() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.trim().is_empty() {
                    return Err(DomainError::invalid_id(format!(
                        "{}: empty identifier",
                        $name
                    )));
                }
                Ok(Self(s.to_owned()))
            }
        }
    };
}

impl_string_id!(CertificateId, "CertificateId");
impl_string_id!(ProductionSourceId, "ProductionSourceId");
impl_string_id!(DocumentId, "DocumentId");
impl_string_id!(EventId, "EventId");
impl_string_id!(OrganizationId, "OrganizationId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_serializes_as_bare_string() {
        let id = DocumentId::new("d1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"d1\"");

        let back: DocumentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn from_str_rejects_empty_identifier() {
        let err = "   ".parse::<CertificateId>().unwrap_err();
        match err {
            DomainError::InvalidId(_) => {}
            _ => panic!("Expected InvalidId error for empty identifier"),
        }
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = EventId::generate();
        let b = EventId::generate();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }
}
