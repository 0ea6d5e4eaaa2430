//! External identifier reference.

use serde::{Deserialize, Serialize};

use peach_core::{OrganizationId, ValueObject};

/// Identifier used by another system (a registry, an organization).
///
/// Purely denormalized: nothing links it back to the referenced system's
/// records, and no referential integrity is kept across entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalId {
    /// The identifier exactly as the external system writes it.
    pub id: String,
    /// Organization that uses this identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_org_id: Option<OrganizationId>,
    /// Organization name (denormalized).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_org_name: Option<String>,
    /// What this identifier represents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Field name used by the external system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_field_name: Option<String>,
}

impl ExternalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            owner_org_id: None,
            owner_org_name: None,
            description: None,
            external_field_name: None,
        }
    }
}

impl ValueObject for ExternalId {}
