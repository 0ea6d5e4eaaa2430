//! Organizations and the roles they play.

use serde::{Deserialize, Serialize};

use peach_core::{DomainError, Entity, OrganizationId, ValueObject};

use crate::external_id::ExternalId;
use crate::location::Location;

/// Role an organization plays in a certificate's lifecycle.
///
/// `Other` carries the free-text role as its payload. On the wire it splits
/// into `role: "OTHER"` plus the sibling `roleCustom` field, and a lone
/// `role: "OTHER"` without `roleCustom` does not deserialize, so the pairing
/// cannot be violated in memory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrgRole {
    Registry,
    Issuer,
    Producer,
    Seller,
    Broker,
    EacBuyer,
    EacBeneficiary,
    FuelUser,
    Transport,
    GridOperator,

    MrvAuditor,
    MrvRatingAgency,
    MrvLabel,
    MrvVerifier,
    MrvValidator,
    MrvLab,

    /// Free-text role not covered by the closed set.
    Other(String),
}

impl OrgRole {
    /// Wire string of the role tag ("OTHER" for [`OrgRole::Other`]).
    pub fn as_str(&self) -> &str {
        self.split_ref().0.as_str()
    }

    /// Free-text role, present only for [`OrgRole::Other`].
    pub fn custom(&self) -> Option<&str> {
        match self {
            OrgRole::Other(custom) => Some(custom),
            _ => None,
        }
    }

    fn split_ref(&self) -> (RoleTag, Option<&str>) {
        match self {
            OrgRole::Registry => (RoleTag::Registry, None),
            OrgRole::Issuer => (RoleTag::Issuer, None),
            OrgRole::Producer => (RoleTag::Producer, None),
            OrgRole::Seller => (RoleTag::Seller, None),
            OrgRole::Broker => (RoleTag::Broker, None),
            OrgRole::EacBuyer => (RoleTag::EacBuyer, None),
            OrgRole::EacBeneficiary => (RoleTag::EacBeneficiary, None),
            OrgRole::FuelUser => (RoleTag::FuelUser, None),
            OrgRole::Transport => (RoleTag::Transport, None),
            OrgRole::GridOperator => (RoleTag::GridOperator, None),
            OrgRole::MrvAuditor => (RoleTag::MrvAuditor, None),
            OrgRole::MrvRatingAgency => (RoleTag::MrvRatingAgency, None),
            OrgRole::MrvLabel => (RoleTag::MrvLabel, None),
            OrgRole::MrvVerifier => (RoleTag::MrvVerifier, None),
            OrgRole::MrvValidator => (RoleTag::MrvValidator, None),
            OrgRole::MrvLab => (RoleTag::MrvLab, None),
            OrgRole::Other(custom) => (RoleTag::Other, Some(custom)),
        }
    }
}

impl core::fmt::Display for OrgRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed wire tag for [`OrgRole`]; the payload travels as `roleCustom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum RoleTag {
    Registry,
    Issuer,
    Producer,
    Seller,
    Broker,
    #[serde(rename = "EACBUYER")]
    EacBuyer,
    #[serde(rename = "EACBENEFICIARY")]
    EacBeneficiary,
    FuelUser,
    Transport,
    GridOperator,
    MrvAuditor,
    MrvRatingAgency,
    MrvLabel,
    MrvVerifier,
    MrvValidator,
    MrvLab,
    Other,
}

impl RoleTag {
    fn as_str(self) -> &'static str {
        match self {
            RoleTag::Registry => "REGISTRY",
            RoleTag::Issuer => "ISSUER",
            RoleTag::Producer => "PRODUCER",
            RoleTag::Seller => "SELLER",
            RoleTag::Broker => "BROKER",
            RoleTag::EacBuyer => "EACBUYER",
            RoleTag::EacBeneficiary => "EACBENEFICIARY",
            RoleTag::FuelUser => "FUEL_USER",
            RoleTag::Transport => "TRANSPORT",
            RoleTag::GridOperator => "GRID_OPERATOR",
            RoleTag::MrvAuditor => "MRV_AUDITOR",
            RoleTag::MrvRatingAgency => "MRV_RATING_AGENCY",
            RoleTag::MrvLabel => "MRV_LABEL",
            RoleTag::MrvVerifier => "MRV_VERIFIER",
            RoleTag::MrvValidator => "MRV_VALIDATOR",
            RoleTag::MrvLab => "MRV_LAB",
            RoleTag::Other => "OTHER",
        }
    }

    fn with_custom(self, custom: Option<String>) -> Result<OrgRole, DomainError> {
        Ok(match self {
            RoleTag::Registry => OrgRole::Registry,
            RoleTag::Issuer => OrgRole::Issuer,
            RoleTag::Producer => OrgRole::Producer,
            RoleTag::Seller => OrgRole::Seller,
            RoleTag::Broker => OrgRole::Broker,
            RoleTag::EacBuyer => OrgRole::EacBuyer,
            RoleTag::EacBeneficiary => OrgRole::EacBeneficiary,
            RoleTag::FuelUser => OrgRole::FuelUser,
            RoleTag::Transport => OrgRole::Transport,
            RoleTag::GridOperator => OrgRole::GridOperator,
            RoleTag::MrvAuditor => OrgRole::MrvAuditor,
            RoleTag::MrvRatingAgency => OrgRole::MrvRatingAgency,
            RoleTag::MrvLabel => OrgRole::MrvLabel,
            RoleTag::MrvVerifier => OrgRole::MrvVerifier,
            RoleTag::MrvValidator => OrgRole::MrvValidator,
            RoleTag::MrvLab => OrgRole::MrvLab,
            RoleTag::Other => match custom {
                Some(text) => OrgRole::Other(text),
                None => {
                    return Err(DomainError::validation(
                        "role OTHER requires roleCustom",
                    ));
                }
            },
        })
    }
}

/// Lightweight organization context embedded in events and sources.
///
/// A back-reference to a full [`Organization`] by id, plus denormalized
/// display fields; it never owns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOrganizationRole", into = "RawOrganizationRole")]
pub struct OrganizationRole {
    /// Reference to the full `Organization` entity.
    pub org_id: OrganizationId,
    /// Organization name (denormalized for display).
    pub org_name: String,
    /// Role in this context.
    pub role: OrgRole,
    /// External IDs relevant to this context.
    pub external_ids: Option<Vec<ExternalId>>,
}

impl OrganizationRole {
    pub fn new(org_id: OrganizationId, org_name: impl Into<String>, role: OrgRole) -> Self {
        Self {
            org_id,
            org_name: org_name.into(),
            role,
            external_ids: None,
        }
    }
}

impl ValueObject for OrganizationRole {}

/// Wire shape of [`OrganizationRole`]: the role travels as a closed tag plus
/// an optional `roleCustom` sibling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOrganizationRole {
    org_id: OrganizationId,
    org_name: String,
    role: RoleTag,
    #[serde(skip_serializing_if = "Option::is_none")]
    role_custom: Option<String>,
    #[serde(rename = "externalIDs", skip_serializing_if = "Option::is_none")]
    external_ids: Option<Vec<ExternalId>>,
}

impl TryFrom<RawOrganizationRole> for OrganizationRole {
    type Error = DomainError;

    fn try_from(raw: RawOrganizationRole) -> Result<Self, Self::Error> {
        // A stray roleCustom next to a known role is ignored; it is only
        // meaningful for OTHER.
        let role = raw.role.with_custom(raw.role_custom)?;
        Ok(Self {
            org_id: raw.org_id,
            org_name: raw.org_name,
            role,
            external_ids: raw.external_ids,
        })
    }
}

impl From<OrganizationRole> for RawOrganizationRole {
    fn from(value: OrganizationRole) -> Self {
        let (role, role_custom) = value.role.split_ref();
        Self {
            org_id: value.org_id,
            org_name: value.org_name,
            role,
            role_custom: role_custom.map(str::to_owned),
            external_ids: value.external_ids,
        }
    }
}

/// Contact entry for an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Contact value (email, phone, etc.).
    pub value: String,
    /// Description of the contact kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ValueObject for Contact {}

/// Full organization record.
///
/// Not typically embedded in exchanged certificates; events and sources carry
/// [`OrganizationRole`] back-references instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    /// Expanded name, e.g. "IBM" -> "International Business Machines".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_expanded: Option<String>,
    /// External identifiers in other systems.
    #[serde(rename = "externalIDs", skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<Vec<ExternalId>>,
    /// Organization website.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Contact information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<Contact>>,
    /// Organization location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Organization {
    pub fn new(id: OrganizationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            name_expanded: None,
            external_ids: None,
            url: None,
            description: None,
            contacts: None,
            location: None,
        }
    }
}

impl Entity for Organization {
    type Id = OrganizationId;

    fn id(&self) -> &OrganizationId {
        &self.id
    }
}
