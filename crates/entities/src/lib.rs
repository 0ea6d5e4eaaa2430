//! PEACH Protocol entity model.
//!
//! Shared vocabulary of records for exchanging Environmental Attribute
//! Certificates (EACs: renewable energy certificates, carbon credits, ...),
//! implemented purely as inert data shapes: no IO, no storage, no transport.
//! Producers and validators of certificate data serialize these records;
//! field names and enum strings are the wire contract.

pub mod amount;
pub mod certificate;
pub mod document;
pub mod emissions;
pub mod enums;
pub mod event;
pub mod external_id;
pub mod location;
pub mod metadata;
pub mod organization;
pub mod settings;
pub mod source;

pub use amount::Amount;
pub use certificate::EacCertificate;
pub use document::Document;
pub use emissions::EmissionsData;
pub use enums::{EacEventTargetType, EacEventType, EacType, FileType};
pub use event::{EacEvent, EventDates};
pub use external_id::ExternalId;
pub use location::Location;
pub use metadata::MetadataItem;
pub use organization::{Contact, OrgRole, Organization, OrganizationRole};
pub use settings::EacTypeSettings;
pub use source::ProductionSource;

pub use peach_core::{
    CertificateId, DocumentId, EventId, NonEmpty, OrganizationId, ProductionSourceId,
};
