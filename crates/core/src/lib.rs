//! `peach-core` — foundation building blocks for the PEACH entity model.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! nominal identifiers, the error model, marker traits, and the non-empty
//! sequence wrapper the root aggregate relies on.

pub mod entity;
pub mod error;
pub mod id;
pub mod nonempty;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CertificateId, DocumentId, EventId, OrganizationId, ProductionSourceId};
pub use nonempty::NonEmpty;
pub use value_object::ValueObject;
