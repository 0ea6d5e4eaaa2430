//! The Environmental Attribute Certificate root aggregate.

use serde::{Deserialize, Serialize};

use peach_core::{CertificateId, DocumentId, Entity, EventId, NonEmpty};

use crate::amount::Amount;
use crate::document::Document;
use crate::emissions::EmissionsData;
use crate::enums::EacType;
use crate::event::EacEvent;
use crate::external_id::ExternalId;
use crate::metadata::MetadataItem;
use crate::source::ProductionSource;

/// A complete certificate with all related data: the unit of exchange.
///
/// Certificates are immutable snapshots; a new version is a new complete
/// record, never an edit. At least one amount, one document, and one event
/// are required, and the `NonEmpty` fields carry that guarantee in the type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EacCertificate {
    // === Identity ===
    pub id: CertificateId,
    /// Certificate type (REC, RNG, SAF, ...).
    #[serde(rename = "type")]
    pub eac_type: EacType,
    /// Registry subtype, e.g. "GO" or "I-REC"; see
    /// [`EacTypeSettings`](crate::EacTypeSettings) for the known values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type2: Option<String>,
    /// External identifiers for this certificate in registries and other
    /// systems.
    #[serde(rename = "externalIDs", skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<Vec<ExternalId>>,

    // === Quantities ===
    /// Quantities measured; at least one.
    pub amounts: NonEmpty<Amount>,
    /// Emissions data (carbon intensity, emissions factor).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emissions: Option<Vec<EmissionsData>>,

    // === Relationships (embedded objects) ===
    /// Production source where this certificate originated.
    pub production_source: ProductionSource,
    /// Technology it was produced with, e.g. "WIND"; see
    /// [`EacTypeSettings`](crate::EacTypeSettings).
    pub production_tech: String,

    /// All documents related to this certificate; at least one.
    pub documents: NonEmpty<Document>,

    /// Lifecycle events; at least one. Events reference documents via
    /// `document_ids` (see [`Document::doc_id`]).
    pub events: NonEmpty<EacEvent>,

    /// Weak links to other certificates, useful for chain-of-custody. May be
    /// cyclic; consumers resolve them through an external index, never by
    /// embedding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_certificates: Option<Vec<CertificateId>>,

    /// Related URLs, e.g. public proofs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,
    /// Additional certificate metadata; prefer enriching events and
    /// documents over adding here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<MetadataItem>>,
}

impl EacCertificate {
    /// Resolve a document reference within this certificate.
    pub fn document(&self, id: &DocumentId) -> Option<&Document> {
        self.documents.iter().find(|document| &document.doc_id == id)
    }

    /// Look up an owned event by id.
    pub fn event(&self, id: &EventId) -> Option<&EacEvent> {
        self.events.iter().find(|event| &event.id == id)
    }

    /// First quantity flagged as primary, if any.
    ///
    /// "Exactly one primary amount" is a convention of the exchange, not a
    /// structural rule; duplicates are not rejected and the first one wins.
    pub fn primary_amount(&self) -> Option<&Amount> {
        self.amounts.iter().find(|amount| amount.is_primary())
    }

    /// Event document references that do not resolve to an owned document.
    ///
    /// Empty for a well-formed certificate. Deduplicated, in first-seen
    /// order.
    pub fn unresolved_document_ids(&self) -> Vec<&DocumentId> {
        let mut unresolved: Vec<&DocumentId> = Vec::new();
        for event in &self.events {
            for doc_id in &event.document_ids {
                if self.document(doc_id).is_none() && !unresolved.contains(&doc_id) {
                    unresolved.push(doc_id);
                }
            }
        }
        unresolved
    }
}

impl Entity for EacCertificate {
    type Id = CertificateId;

    fn id(&self) -> &CertificateId {
        &self.id
    }
}
