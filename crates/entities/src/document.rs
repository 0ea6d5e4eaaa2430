//! Document file reference.

use serde::{Deserialize, Serialize};

use peach_core::{DocumentId, Entity};

use crate::enums::FileType;
use crate::metadata::MetadataItem;

/// Supporting documentation (certificates, receipts, audits, ...).
///
/// Owned by an `EacCertificate`; events point back at it by `doc_id` rather
/// than embedding it, to avoid duplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Unique within the owning certificate's document list.
    pub doc_id: DocumentId,
    /// Document URL or storage location.
    pub url: String,
    /// Type of document.
    pub file_type: FileType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Additional document metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<MetadataItem>>,
}

impl Document {
    pub fn new(doc_id: DocumentId, url: impl Into<String>, file_type: FileType) -> Self {
        Self {
            doc_id,
            url: url.into(),
            file_type,
            title: None,
            description: None,
            metadata: None,
        }
    }
}

impl Entity for Document {
    type Id = DocumentId;

    fn id(&self) -> &DocumentId {
        &self.doc_id
    }
}
