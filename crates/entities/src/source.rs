//! Production source: the origin of an environmental attribute.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use peach_core::{DocumentId, Entity, EventId, ProductionSourceId};

use crate::enums::EacType;
use crate::external_id::ExternalId;
use crate::location::Location;
use crate::metadata::MetadataItem;
use crate::organization::OrganizationRole;

/// The facility or project where the environmental attribute was generated.
///
/// When embedded in a certificate this carries descriptive information only.
/// `technology`, `operation_start_date`, and `labels` are cached projections
/// of facts that properly live on events and certificates, denormalized for
/// read convenience; they can go stale and nothing reconciles them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionSource {
    pub id: ProductionSourceId,
    /// External identifiers in registries.
    #[serde(rename = "externalIDs", skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<Vec<ExternalId>>,
    /// Certificate types this source produces.
    pub eac_types: Vec<EacType>,

    /// Facility/project name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Key organizations (owner, operator).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizations: Option<Vec<OrganizationRole>>,

    /// Technology/feedstock type, e.g. "Solar", "Wind", "Biomass".
    pub technology: Vec<String>,

    /// When the facility became operational. Calendar date, no time of day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_start_date: Option<NaiveDate>,
    /// Certifications and labels, e.g. "Green-e".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,

    /// Weak references to connected sources (carbon credit projects link
    /// related projects). May form cycles; consumers resolve them through an
    /// external index, never by embedding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_production_sources: Option<Vec<ProductionSourceId>>,
    /// Documents connected to the source beyond the certificates'.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_ids: Option<Vec<DocumentId>>,
    /// All relevant events of this source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ids: Option<Vec<EventId>>,
    /// Additional source metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<MetadataItem>>,
}

impl ProductionSource {
    /// Minimal source: id plus the certificate types it produces.
    pub fn new(id: ProductionSourceId, eac_types: Vec<EacType>) -> Self {
        Self {
            id,
            external_ids: None,
            eac_types,
            name: None,
            description: None,
            location: None,
            organizations: None,
            technology: Vec::new(),
            operation_start_date: None,
            labels: None,
            related_production_sources: None,
            document_ids: None,
            event_ids: None,
            metadata: None,
        }
    }
}

impl Entity for ProductionSource {
    type Id = ProductionSourceId;

    fn id(&self) -> &ProductionSourceId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_start_date_is_calendar_only() {
        let source = ProductionSource {
            operation_start_date: Some(NaiveDate::from_ymd_opt(2012, 3, 1).unwrap()),
            technology: vec!["Wind".to_string()],
            ..ProductionSource::new(ProductionSourceId::new("ps1"), vec![EacType::Rec])
        };

        let json = serde_json::to_value(&source).unwrap();
        // Date, not instant: no time-of-day component on the wire.
        assert_eq!(json["operationStartDate"], "2012-03-01");

        let back: ProductionSource = serde_json::from_value(json).unwrap();
        assert_eq!(back, source);
    }

    #[test]
    fn related_sources_stay_id_references() {
        let source = ProductionSource {
            related_production_sources: Some(vec![
                ProductionSourceId::new("ps2"),
                ProductionSourceId::new("ps3"),
            ]),
            ..ProductionSource::new(ProductionSourceId::new("ps1"), vec![EacType::Cc])
        };

        let json = serde_json::to_value(&source).unwrap();
        assert_eq!(
            json["relatedProductionSources"],
            serde_json::json!(["ps2", "ps3"])
        );
    }

    #[test]
    fn minimal_source_omits_optional_keys() {
        let source = ProductionSource::new(ProductionSourceId::new("ps1"), vec![EacType::Rng]);
        let json = serde_json::to_value(&source).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(object.contains_key("id"));
        assert!(object.contains_key("eacTypes"));
        assert!(object.contains_key("technology"));
    }
}
