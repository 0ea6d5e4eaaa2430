//! Certificate lifecycle events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use peach_core::{DocumentId, Entity, EventId, ValueObject};

use crate::enums::{EacEventTargetType, EacEventType};
use crate::location::Location;
use crate::metadata::MetadataItem;
use crate::organization::OrganizationRole;

/// When an event occurred. Instants, not calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDates {
    /// ISO 8601 datetime, e.g. "2024-06-15T14:30:00Z".
    pub start: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

impl EventDates {
    /// Point-in-time event.
    pub fn at(start: DateTime<Utc>) -> Self {
        Self { start, end: None }
    }

    /// Event spanning an interval.
    pub fn spanning(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }
}

impl ValueObject for EventDates {}

/// Something that happened to a certificate, production source, or physical
/// product.
///
/// Events reference documents by id (`document_ids`, matched against
/// `Document::doc_id` in the owning certificate) to avoid duplication; that
/// every reference resolves is a consumer-enforced invariant, not a
/// structural one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EacEvent {
    /// Unique event identifier.
    pub id: EventId,
    /// Type of event, e.g. "REDEMPTION".
    pub e_type: EacEventType,

    /// What this event is about (certificate, product, or source).
    pub e_target: EacEventTargetType,
    /// Ids of what this event is about. The referenced entity kind follows
    /// `e_target`, so these stay plain strings; a list because one event
    /// (e.g. a REDEMPTION) may point at multiple certificates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e_target_id: Option<Vec<String>>,

    /// When the event occurred.
    pub dates: EventDates,
    /// Where the event occurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Notes or description of the event (e.g. redemption reason).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Quick-access value of the event, e.g. the rating or label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Organizations involved in this event.
    pub organizations: Vec<OrganizationRole>,
    /// Documents that prove this event; references `Document::doc_id` in the
    /// owning certificate's document list.
    pub document_ids: Vec<DocumentId>,

    /// Additional event metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<MetadataItem>>,
}

impl EacEvent {
    pub fn new(
        id: EventId,
        e_type: EacEventType,
        e_target: EacEventTargetType,
        dates: EventDates,
    ) -> Self {
        Self {
            id,
            e_type,
            e_target,
            e_target_id: None,
            dates,
            location: None,
            notes: None,
            value: None,
            organizations: Vec::new(),
            document_ids: Vec::new(),
            metadata: None,
        }
    }
}

impl Entity for EacEvent {
    type Id = EventId;

    fn id(&self) -> &EventId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::organization::OrgRole;
    use peach_core::OrganizationId;

    fn issuance_start() -> DateTime<Utc> {
        "2024-06-15T14:30:00Z".parse().unwrap()
    }

    #[test]
    fn wire_names_use_e_prefix() {
        let event = EacEvent::new(
            EventId::new("e1"),
            EacEventType::Issuance,
            EacEventTargetType::Eac,
            EventDates::at(issuance_start()),
        );

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["eType"], "ISSUANCE");
        assert_eq!(json["eTarget"], "EAC");
        assert_eq!(json["dates"]["start"], "2024-06-15T14:30:00Z");
        assert!(json.get("eTargetId").is_none());
        assert!(json["dates"].get("end").is_none());
    }

    #[test]
    fn redemption_may_target_multiple_certificates() {
        let event = EacEvent {
            e_target_id: Some(vec!["c1".to_string(), "c2".to_string()]),
            notes: Some("Retired for FY24 reporting".to_string()),
            ..EacEvent::new(
                EventId::new("e2"),
                EacEventType::Redemption,
                EacEventTargetType::Eac,
                EventDates::at(issuance_start()),
            )
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: EacEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
        assert_eq!(back.e_target_id.as_deref().map(<[String]>::len), Some(2));
    }

    #[test]
    fn full_event_round_trips() {
        let event = EacEvent {
            location: Some(Location::new("DK")),
            value: Some("A+".to_string()),
            organizations: vec![OrganizationRole::new(
                OrganizationId::new("o3"),
                "Nordic Ratings",
                OrgRole::MrvRatingAgency,
            )],
            document_ids: vec![DocumentId::new("d7")],
            metadata: Some(vec![MetadataItem::new("scheme", "Scheme").with_value("GO")]),
            ..EacEvent::new(
                EventId::new("e3"),
                EacEventType::MrvRating,
                EacEventTargetType::ProductionSource,
                EventDates::spanning(issuance_start(), "2024-06-16T10:00:00Z".parse().unwrap()),
            )
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: EacEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
