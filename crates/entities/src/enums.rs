//! Enumerations shared across the entity model.
//!
//! Variant wire strings are part of the exchange contract and must
//! serialize/deserialize exactly as declared. Unknown strings do not
//! deserialize; the enums are closed.

use serde::{Deserialize, Serialize};

/// Certificate type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EacType {
    /// Renewable Energy Certificate.
    Rec,
    /// Renewable Thermal Certificate.
    Rtc,
    /// Renewable Natural Gas.
    Rng,
    /// Sustainable Aviation Fuel.
    Saf,
    /// Carbon Credit.
    Cc,
}

impl EacType {
    pub const ALL: [EacType; 5] = [
        EacType::Rec,
        EacType::Rtc,
        EacType::Rng,
        EacType::Saf,
        EacType::Cc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EacType::Rec => "REC",
            EacType::Rtc => "RTC",
            EacType::Rng => "RNG",
            EacType::Saf => "SAF",
            EacType::Cc => "CC",
        }
    }
}

impl core::fmt::Display for EacType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an event is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EacEventTargetType {
    /// Event happened to the certificate.
    Eac,
    /// Event happened to the physical product.
    Product,
    /// Event happened to the production source.
    #[serde(rename = "PSOURCE")]
    ProductionSource,
}

impl EacEventTargetType {
    pub fn as_str(self) -> &'static str {
        match self {
            EacEventTargetType::Eac => "EAC",
            EacEventTargetType::Product => "PRODUCT",
            EacEventTargetType::ProductionSource => "PSOURCE",
        }
    }
}

impl core::fmt::Display for EacEventTargetType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of lifecycle event.
///
/// The MRV wire strings are run together without underscores (and
/// verification shares its leading V: `MRVERIFICATION`), so those variants
/// carry explicit renames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EacEventType {
    // Lifecycle events
    Creation,
    Activation,
    Pause,
    Suspension,
    Termination,
    Production,

    // Certificate events
    Issuance,
    Redemption,
    Transfer,

    // Chain-of-custody events
    Transport,
    Injection,

    // MRV events
    #[serde(rename = "MRVAUDIT")]
    MrvAudit,
    #[serde(rename = "MRVLABTEST")]
    MrvLabTest,
    #[serde(rename = "MRVERIFICATION")]
    MrvVerification,
    #[serde(rename = "MRVVALIDATION")]
    MrvValidation,
    #[serde(rename = "MRVRATING")]
    MrvRating,
    #[serde(rename = "MRVLABELING")]
    MrvLabeling,

    Other,
}

impl EacEventType {
    pub const ALL: [EacEventType; 18] = [
        EacEventType::Creation,
        EacEventType::Activation,
        EacEventType::Pause,
        EacEventType::Suspension,
        EacEventType::Termination,
        EacEventType::Production,
        EacEventType::Issuance,
        EacEventType::Redemption,
        EacEventType::Transfer,
        EacEventType::Transport,
        EacEventType::Injection,
        EacEventType::MrvAudit,
        EacEventType::MrvLabTest,
        EacEventType::MrvVerification,
        EacEventType::MrvValidation,
        EacEventType::MrvRating,
        EacEventType::MrvLabeling,
        EacEventType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EacEventType::Creation => "CREATION",
            EacEventType::Activation => "ACTIVATION",
            EacEventType::Pause => "PAUSE",
            EacEventType::Suspension => "SUSPENSION",
            EacEventType::Termination => "TERMINATION",
            EacEventType::Production => "PRODUCTION",
            EacEventType::Issuance => "ISSUANCE",
            EacEventType::Redemption => "REDEMPTION",
            EacEventType::Transfer => "TRANSFER",
            EacEventType::Transport => "TRANSPORT",
            EacEventType::Injection => "INJECTION",
            EacEventType::MrvAudit => "MRVAUDIT",
            EacEventType::MrvLabTest => "MRVLABTEST",
            EacEventType::MrvVerification => "MRVERIFICATION",
            EacEventType::MrvValidation => "MRVVALIDATION",
            EacEventType::MrvRating => "MRVRATING",
            EacEventType::MrvLabeling => "MRVLABELING",
            EacEventType::Other => "OTHER",
        }
    }
}

impl core::fmt::Display for EacEventType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileType {
    Certificate,
    /// Proof of Sustainability.
    Pos,
    Contract,
    Audit,
    #[serde(rename = "LABTEST")]
    LabTest,
    Consignment,
    Image,
}

impl FileType {
    pub const ALL: [FileType; 7] = [
        FileType::Certificate,
        FileType::Pos,
        FileType::Contract,
        FileType::Audit,
        FileType::LabTest,
        FileType::Consignment,
        FileType::Image,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FileType::Certificate => "CERTIFICATE",
            FileType::Pos => "POS",
            FileType::Contract => "CONTRACT",
            FileType::Audit => "AUDIT",
            FileType::LabTest => "LABTEST",
            FileType::Consignment => "CONSIGNMENT",
            FileType::Image => "IMAGE",
        }
    }
}

impl core::fmt::Display for FileType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire_string<T: Serialize>(value: &T) -> String {
        match serde_json::to_value(value).unwrap() {
            serde_json::Value::String(s) => s,
            other => panic!("Expected a string wire form, got {other}"),
        }
    }

    #[test]
    fn eac_type_round_trips_exact_wire_strings() {
        for eac_type in EacType::ALL {
            let wire = wire_string(&eac_type);
            assert_eq!(wire, eac_type.as_str());

            let back: EacType = serde_json::from_value(serde_json::json!(wire)).unwrap();
            assert_eq!(back, eac_type);
        }
    }

    #[test]
    fn event_type_round_trips_exact_wire_strings() {
        for event_type in EacEventType::ALL {
            let wire = wire_string(&event_type);
            assert_eq!(wire, event_type.as_str());

            let back: EacEventType = serde_json::from_value(serde_json::json!(wire)).unwrap();
            assert_eq!(back, event_type);
        }
    }

    #[test]
    fn mrv_event_strings_have_no_underscores() {
        // The MRV family is run together on the wire, including the shared V
        // in MRVERIFICATION.
        assert_eq!(EacEventType::MrvAudit.as_str(), "MRVAUDIT");
        assert_eq!(EacEventType::MrvVerification.as_str(), "MRVERIFICATION");
        assert_eq!(EacEventType::MrvLabeling.as_str(), "MRVLABELING");
    }

    #[test]
    fn target_type_round_trips_exact_wire_strings() {
        for target in [
            EacEventTargetType::Eac,
            EacEventTargetType::Product,
            EacEventTargetType::ProductionSource,
        ] {
            let wire = wire_string(&target);
            assert_eq!(wire, target.as_str());

            let back: EacEventTargetType =
                serde_json::from_value(serde_json::json!(wire)).unwrap();
            assert_eq!(back, target);
        }
    }

    #[test]
    fn file_type_round_trips_exact_wire_strings() {
        for file_type in FileType::ALL {
            let wire = wire_string(&file_type);
            assert_eq!(wire, file_type.as_str());

            let back: FileType = serde_json::from_value(serde_json::json!(wire)).unwrap();
            assert_eq!(back, file_type);
        }
    }

    #[test]
    fn unknown_enum_string_is_rejected() {
        let result: Result<EacType, _> = serde_json::from_str("\"NFT\"");
        assert!(result.is_err());
    }
}
