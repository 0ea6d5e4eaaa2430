//! Quantity measurement.

use serde::{Deserialize, Serialize};

use peach_core::{DomainError, DomainResult, ValueObject};

/// A measured quantity with unit and optional conversion info.
///
/// The quantity is strictly positive. `new` is the only way to build one and
/// deserialization re-validates through the same check, so a zero, negative,
/// or non-finite `Amount` cannot exist.
///
/// "At most one primary amount per certificate" is a convention of the
/// exchange, not a rule of this type; see
/// [`EacCertificate::primary_amount`](crate::EacCertificate::primary_amount).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawAmount")]
pub struct Amount {
    /// Numerical quantity (> 0).
    amount: f64,
    /// Unit of measurement.
    unit: String,
    /// Conversion factor from the primary unit (if this is a secondary unit).
    #[serde(skip_serializing_if = "Option::is_none")]
    conversion_factor: Option<f64>,
    /// Units of the conversion factor (unit per primary-amount unit).
    #[serde(skip_serializing_if = "Option::is_none")]
    conversion_factor_units: Option<String>,
    /// Explanation of conversion methodology.
    #[serde(skip_serializing_if = "Option::is_none")]
    conversion_notes: Option<String>,
    /// Whether this is the primary unit for the certificate type.
    #[serde(skip_serializing_if = "Option::is_none")]
    is_primary: Option<bool>,
}

impl Amount {
    /// Validate and build a quantity.
    ///
    /// Fails unless `amount` is finite and strictly positive.
    pub fn new(amount: f64, unit: impl Into<String>) -> DomainResult<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(DomainError::validation(format!(
                "amount must be strictly positive, got {amount}"
            )));
        }
        Ok(Self {
            amount,
            unit: unit.into(),
            conversion_factor: None,
            conversion_factor_units: None,
            conversion_notes: None,
            is_primary: None,
        })
    }

    /// Mark this as the primary quantity for the certificate type.
    pub fn primary(mut self) -> Self {
        self.is_primary = Some(true);
        self
    }

    /// Attach the conversion relating this quantity to the primary one.
    pub fn with_conversion(mut self, factor: f64, units: impl Into<String>) -> Self {
        self.conversion_factor = Some(factor);
        self.conversion_factor_units = Some(units.into());
        self
    }

    /// Attach a note on the conversion methodology.
    pub fn with_conversion_notes(mut self, notes: impl Into<String>) -> Self {
        self.conversion_notes = Some(notes.into());
        self
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn conversion_factor(&self) -> Option<f64> {
        self.conversion_factor
    }

    pub fn conversion_factor_units(&self) -> Option<&str> {
        self.conversion_factor_units.as_deref()
    }

    pub fn conversion_notes(&self) -> Option<&str> {
        self.conversion_notes.as_deref()
    }

    /// Whether this is the primary unit for the certificate type.
    ///
    /// Absent on the wire means not primary.
    pub fn is_primary(&self) -> bool {
        self.is_primary.unwrap_or(false)
    }
}

impl ValueObject for Amount {}

/// Wire shape of [`Amount`] before the positivity check.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAmount {
    amount: f64,
    unit: String,
    conversion_factor: Option<f64>,
    conversion_factor_units: Option<String>,
    conversion_notes: Option<String>,
    is_primary: Option<bool>,
}

impl TryFrom<RawAmount> for Amount {
    type Error = DomainError;

    fn try_from(raw: RawAmount) -> Result<Self, Self::Error> {
        let mut amount = Amount::new(raw.amount, raw.unit)?;
        amount.conversion_factor = raw.conversion_factor;
        amount.conversion_factor_units = raw.conversion_factor_units;
        amount.conversion_notes = raw.conversion_notes;
        amount.is_primary = raw.is_primary;
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_positive_quantity() {
        let amount = Amount::new(100.0, "MWh").unwrap();
        assert_eq!(amount.amount(), 100.0);
        assert_eq!(amount.unit(), "MWh");
        assert!(!amount.is_primary());
    }

    #[test]
    fn new_rejects_zero_and_negative() {
        for bad in [0.0, -1.0, -1e9] {
            let err = Amount::new(bad, "MWh").unwrap_err();
            match err {
                DomainError::Validation(_) => {}
                _ => panic!("Expected Validation error for {bad}"),
            }
        }
    }

    #[test]
    fn new_rejects_non_finite() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(Amount::new(bad, "MWh").is_err());
        }
    }

    #[test]
    fn deserialization_enforces_positivity() {
        let result: Result<Amount, _> =
            serde_json::from_str(r#"{"amount": -5.0, "unit": "MWh"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        let amount = Amount::new(27.5, "MMBtu")
            .unwrap()
            .with_conversion(0.29307, "MWh/MMBtu")
            .with_conversion_notes("HHV basis");

        let json = serde_json::to_value(&amount).unwrap();
        assert_eq!(json["conversionFactor"], 0.29307);
        assert_eq!(json["conversionFactorUnits"], "MWh/MMBtu");
        assert_eq!(json["conversionNotes"], "HHV basis");
        assert!(json.get("isPrimary").is_none());
    }

    #[test]
    fn primary_flag_round_trips() {
        let amount = Amount::new(100.0, "MWh").unwrap().primary();
        let json = serde_json::to_string(&amount).unwrap();
        assert!(json.contains("\"isPrimary\":true"));

        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
        assert!(back.is_primary());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                // Use deterministic seed for CI reproducibility
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: every finite positive quantity is accepted and
            /// round-trips through JSON unchanged.
            #[test]
            fn positive_quantities_round_trip(
                value in 1e-9f64..1e15f64,
                unit in "[A-Za-z/]{1,8}"
            ) {
                let amount = Amount::new(value, unit.clone()).unwrap();
                let json = serde_json::to_string(&amount).unwrap();
                let back: Amount = serde_json::from_str(&json).unwrap();
                prop_assert_eq!(back, amount);
            }

            /// Property: non-positive quantities are always rejected.
            #[test]
            fn non_positive_quantities_are_rejected(value in -1e15f64..=0.0f64) {
                prop_assert!(Amount::new(value, "MWh").is_err());
            }
        }
    }
}
