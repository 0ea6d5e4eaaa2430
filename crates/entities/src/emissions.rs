//! Carbon intensity and emissions factor information.

use serde::{Deserialize, Serialize};

use peach_core::ValueObject;

/// Emissions-related measurements and methodology notes.
///
/// By convention, `emissions_factor` multiplied by the corresponding
/// certificate quantity reconciles with `carbon_intensity`; nothing checks
/// that here, and mismatched data is a consumer-side finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionsData {
    /// Final carbon intensity value.
    pub carbon_intensity: f64,
    /// Unit of carbon intensity, e.g. "tCO2e", "tCO2e/MMBTU".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci_unit: Option<String>,
    /// Notes on carbon intensity methodology.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci_notes: Option<String>,
    /// Emissions factor (multiplied by amount to get carbon intensity).
    pub emissions_factor: f64,
    /// Unit of emissions factor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ef_unit: Option<String>,
    /// Notes on emissions factor methodology.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ef_notes: Option<String>,
}

impl EmissionsData {
    pub fn new(carbon_intensity: f64, emissions_factor: f64) -> Self {
        Self {
            carbon_intensity,
            ci_unit: None,
            ci_notes: None,
            emissions_factor,
            ef_unit: None,
            ef_notes: None,
        }
    }
}

impl ValueObject for EmissionsData {}
