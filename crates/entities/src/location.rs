//! Geographic location.

use serde::{Deserialize, Serialize};

use peach_core::ValueObject;

/// Geographic location with multiple levels of specificity.
///
/// Only `country` is required. There is no cross-field invariant: a
/// coordinate pair without an address, or a region without a subdivision,
/// is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// ISO 3166-1 alpha-2, e.g. "US", "DE", "JP".
    pub country: String,
    /// ISO 3166-2 subdivision code for states or provinces, e.g. "CA", "BY", "ON".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdivision: Option<String>,
    /// Market/grid/network region OR admin region - context-dependent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Street + number + city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    /// Decimal latitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Decimal longitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Geospatial boundary data (Shapefile, KML, GeoJSON).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_bounds: Option<String>,
}

impl Location {
    /// Country-only location; refine by filling in the optional fields.
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            subdivision: None,
            region: None,
            address: None,
            zip_code: None,
            latitude: None,
            longitude: None,
            geo_bounds: None,
        }
    }
}

impl ValueObject for Location {}
