//! Generic key-value metadata.

use serde::{Deserialize, Serialize};

use peach_core::ValueObject;

/// Extension slot for entities that need custom properties.
///
/// `value_type` is a loose hint ("string", "number", "boolean", "date",
/// "enum") rather than a tagged union; keeping it loose is the schema's
/// extensibility/strictness tradeoff. `options` is only meaningful when the
/// hint denotes an enumerated/choice kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataItem {
    /// Metadata key.
    pub key: String,
    /// Human-readable label for display.
    pub label: String,
    /// Metadata value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Type hint for `value`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    /// Valid options when the type hint is enum/multiple-choice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Whether this metadata is required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Description of what this metadata represents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MetadataItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            value: None,
            value_type: None,
            options: None,
            required: None,
            description: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl ValueObject for MetadataItem {}
