//! Wire-level error response structures

use serde::{Deserialize, Serialize};

/// One field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Localized field label (raw field name when no label is declared)
    pub attribute: String,

    /// Identifier of the rule that failed
    pub tag: String,

    /// Localized explanation
    pub message: String,
}

impl FieldViolation {
    pub fn new(
        attribute: impl Into<String>,
        tag: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            attribute: attribute.into(),
            tag: tag.into(),
            message: message.into(),
        }
    }
}

/// Standard error response body used across all API endpoints
///
/// With a non-empty `details` list this is the detailed validation response;
/// an empty list is left out of the JSON entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Taxonomy error code
    pub code: String,

    /// Fixed message for the code
    pub message: String,

    /// Per-field violations, in field declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldViolation>,

    /// HTTP status, never serialized
    #[serde(skip)]
    pub status: u16,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Vec::new(),
            status,
        }
    }

    /// Attach field violations
    pub fn with_details(mut self, details: Vec<FieldViolation>) -> Self {
        self.details = details;
        self
    }

    /// Whether the failure is on the server side
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}
