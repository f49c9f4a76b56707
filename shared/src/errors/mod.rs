//! Shared error response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Error codes shared by the API surface
pub mod error_codes {
    pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
    pub const INTERNAL: &str = "INTERNAL";
    pub const NOT_FOUND: &str = "NOT_FOUND";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serialization_skips_empty_details() {
        let response = ErrorResponse::new(error_codes::INVALID_ARGUMENT, "missing argument");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["error"], "INVALID_ARGUMENT");
        assert_eq!(json["message"], "missing argument");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_add_detail() {
        let response = ErrorResponse::new(error_codes::INTERNAL, "boom").add_detail("field", "purpose");
        let details = response.details.unwrap();
        assert_eq!(details["field"], serde_json::json!("purpose"));
    }
}
