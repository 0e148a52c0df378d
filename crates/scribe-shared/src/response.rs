//! Error body returned by every failing endpoint.

use serde::{Deserialize, Serialize};

/// `{"error": "<message>"}` - a single human-readable string, no codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    // Common error constructors
    pub fn malformed_identifier() -> Self {
        Self::new("Malformed Identifier")
    }

    pub fn unauthorized() -> Self {
        Self::new("Unauthorized")
    }

    pub fn not_found(entity: &str) -> Self {
        Self::new(format!("{} Not Found", entity))
    }

    pub fn already_taken(field: &str) -> Self {
        Self::new(format!("{} Already Taken", field))
    }

    pub fn internal_error() -> Self {
        Self::new("Internal Server Error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_single_error_field() {
        let body = serde_json::to_value(ErrorResponse::already_taken("Email")).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Email Already Taken" }));
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ErrorResponse::not_found("Post").error, "Post Not Found");
    }
}
