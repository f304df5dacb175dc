//! # API Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  "add-part --name Bolt --price abc ..."                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Parse Error? ───── FormError::InvalidPrice ─────┐               │  │
//! │  │         │                                        │               │  │
//! │  │         ▼                                        ▼               │  │
//! │  │  Rule Broken? ───── CoreError::Validation ───── ApiError ──────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Shell prints:  error [PARSE_ERROR]: price: 'abc' is not a valid amount │
//! │  JSON mode:     {"code": "PARSE_ERROR", "message": "..."}               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use stockroom_core::{CoreError, ValidationError};

use crate::forms::FormError;

/// Error returned from shell commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Part not found: 12"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for scripts
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Part or product id not in the catalog
    NotFound,

    /// Candidate broke a consistency rule
    ValidationError,

    /// Field text could not be read as a number or amount
    ParseError,

    /// Operation refused by a catalog rule (protected delete, last part)
    BusinessLogic,

    /// Unknown command or bad arguments
    InvalidCommand,

    /// Anything else
    Internal,
}

impl ErrorCode {
    /// Wire name of the code, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::ParseError => "PARSE_ERROR",
            ErrorCode::BusinessLogic => "BUSINESS_LOGIC",
            ErrorCode::InvalidCommand => "INVALID_COMMAND",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a business rule error.
    pub fn business(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BusinessLogic, message)
    }

    /// Creates an invalid command error.
    pub fn invalid_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidCommand, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::PartNotFound(id) => ApiError::not_found("Part", id),
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::DuplicatePartId(_) | CoreError::DuplicateProductId(_) => {
                // Ids come from the catalog's counters; a clash is a bug
                tracing::error!(error = %err, "Duplicate id reached the shell");
                ApiError::internal(err.to_string())
            }
            CoreError::ProductHasParts { .. } => ApiError::business(err.to_string()),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<FormError> for ApiError {
    fn from(err: FormError) -> Self {
        ApiError::new(ErrorCode::ParseError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{Money, PartId, ProductId};

    #[test]
    fn test_not_found_mapping() {
        let err: ApiError = CoreError::PartNotFound(PartId::new(12)).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Part not found: 12");

        let err: ApiError = CoreError::ProductNotFound(ProductId::new(3)).into();
        assert_eq!(err.message, "Product not found: 3");
    }

    #[test]
    fn test_validation_mapping_keeps_rule_message() {
        let err: ApiError = CoreError::Validation(ValidationError::PriceBelowPartsCost {
            price: Money::from_cents(500),
            parts_cost: Money::from_cents(1000),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(
            err.message,
            "product price must cover associated parts' total cost"
        );
    }

    #[test]
    fn test_protected_delete_is_business_logic() {
        let err: ApiError = CoreError::ProductHasParts {
            id: ProductId::new(2),
            count: 1,
        }
        .into();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
    }

    #[test]
    fn test_form_error_is_parse_error() {
        let err: ApiError = FormError::MissingField { field: "name" }.into();
        assert_eq!(err.code, ErrorCode::ParseError);
    }

    #[test]
    fn test_serializes_code_in_screaming_case() {
        let json = serde_json::to_string(&ApiError::invalid_command("nope")).unwrap();
        assert_eq!(json, r#"{"code":"INVALID_COMMAND","message":"nope"}"#);
    }

    #[test]
    fn test_display() {
        let err = ApiError::not_found("Part", 4);
        assert_eq!(err.to_string(), "[NOT_FOUND] Part not found: 4");
    }
}
