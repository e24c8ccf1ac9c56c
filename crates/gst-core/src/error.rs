//! # Error Types
//!
//! Domain-specific error types for gst-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gst-core errors (this file)                                           │
//! │  ├── CoreError        - Line item / form rule violations               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  gst-invoicer errors (app crate)                                       │
//! │  └── AppError         - What the caller sees (serialized)              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → CLI / frontend         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note that the calculator itself never fails: totals and words are total
//! functions. Errors only come from editing and submitting the form.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Form and line item rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No line item carries the requested id.
    #[error("Line item not found: {0}")]
    ItemNotFound(u32),

    /// Two rows share an id (only possible in hand-built or deserialized lists).
    #[error("Duplicate line item id: {0}")]
    DuplicateItemId(u32),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., invalid date, invalid GSTIN).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CoreError::ItemNotFound(7).to_string(), "Line item not found: 7");
        assert_eq!(
            CoreError::DuplicateItemId(3).to_string(),
            "Duplicate line item id: 3"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "buyerName".to_string(),
        };
        assert_eq!(err.to_string(), "buyerName is required");

        let err = ValidationError::OutOfRange {
            field: "cgstRate".to_string(),
            min: 0,
            max: 100,
        };
        assert_eq!(err.to_string(), "cgstRate must be between 0 and 100");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "buyerName".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
