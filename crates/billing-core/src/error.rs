//! # Error Types
//!
//! Domain errors for billing-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  billing-core (this file)                                              │
//! │  └── ValidationError  - Rejected constructor input                     │
//! │                                                                         │
//! │  billing-demos                                                         │
//! │  ├── ConfigError      - Demo config could not be loaded                │
//! │  └── DemoError        - A self-check failed, or one of the above       │
//! │                                                                         │
//! │  Flow: ValidationError → DemoError → main() → non-zero exit            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculations themselves are total: once a `Percent`, `Product` or
//! `Item` exists, every bill total and VAT figure can be computed. All
//! fallibility is pushed into construction.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when a value handed to a constructor breaks a domain invariant,
/// e.g. a 120% coupon or a product with a negative price.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        value: i64,
    },

    /// Value must not be negative.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: String, value: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;
