//! # Validation Module
//!
//! Range checks run by the domain constructors.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Percent::new(30) ──► validate_percent ──► Ok(Percent)                 │
//! │                                                                         │
//! │  Product::new / Liquor::new / Tobacco::new                             │
//! │        └──────────► validate_price_cents ──► Ok(..)                    │
//! │                                                                         │
//! │  After construction, totals and VAT never fail.                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantities are `u32`, so "negative quantity" cannot be expressed and has
//! no validator.

use crate::error::{ValidationError, ValidationResult};

/// Largest allowed percentage.
pub const MAX_PERCENT: u32 = 100;

/// Validates a whole-number percentage.
///
/// ## Rules
/// - Must be between 0 and 100 inclusive
///
/// ```rust
/// use billing_core::validation::validate_percent;
///
/// assert!(validate_percent(0).is_ok());
/// assert!(validate_percent(100).is_ok());
/// assert!(validate_percent(101).is_err());
/// ```
pub fn validate_percent(value: u32) -> ValidationResult<()> {
    if value > MAX_PERCENT {
        return Err(ValidationError::OutOfRange {
            field: "percent".to_string(),
            min: 0,
            max: MAX_PERCENT as i64,
            value: value as i64,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
            value: cents,
        });
    }

    Ok(())
}
