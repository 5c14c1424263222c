//! # billing-core: Three Patterns, Two Styles Each
//!
//! Decorator, Strategy and Visitor over a toy billing domain, each written
//! once with closures and enums (`fp`) and once with traits and wrapper
//! types (`oop`). Both halves of every pair compute identical results.
//!
//! ## Crate Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        billing-core                                     │
//! │                                                                         │
//! │   ┌───────────┐  ┌───────────┐  ┌───────────┐                          │
//! │   │ decorator │  │ strategy  │  │  visitor  │   patterns               │
//! │   │  fp  oop  │  │  fp  oop  │  │  fp  oop  │                          │
//! │   └─────┬─────┘  └─────┬─────┘  └─────┬─────┘                          │
//! │         │              │              │                                 │
//! │   ┌─────▼──────────────▼──────────────▼─────┐                          │
//! │   │   types   money   validation   error    │   shared domain          │
//! │   └─────────────────────────────────────────┘                          │
//! │                                                                         │
//! │   NO I/O • integer money • validated constructors                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`decorator`] - `add_three` wrapped with logging and timing
//! - [`strategy`] - bill totals with a swappable discount policy
//! - [`visitor`] - net / VAT / gross price for liquor and tobacco
//! - [`types`] - `Percent`, `Product`, `Item`, `Goods`, `VatRates`
//! - [`money`] - `Money` with integer, round-half-up arithmetic
//! - [`validation`] - range checks used by constructors
//! - [`error`] - `ValidationError`
//!
//! ## Example
//!
//! ```rust
//! use billing_core::strategy::oop::{Bill, HappyHourDiscount};
//! use billing_core::{Item, Money, Product};
//!
//! let items = vec![
//!     Item::new(Product::new(Money::from_cents(1000))?, 5),
//!     Item::new(Product::new(Money::from_cents(10000))?, 3),
//! ];
//!
//! let bill = Bill::with_discount(items, HappyHourDiscount);
//! assert_eq!(bill.total_price(), Money::from_cents(17500));
//! # Ok::<(), billing_core::ValidationError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod decorator;
pub mod error;
pub mod money;
pub mod strategy;
pub mod types;
pub mod validation;
pub mod visitor;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use types::*;
