//! Discount policies as functions.
//!
//! ```rust
//! use billing_core::money::Money;
//! use billing_core::strategy::fp::{coupon_discount, happy_hour_discount, total_price};
//! use billing_core::types::{Item, Percent, Product};
//!
//! let items = vec![
//!     Item::new(Product::new(Money::from_cents(1000))?, 5),
//!     Item::new(Product::new(Money::from_cents(10000))?, 3),
//! ];
//!
//! assert_eq!(total_price(&items, happy_hour_discount).cents(), 17500);
//! assert_eq!(total_price(&items, coupon_discount(Percent::new(30)?)).cents(), 24500);
//! # Ok::<(), billing_core::ValidationError>(())
//! ```

use tracing::debug;

use crate::money::Money;
use crate::types::{Item, Percent};

/// A boxed policy, for choosing one at runtime.
pub type DiscountStrategy = Box<dyn Fn(Money) -> Money + Send + Sync>;

/// Charges the full subtotal.
pub fn no_discount(subtotal: Money) -> Money {
    subtotal
}

/// Half price, truncated to whole cents.
pub fn happy_hour_discount(subtotal: Money) -> Money {
    subtotal / 2
}

/// Takes `percent` off the subtotal, rounding the discount half-up.
pub fn coupon_discount(percent: Percent) -> impl Fn(Money) -> Money + Copy + Send + Sync {
    move |subtotal| subtotal.apply_percentage_discount(percent)
}

/// Sums the items, then applies `discount`.
pub fn total_price<D>(items: &[Item], discount: D) -> Money
where
    D: Fn(Money) -> Money,
{
    let subtotal = super::subtotal(items);
    let total = discount(subtotal);
    debug!(items = items.len(), %subtotal, %total, "Computed bill total");
    total
}

/// [`total_price`] with [`no_discount`].
pub fn total_price_undiscounted(items: &[Item]) -> Money {
    total_price(items, no_discount)
}
