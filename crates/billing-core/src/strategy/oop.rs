//! Discount policies as trait objects held by a `Bill`.
//!
//! ```rust
//! use billing_core::money::Money;
//! use billing_core::strategy::oop::{Bill, CouponDiscount};
//! use billing_core::types::{Item, Percent, Product};
//!
//! let items = vec![
//!     Item::new(Product::new(Money::from_cents(1000))?, 5),
//!     Item::new(Product::new(Money::from_cents(10000))?, 3),
//! ];
//!
//! let bill = Bill::with_discount(items, CouponDiscount::new(Percent::new(30)?));
//! assert_eq!(bill.total_price().cents(), 24500);
//! # Ok::<(), billing_core::ValidationError>(())
//! ```

use std::fmt;

use tracing::debug;

use crate::money::Money;
use crate::types::{Item, Percent};

/// Turns a subtotal into the amount actually charged.
pub trait DiscountStrategy {
    fn calculate(&self, subtotal: Money) -> Money;
}

impl<T: DiscountStrategy + ?Sized> DiscountStrategy for Box<T> {
    fn calculate(&self, subtotal: Money) -> Money {
        (**self).calculate(subtotal)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiscount;

impl DiscountStrategy for NoDiscount {
    fn calculate(&self, subtotal: Money) -> Money {
        subtotal
    }
}

/// Half price, truncated to whole cents.
#[derive(Debug, Clone, Copy, Default)]
pub struct HappyHourDiscount;

impl DiscountStrategy for HappyHourDiscount {
    fn calculate(&self, subtotal: Money) -> Money {
        subtotal / 2
    }
}

/// A fixed percentage off, discount rounded half-up.
#[derive(Debug, Clone, Copy)]
pub struct CouponDiscount {
    percent: Percent,
}

impl CouponDiscount {
    pub fn new(percent: Percent) -> Self {
        CouponDiscount { percent }
    }

    pub fn percent(&self) -> Percent {
        self.percent
    }
}

impl DiscountStrategy for CouponDiscount {
    fn calculate(&self, subtotal: Money) -> Money {
        subtotal.apply_percentage_discount(self.percent)
    }
}

// =============================================================================
// Bill
// =============================================================================

/// Line items plus the policy used to price them.
pub struct Bill {
    items: Vec<Item>,
    discount: Box<dyn DiscountStrategy + Send + Sync>,
}

impl Bill {
    /// A bill charged at full price.
    pub fn new(items: Vec<Item>) -> Self {
        Bill::with_discount(items, NoDiscount)
    }

    pub fn with_discount<D>(items: Vec<Item>, discount: D) -> Self
    where
        D: DiscountStrategy + Send + Sync + 'static,
    {
        Bill {
            items,
            discount: Box::new(discount),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Sum of line totals before the discount.
    pub fn subtotal(&self) -> Money {
        super::subtotal(&self.items)
    }

    /// Subtotal after the discount.
    pub fn total_price(&self) -> Money {
        let subtotal = self.subtotal();
        let total = self.discount.calculate(subtotal);
        debug!(items = self.items.len(), %subtotal, %total, "Computed bill total");
        total
    }
}

impl fmt::Debug for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bill")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}
