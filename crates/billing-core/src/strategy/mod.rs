//! # Strategy
//!
//! A bill total with a swappable discount policy.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  items ──► Σ unit_price × quantity ──► subtotal ──► discount ──► total │
//! │                                                        │                │
//! │                         ┌──────────────────────────────┤                │
//! │                         │              │               │                │
//! │                    no discount    happy hour       coupon(p%)           │
//! │                     subtotal      subtotal / 2    subtotal - p%         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`fp`]: policies are plain functions and closures
//! - [`oop`]: policies implement [`oop::DiscountStrategy`], held by a [`oop::Bill`]
//!
//! Both compute the same numbers for the same inputs. An empty bill is
//! always zero, whatever the policy.

pub mod fp;
pub mod oop;

use crate::money::Money;
use crate::types::Item;

/// Sum of all line totals. Empty input sums to zero.
pub fn subtotal(items: &[Item]) -> Money {
    items.iter().map(Item::line_total).sum()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::money::Money;
    use crate::types::{Item, Product};

    /// 5 × 1000 + 3 × 10000 = 35000
    pub(crate) fn sample_items() -> Vec<Item> {
        vec![
            Item::new(Product::new(Money::from_cents(1000)).unwrap(), 5),
            Item::new(Product::new(Money::from_cents(10000)).unwrap(), 3),
        ]
    }

    /// Subtotal 35001, odd so halving truncates.
    pub(crate) fn odd_items() -> Vec<Item> {
        vec![Item::new(Product::new(Money::from_cents(35001)).unwrap(), 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::sample_items;
    use super::*;

    #[test]
    fn test_subtotal() {
        assert_eq!(subtotal(&sample_items()).cents(), 35000);
    }

    #[test]
    fn test_subtotal_of_empty_bill() {
        assert!(subtotal(&[]).is_zero());
    }
}
