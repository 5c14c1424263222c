//! # Visitor
//!
//! Net price, VAT and gross price over the closed set of taxable goods.
//!
//! ## Operations × Variants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Liquor                   Tobacco                     │
//! │                    ──────                   ───────                     │
//! │  net price         price_per_unit           price_per_weight            │
//! │  VAT               net × rate(Liquor)       net × rate(Tobacco)         │
//! │  gross price       net + VAT                net + VAT                   │
//! │                                                                         │
//! │  rate(kind) = overrides[kind] or standard, rounded half-up to cents     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`fp`]: one function per row, each an exhaustive `match` on [`Goods`]
//! - [`oop`]: one visitor type per row, goods dispatch via `accept`
//!
//! Neither side has a wildcard arm. Adding a `Goods` variant breaks the
//! build until every operation prices it.
//!
//! [`Goods`]: crate::types::Goods

pub mod fp;
pub mod oop;

use serde::Serialize;
use std::fmt;

use crate::money::Money;

/// All three figures for one item of goods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    pub net: Money,
    pub vat: Money,
    pub gross: Money,
}

impl fmt::Display for PriceBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "net {} + VAT {} = gross {}", self.net, self.vat, self.gross)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_display() {
        let breakdown = PriceBreakdown {
            net: Money::from_cents(5500),
            vat: Money::from_cents(1375),
            gross: Money::from_cents(6875),
        };
        assert_eq!(
            breakdown.to_string(),
            "net $55.00 + VAT $13.75 = gross $68.75"
        );
    }
}
