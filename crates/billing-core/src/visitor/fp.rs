//! Pricing as functions matching on the `Goods` enum.
//!
//! ```rust
//! use billing_core::money::Money;
//! use billing_core::types::{Goods, GoodsKind, Percent, Tobacco, VatRates};
//! use billing_core::visitor::fp::{gross_price, net_price, vat};
//!
//! let rates = VatRates::new(Percent::new(20)?)
//!     .with_override(GoodsKind::Tobacco, Percent::new(25)?);
//! let tobacco: Goods = Tobacco::new(Money::from_cents(5500))?.into();
//!
//! assert_eq!(net_price(&tobacco).cents(), 5500);
//! assert_eq!(vat(&tobacco, &rates).cents(), 1375);
//! assert_eq!(gross_price(&tobacco, &rates).cents(), 6875);
//! # Ok::<(), billing_core::ValidationError>(())
//! ```

use tracing::debug;

use super::PriceBreakdown;
use crate::money::Money;
use crate::types::{Goods, VatRates};

/// The goods' own price field.
pub fn net_price(goods: &Goods) -> Money {
    match goods {
        Goods::Liquor(liquor) => liquor.price_per_unit(),
        Goods::Tobacco(tobacco) => tobacco.price_per_weight(),
    }
}

/// Net price × the rate for this kind of goods.
pub fn vat(goods: &Goods, rates: &VatRates) -> Money {
    let kind = goods.kind();
    let rate = rates.rate_for(kind);
    let vat = net_price(goods).percentage(rate);
    debug!(%kind, %rate, %vat, "Computed VAT");
    vat
}

/// Net price + VAT.
pub fn gross_price(goods: &Goods, rates: &VatRates) -> Money {
    net_price(goods) + vat(goods, rates)
}

/// Net, VAT and gross in one go.
pub fn breakdown(goods: &Goods, rates: &VatRates) -> PriceBreakdown {
    let net = net_price(goods);
    let vat = vat(goods, rates);
    PriceBreakdown {
        net,
        vat,
        gross: net + vat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GoodsKind, Percent};
    use crate::visitor::fixtures::{all_goods, liquor, sample_rates, tobacco};

    #[test]
    fn test_liquor_uses_standard_rate() {
        let rates = sample_rates();
        let liquor: Goods = liquor().into();
        assert_eq!(net_price(&liquor).cents(), 35000);
        assert_eq!(vat(&liquor, &rates).cents(), 7000);
        assert_eq!(gross_price(&liquor, &rates).cents(), 42000);
    }

    #[test]
    fn test_tobacco_uses_override() {
        let rates = sample_rates();
        let tobacco: Goods = tobacco().into();
        assert_eq!(net_price(&tobacco).cents(), 5500);
        assert_eq!(vat(&tobacco, &rates).cents(), 1375);
        assert_eq!(gross_price(&tobacco, &rates).cents(), 6875);
    }

    #[test]
    fn test_override_is_per_kind() {
        let rates = VatRates::new(Percent::new(20).unwrap())
            .with_override(GoodsKind::Liquor, Percent::ZERO);
        let liquor: Goods = liquor().into();
        let tobacco: Goods = tobacco().into();
        assert!(vat(&liquor, &rates).is_zero());
        assert_eq!(vat(&tobacco, &rates).cents(), 1100);
    }

    #[test]
    fn test_vat_rounds_half_up() {
        // 1234 × 25% = 308.5
        let rates = VatRates::new(Percent::new(25).unwrap());
        let goods: Goods = crate::types::Liquor::new(Money::from_cents(1234))
            .unwrap()
            .into();
        assert_eq!(vat(&goods, &rates).cents(), 309);
    }

    #[test]
    fn test_gross_is_net_plus_vat() {
        let rates = sample_rates();
        for goods in all_goods() {
            assert_eq!(
                gross_price(&goods, &rates),
                net_price(&goods) + vat(&goods, &rates)
            );
        }
    }

    #[test]
    fn test_breakdown_matches_individual_operations() {
        let rates = sample_rates();
        for goods in all_goods() {
            let breakdown = breakdown(&goods, &rates);
            assert_eq!(breakdown.net, net_price(&goods));
            assert_eq!(breakdown.vat, vat(&goods, &rates));
            assert_eq!(breakdown.gross, gross_price(&goods, &rates));
        }
    }
}
