//! Pricing as visitor objects with double dispatch.
//!
//! ```text
//! goods.accept(&visitor)
//!      │
//!      ├── Liquor  ──► visitor.visit_liquor(&liquor)
//!      └── Tobacco ──► visitor.visit_tobacco(&tobacco)
//! ```
//!
//! ```rust
//! use billing_core::money::Money;
//! use billing_core::types::{Liquor, Percent, VatRates};
//! use billing_core::visitor::oop::{GrossPriceVisitor, Visitable};
//!
//! let gross = GrossPriceVisitor::new(VatRates::new(Percent::new(20)?));
//! let liquor = Liquor::new(Money::from_cents(35000))?;
//! assert_eq!(liquor.accept(&gross).cents(), 42000);
//! # Ok::<(), billing_core::ValidationError>(())
//! ```

use crate::money::Money;
use crate::types::{Goods, GoodsKind, Liquor, Tobacco, VatRates};

/// One operation, one method per goods type.
pub trait Visitor {
    type Output;

    fn visit_liquor(&self, liquor: &Liquor) -> Self::Output;
    fn visit_tobacco(&self, tobacco: &Tobacco) -> Self::Output;
}

/// Something a [`Visitor`] can be applied to.
pub trait Visitable {
    fn accept<V: Visitor>(&self, visitor: &V) -> V::Output;
}

impl Visitable for Liquor {
    fn accept<V: Visitor>(&self, visitor: &V) -> V::Output {
        visitor.visit_liquor(self)
    }
}

impl Visitable for Tobacco {
    fn accept<V: Visitor>(&self, visitor: &V) -> V::Output {
        visitor.visit_tobacco(self)
    }
}

impl Visitable for Goods {
    fn accept<V: Visitor>(&self, visitor: &V) -> V::Output {
        match self {
            Goods::Liquor(liquor) => liquor.accept(visitor),
            Goods::Tobacco(tobacco) => tobacco.accept(visitor),
        }
    }
}

// =============================================================================
// Visitors
// =============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct NetPriceVisitor;

impl Visitor for NetPriceVisitor {
    type Output = Money;

    fn visit_liquor(&self, liquor: &Liquor) -> Money {
        liquor.price_per_unit()
    }

    fn visit_tobacco(&self, tobacco: &Tobacco) -> Money {
        tobacco.price_per_weight()
    }
}

#[derive(Debug, Clone)]
pub struct VatVisitor {
    rates: VatRates,
}

impl VatVisitor {
    pub fn new(rates: VatRates) -> Self {
        VatVisitor { rates }
    }

    pub fn rates(&self) -> &VatRates {
        &self.rates
    }
}

impl Visitor for VatVisitor {
    type Output = Money;

    fn visit_liquor(&self, liquor: &Liquor) -> Money {
        let rate = self.rates.rate_for(GoodsKind::Liquor);
        liquor.price_per_unit().percentage(rate)
    }

    fn visit_tobacco(&self, tobacco: &Tobacco) -> Money {
        let rate = self.rates.rate_for(GoodsKind::Tobacco);
        tobacco.price_per_weight().percentage(rate)
    }
}

/// Net price plus VAT, built from the other two visitors.
#[derive(Debug, Clone)]
pub struct GrossPriceVisitor {
    net_price: NetPriceVisitor,
    vat: VatVisitor,
}

impl GrossPriceVisitor {
    pub fn new(rates: VatRates) -> Self {
        GrossPriceVisitor {
            net_price: NetPriceVisitor,
            vat: VatVisitor::new(rates),
        }
    }
}

impl Visitor for GrossPriceVisitor {
    type Output = Money;

    fn visit_liquor(&self, liquor: &Liquor) -> Money {
        liquor.accept(&self.net_price) + liquor.accept(&self.vat)
    }

    fn visit_tobacco(&self, tobacco: &Tobacco) -> Money {
        tobacco.accept(&self.net_price) + tobacco.accept(&self.vat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Percent;
    use crate::visitor::fixtures::{all_goods, liquor, sample_rates, tobacco};
    use crate::visitor::fp;

    /// A visitor with a non-money output, to show `Output` is free.
    struct KindName;

    impl Visitor for KindName {
        type Output = &'static str;

        fn visit_liquor(&self, _: &Liquor) -> &'static str {
            "liquor"
        }

        fn visit_tobacco(&self, _: &Tobacco) -> &'static str {
            "tobacco"
        }
    }

    #[test]
    fn test_liquor() {
        let liquor = liquor();
        assert_eq!(liquor.accept(&NetPriceVisitor).cents(), 35000);
        assert_eq!(liquor.accept(&VatVisitor::new(sample_rates())).cents(), 7000);
        assert_eq!(
            liquor.accept(&GrossPriceVisitor::new(sample_rates())).cents(),
            42000
        );
    }

    #[test]
    fn test_tobacco() {
        let tobacco = tobacco();
        assert_eq!(tobacco.accept(&NetPriceVisitor).cents(), 5500);
        assert_eq!(tobacco.accept(&VatVisitor::new(sample_rates())).cents(), 1375);
        assert_eq!(
            tobacco.accept(&GrossPriceVisitor::new(sample_rates())).cents(),
            6875
        );
    }

    #[test]
    fn test_goods_dispatch_to_variant() {
        let names: Vec<_> = all_goods().iter().map(|g| g.accept(&KindName)).collect();
        assert_eq!(names, ["liquor", "tobacco"]);
    }

    #[test]
    fn test_agrees_with_fp() {
        let rates = VatRates::new(Percent::new(19).unwrap())
            .with_override(GoodsKind::Liquor, Percent::new(7).unwrap());
        let vat = VatVisitor::new(rates.clone());
        let gross = GrossPriceVisitor::new(rates.clone());

        for goods in all_goods() {
            assert_eq!(goods.accept(&NetPriceVisitor), fp::net_price(&goods));
            assert_eq!(goods.accept(&vat), fp::vat(&goods, &rates));
            assert_eq!(goods.accept(&gross), fp::gross_price(&goods, &rates));
        }
    }

    #[test]
    fn test_vat_visitor_exposes_rates() {
        let visitor = VatVisitor::new(sample_rates());
        assert_eq!(visitor.rates(), &sample_rates());
    }
}
