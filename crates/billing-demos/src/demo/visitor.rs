//! Liquor at the standard rate, tobacco at its override.

use billing_core::visitor::oop::{GrossPriceVisitor, NetPriceVisitor, VatVisitor, Visitable};
use billing_core::visitor::{fp, PriceBreakdown};
use billing_core::{Goods, GoodsKind, Liquor, Money, Percent, Tobacco, VatRates};

use crate::check::check;
use crate::error::DemoResult;

const STANDARD_RATE: u32 = 20;
const TOBACCO_RATE: u32 = 25;

fn sample_rates() -> DemoResult<VatRates> {
    Ok(VatRates::new(Percent::new(STANDARD_RATE)?)
        .with_override(GoodsKind::Tobacco, Percent::new(TOBACCO_RATE)?))
}

fn sample_goods() -> DemoResult<(Goods, Goods)> {
    let liquor = Liquor::new(Money::from_cents(35000))?.into();
    let tobacco = Tobacco::new(Money::from_cents(5500))?.into();
    Ok((liquor, tobacco))
}

fn check_breakdown(
    goods: &Goods,
    expected: PriceBreakdown,
    actual: PriceBreakdown,
) -> DemoResult<()> {
    println!("  {:<8} {}", goods.kind(), actual);

    let kind = goods.kind();
    check(&format!("{kind} net price"), expected.net, actual.net)?;
    check(&format!("{kind} VAT"), expected.vat, actual.vat)?;
    check(&format!("{kind} gross price"), expected.gross, actual.gross)
}

fn expected(net: i64, vat: i64, gross: i64) -> PriceBreakdown {
    PriceBreakdown {
        net: Money::from_cents(net),
        vat: Money::from_cents(vat),
        gross: Money::from_cents(gross),
    }
}

pub fn run_fp() -> DemoResult<()> {
    let rates = sample_rates()?;
    let (liquor, tobacco) = sample_goods()?;

    for (goods, want) in [
        (liquor, expected(35000, 7000, 42000)),
        (tobacco, expected(5500, 1375, 6875)),
    ] {
        let actual = PriceBreakdown {
            net: fp::net_price(&goods),
            vat: fp::vat(&goods, &rates),
            gross: fp::gross_price(&goods, &rates),
        };
        check_breakdown(&goods, want, actual)?;
    }
    Ok(())
}

pub fn run_oop() -> DemoResult<()> {
    let rates = sample_rates()?;
    let (liquor, tobacco) = sample_goods()?;

    let net_price = NetPriceVisitor;
    let vat = VatVisitor::new(rates.clone());
    let gross_price = GrossPriceVisitor::new(rates);

    for (goods, want) in [
        (liquor, expected(35000, 7000, 42000)),
        (tobacco, expected(5500, 1375, 6875)),
    ] {
        let actual = PriceBreakdown {
            net: goods.accept(&net_price),
            vat: goods.accept(&vat),
            gross: goods.accept(&gross_price),
        };
        check_breakdown(&goods, want, actual)?;
    }
    Ok(())
}
