//! A two-line bill priced under each discount policy.

use billing_core::strategy::{fp, oop};
use billing_core::{Item, Money, Percent, Product};

use crate::check::check;
use crate::error::DemoResult;

const COUPON_PERCENT: u32 = 30;

/// 5 × $10.00 and 3 × $100.00.
fn sample_items() -> DemoResult<Vec<Item>> {
    Ok(vec![
        Item::new(Product::new(Money::from_cents(1000))?, 5),
        Item::new(Product::new(Money::from_cents(10000))?, 3),
    ])
}

fn report(label: &str, total: Money) {
    println!("  {:<12} {}", label, total);
}

pub fn run_fp() -> DemoResult<()> {
    let items = sample_items()?;
    let coupon = fp::coupon_discount(Percent::new(COUPON_PERCENT)?);

    let full = fp::total_price(&items, fp::no_discount);
    let happy_hour = fp::total_price(&items, fp::happy_hour_discount);
    let with_coupon = fp::total_price(&items, coupon);
    let empty = fp::total_price_undiscounted(&[]);

    report("no discount", full);
    report("happy hour", happy_hour);
    report("coupon", with_coupon);
    report("empty bill", empty);

    check("no discount", Money::from_cents(35000), full)?;
    check("happy hour", Money::from_cents(17500), happy_hour)?;
    check("coupon", Money::from_cents(24500), with_coupon)?;
    check("empty bill", Money::zero(), empty)?;
    Ok(())
}

pub fn run_oop() -> DemoResult<()> {
    let items = sample_items()?;
    let coupon = oop::CouponDiscount::new(Percent::new(COUPON_PERCENT)?);

    let full = oop::Bill::with_discount(items.clone(), oop::NoDiscount).total_price();
    let happy_hour = oop::Bill::with_discount(items.clone(), oop::HappyHourDiscount).total_price();
    let with_coupon = oop::Bill::with_discount(items, coupon).total_price();
    let empty = oop::Bill::new(Vec::new()).total_price();

    report("no discount", full);
    report("happy hour", happy_hour);
    report("coupon", with_coupon);
    report("empty bill", empty);

    check("no discount", Money::from_cents(35000), full)?;
    check("happy hour", Money::from_cents(17500), happy_hour)?;
    check("coupon", Money::from_cents(24500), with_coupon)?;
    check("empty bill", Money::zero(), empty)?;
    Ok(())
}
