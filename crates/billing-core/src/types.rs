//! # Domain Types
//!
//! The data the three pattern families operate on.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Strategy side                     Visitor side                         │
//! │  ┌─────────────────┐               ┌───────────────────────────────┐   │
//! │  │    Product      │               │            Goods              │   │
//! │  │  unit_price     │               │  ├── Liquor  { per unit }     │   │
//! │  └────────┬────────┘               │  └── Tobacco { per weight }   │   │
//! │           │                        └───────────────┬───────────────┘   │
//! │  ┌────────▼────────┐                               │ kind()            │
//! │  │      Item       │               ┌───────────────▼───────────────┐   │
//! │  │  product × qty  │               │  GoodsKind ──► VatRates       │   │
//! │  └─────────────────┘               │  override or standard Percent │   │
//! │                                    └───────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is immutable after construction. Constructors that can
//! receive out-of-domain input return a `ValidationResult`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::validation::{validate_percent, validate_price_cents};

// =============================================================================
// Percent
// =============================================================================

/// A whole-number percentage in `[0, 100]`.
///
/// Used both for coupon discounts and VAT rates.
///
/// ```rust
/// use billing_core::types::Percent;
///
/// assert_eq!(Percent::new(20).unwrap().value(), 20);
/// assert!(Percent::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Percent(u8);

impl Percent {
    /// Zero percent.
    pub const ZERO: Percent = Percent(0);

    /// Creates a percentage, rejecting anything above 100.
    pub fn new(value: u32) -> ValidationResult<Self> {
        validate_percent(value)?;
        Ok(Percent(value as u8))
    }

    /// Returns the whole-number percentage.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0 as u32
    }
}

impl TryFrom<u32> for Percent {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Percent::new(value)
    }
}

impl From<Percent> for u32 {
    fn from(percent: Percent) -> Self {
        percent.value()
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Product & Item
// =============================================================================

/// Something that can be put on a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Product {
    unit_price: Money,
}

impl Product {
    /// Creates a product. Negative prices are rejected.
    pub fn new(unit_price: Money) -> ValidationResult<Self> {
        validate_price_cents(unit_price.cents())?;
        Ok(Product { unit_price })
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }
}

/// A line on a bill: a product and how many of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Item {
    product: Product,
    quantity: u32,
}

impl Item {
    pub fn new(product: Product, quantity: u32) -> Self {
        Item { product, quantity }
    }

    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Taxable Goods
// =============================================================================

/// Liquor, priced per unit.
///
/// The only way in is [`Liquor::new`], so the price is never negative:
///
/// ```compile_fail
/// use billing_core::{Liquor, Money};
///
/// let liquor = Liquor { price_per_unit: Money::from_cents(-35000) };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Liquor {
    price_per_unit: Money,
}

impl Liquor {
    pub fn new(price_per_unit: Money) -> ValidationResult<Self> {
        validate_price_cents(price_per_unit.cents())?;
        Ok(Liquor { price_per_unit })
    }

    #[inline]
    pub fn price_per_unit(&self) -> Money {
        self.price_per_unit
    }
}

/// Tobacco, priced per weight.
///
/// ```compile_fail
/// use billing_core::{Money, Tobacco};
///
/// let tobacco = Tobacco { price_per_weight: Money::from_cents(-5500) };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tobacco {
    price_per_weight: Money,
}

impl Tobacco {
    pub fn new(price_per_weight: Money) -> ValidationResult<Self> {
        validate_price_cents(price_per_weight.cents())?;
        Ok(Tobacco { price_per_weight })
    }

    #[inline]
    pub fn price_per_weight(&self) -> Money {
        self.price_per_weight
    }
}

/// The closed set of taxable goods.
///
/// ## Adding a Variant
/// Every operation over `Goods` matches exhaustively with no wildcard arm,
/// so a new variant is a compile error until net price, VAT and both
/// visitor traits handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Goods {
    Liquor(Liquor),
    Tobacco(Tobacco),
}

impl Goods {
    /// The variant tag, used as the VAT override key.
    pub fn kind(&self) -> GoodsKind {
        match self {
            Goods::Liquor(_) => GoodsKind::Liquor,
            Goods::Tobacco(_) => GoodsKind::Tobacco,
        }
    }
}

impl From<Liquor> for Goods {
    fn from(liquor: Liquor) -> Self {
        Goods::Liquor(liquor)
    }
}

impl From<Tobacco> for Goods {
    fn from(tobacco: Tobacco) -> Self {
        Goods::Tobacco(tobacco)
    }
}

/// Tag for each `Goods` variant, without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoodsKind {
    Liquor,
    Tobacco,
}

impl fmt::Display for GoodsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoodsKind::Liquor => f.pad("liquor"),
            GoodsKind::Tobacco => f.pad("tobacco"),
        }
    }
}

// =============================================================================
// VAT Rates
// =============================================================================

/// A standard VAT rate plus per-kind overrides.
///
/// ## Rate Resolution
/// ```text
/// rate_for(kind)
///      │
///      ├── overrides has kind? ──► that rate
///      │
///      └── otherwise ────────────► standard
/// ```
///
/// ```rust
/// use billing_core::types::{GoodsKind, Percent, VatRates};
///
/// let rates = VatRates::new(Percent::new(20)?)
///     .with_override(GoodsKind::Tobacco, Percent::new(25)?);
///
/// assert_eq!(rates.rate_for(GoodsKind::Liquor).value(), 20);
/// assert_eq!(rates.rate_for(GoodsKind::Tobacco).value(), 25);
/// # Ok::<(), billing_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatRates {
    standard: Percent,
    #[serde(default)]
    overrides: BTreeMap<GoodsKind, Percent>,
}

impl VatRates {
    /// Rates with no overrides: every kind pays `standard`.
    pub fn new(standard: Percent) -> Self {
        VatRates {
            standard,
            overrides: BTreeMap::new(),
        }
    }

    /// Sets the rate for one kind. A second call for the same kind replaces
    /// the first.
    pub fn with_override(mut self, kind: GoodsKind, rate: Percent) -> Self {
        self.overrides.insert(kind, rate);
        self
    }

    pub fn standard(&self) -> Percent {
        self.standard
    }

    pub fn override_for(&self, kind: GoodsKind) -> Option<Percent> {
        self.overrides.get(&kind).copied()
    }

    /// The effective rate for `kind`.
    pub fn rate_for(&self, kind: GoodsKind) -> Percent {
        self.override_for(kind).unwrap_or(self.standard)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_bounds() {
        assert_eq!(Percent::new(0).unwrap(), Percent::ZERO);
        assert_eq!(Percent::new(100).unwrap().value(), 100);
        assert!(Percent::new(101).is_err());
        assert!(Percent::new(u32::MAX).is_err());
    }

    #[test]
    fn test_percent_display() {
        assert_eq!(Percent::new(25).unwrap().to_string(), "25%");
    }

    #[test]
    fn test_percent_deserialize_validates() {
        let ok: Percent = serde_json::from_str("30").unwrap();
        assert_eq!(ok.value(), 30);
        assert!(serde_json::from_str::<Percent>("130").is_err());
    }

    #[test]
    fn test_product_rejects_negative_price() {
        assert!(Product::new(Money::from_cents(0)).is_ok());
        assert!(Product::new(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_item_line_total() {
        let item = Item::new(Product::new(Money::from_cents(10000)).unwrap(), 3);
        assert_eq!(item.line_total().cents(), 30000);
        assert_eq!(item.quantity(), 3);
        assert_eq!(item.product().unit_price().cents(), 10000);
    }

    #[test]
    fn test_item_with_zero_quantity() {
        let item = Item::new(Product::new(Money::from_cents(999)).unwrap(), 0);
        assert!(item.line_total().is_zero());
    }

    #[test]
    fn test_goods_kind() {
        let liquor: Goods = Liquor::new(Money::from_cents(35000)).unwrap().into();
        let tobacco: Goods = Tobacco::new(Money::from_cents(5500)).unwrap().into();
        assert_eq!(liquor.kind(), GoodsKind::Liquor);
        assert_eq!(tobacco.kind(), GoodsKind::Tobacco);
    }

    #[test]
    fn test_goods_reject_negative_price() {
        assert!(Liquor::new(Money::from_cents(-35000)).is_err());
        assert!(Tobacco::new(Money::from_cents(-5500)).is_err());
    }

    #[test]
    fn test_goods_price_getters() {
        let liquor = Liquor::new(Money::from_cents(35000)).unwrap();
        let tobacco = Tobacco::new(Money::from_cents(5500)).unwrap();
        assert_eq!(liquor.price_per_unit().cents(), 35000);
        assert_eq!(tobacco.price_per_weight().cents(), 5500);
    }

    #[test]
    fn test_goods_serialization_shape() {
        let liquor: Goods = Liquor::new(Money::from_cents(35000)).unwrap().into();
        let json = serde_json::to_value(liquor).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "liquor", "price_per_unit": 35000 })
        );
    }

    #[test]
    fn test_vat_rates_resolution() {
        let rates = VatRates::new(Percent::new(20).unwrap())
            .with_override(GoodsKind::Tobacco, Percent::new(25).unwrap());

        assert_eq!(rates.standard().value(), 20);
        assert_eq!(rates.override_for(GoodsKind::Liquor), None);
        assert_eq!(rates.rate_for(GoodsKind::Liquor).value(), 20);
        assert_eq!(rates.rate_for(GoodsKind::Tobacco).value(), 25);
    }

    #[test]
    fn test_vat_rates_later_override_wins() {
        let rates = VatRates::new(Percent::new(20).unwrap())
            .with_override(GoodsKind::Liquor, Percent::new(10).unwrap())
            .with_override(GoodsKind::Liquor, Percent::new(15).unwrap());
        assert_eq!(rates.rate_for(GoodsKind::Liquor).value(), 15);
    }

    #[test]
    fn test_vat_rates_deserialize() {
        let rates: VatRates = serde_json::from_str(
            r#"{ "standard": 20, "overrides": { "tobacco": 25 } }"#,
        )
        .unwrap();
        assert_eq!(rates.rate_for(GoodsKind::Tobacco).value(), 25);

        let no_overrides: VatRates = serde_json::from_str(r#"{ "standard": 7 }"#).unwrap();
        assert_eq!(no_overrides.rate_for(GoodsKind::Tobacco).value(), 7);
    }
}
