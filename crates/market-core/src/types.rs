//! # Domain Types
//!
//! Core domain types shared by the catalog, pricing and sale modules.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │ trait Priced    │   │    VatRate      │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  name()         │   │  bps (u32)      │                             │
//! │  │  price()        │   │  10900 = ×1.09  │                             │
//! │  │  set_price()    │   └─────────────────┘                             │
//! │  └────────┬────────┘                                                    │
//! │           │ impl                                                        │
//! │  ┌────────▼────────┐                                                    │
//! │  │    Product      │                                                    │
//! │  │  name           │                                                    │
//! │  │  price (Money)  │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Name Identity
//! A product's identity is its lowercase-normalized name. Lookup,
//! de-duplication and equality all compare names case-insensitively.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;
use crate::validation::{validate_price_cents, validate_product_name, ValidationResult};

// =============================================================================
// VAT Rate
// =============================================================================

/// A VAT multiplier represented in basis points of the multiplier.
///
/// ## Why Basis Points?
/// 1 basis point = 1/10000, so `10900` bps = ×1.09 (9% VAT) and
/// `10000` bps = ×1.00 (no VAT). Keeping the multiplier integral keeps
/// every sale price exact to the cent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VatRate(u32);

impl VatRate {
    /// Creates a rate from basis points of the multiplier.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        VatRate(bps)
    }

    /// Creates a rate from a decimal multiplier (`1.09`).
    ///
    /// Negative or NaN multipliers saturate to zero.
    pub fn from_multiplier(multiplier: f64) -> Self {
        VatRate((multiplier * 10000.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the multiplier (for display only).
    #[inline]
    pub fn multiplier(&self) -> f64 {
        self.0 as f64 / 10000.0
    }

    /// The identity multiplier (×1.00).
    #[inline]
    pub const fn identity() -> Self {
        VatRate(10000)
    }
}

impl Default for VatRate {
    fn default() -> Self {
        VatRate::identity()
    }
}

impl fmt::Display for VatRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{:.4}", self.multiplier())
    }
}

// =============================================================================
// Priced Capability
// =============================================================================

/// Anything with a name and a mutable cost price.
///
/// `Catalog<T: Priced>` is generic over this trait, so callers can store
/// richer item types than [`Product`].
pub trait Priced {
    /// Display name; identity is this name compared case-insensitively.
    fn name(&self) -> &str;

    /// Stored cost price.
    fn price(&self) -> Money;

    /// Explicit price update.
    fn set_price(&mut self, price: Money);

    /// Case-insensitive name comparison.
    fn has_name(&self, name: &str) -> bool {
        names_match(self.name(), name)
    }
}

/// Compares two product names case-insensitively.
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

// =============================================================================
// Product
// =============================================================================

/// A product on the price list.
///
/// Equality is by case-insensitive name only; two products with the same
/// name and different prices are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: Money,
}

impl Product {
    /// Creates a product with a zero price.
    pub fn new(name: impl Into<String>) -> Self {
        Product {
            name: name.into(),
            price: Money::zero(),
        }
    }

    /// Creates a product with a price.
    pub fn with_price(name: impl Into<String>, price: Money) -> Self {
        Product {
            name: name.into(),
            price,
        }
    }

    /// Creates a product after validating name and price.
    ///
    /// ## Example
    /// ```rust
    /// use market_core::{Money, Product};
    ///
    /// assert!(Product::validated("Mango", Money::from_cents(1000)).is_ok());
    /// assert!(Product::validated("   ", Money::zero()).is_err());
    /// assert!(Product::validated("Mango", Money::from_cents(-1)).is_err());
    /// ```
    pub fn validated(name: impl Into<String>, price: Money) -> ValidationResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price_cents(price.cents())?;
        Ok(Product::with_price(name.trim(), price))
    }

    /// Lowercase-normalized identity key.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Sets the stored price.
    pub fn update_price(&mut self, to: Money) {
        self.price = to;
    }
}

impl Priced for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Money {
        self.price
    }

    fn set_price(&mut self, price: Money) {
        self.update_price(price);
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        names_match(&self.name, &other.name)
    }
}

impl Eq for Product {}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vat_rate_from_multiplier() {
        let rate = VatRate::from_multiplier(1.09);
        assert_eq!(rate.bps(), 10900);
        assert!((rate.multiplier() - 1.09).abs() < 1e-9);
        assert_eq!(rate.to_string(), "x1.0900");
    }

    #[test]
    fn test_vat_rate_default_is_identity() {
        assert_eq!(VatRate::default().bps(), 10000);
    }

    #[test]
    fn test_product_defaults_to_zero_price() {
        let product = Product::new("Mango");
        assert_eq!(product.name(), "Mango");
        assert!(product.price().is_zero());
    }

    #[test]
    fn test_product_equality_ignores_case_and_price() {
        let a = Product::with_price("Mango", Money::from_cents(1000));
        let b = Product::with_price("MANGO", Money::from_cents(99));
        let c = Product::with_price("Apple", Money::from_cents(1000));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.key(), "mango");
        assert!(a.has_name("mAnGo"));
    }

    #[test]
    fn test_update_price() {
        let mut product = Product::with_price("Apple", Money::from_cents(2000));
        product.set_price(Money::from_cents(2500));
        assert_eq!(product.price().cents(), 2500);
    }

    #[test]
    fn test_validated_trims_name() {
        let product = Product::validated("  Banana ", Money::from_cents(5000)).unwrap();
        assert_eq!(product.name(), "Banana");
    }

    #[test]
    fn test_display() {
        let product = Product::with_price("Apple", Money::from_cents(2000));
        assert_eq!(product.to_string(), "Apple (20.00)");
    }
}
