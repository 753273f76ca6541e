//! # Catalog
//!
//! The market's price list: an ordered collection of uniquely-named items
//! plus an optional pricing policy.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Catalog<T, P>                                  │
//! │                                                                         │
//! │  items: [Mango 10.00, Apple 20.00]      pricing: Some(VatCalculator)    │
//! │                                                                         │
//! │  add(Mango)        → ignored (name already present)                     │
//! │  remove("kiwi")    → ignored (absent)                                   │
//! │  find("APPLE")     → Some(Apple 20.00)                                  │
//! │  merge(other)      → items ++ other.items  (NO de-duplication)          │
//! │  double_prices()   → [Mango 20.00, Apple 40.00]                         │
//! │  sale_price_at(0)  → pricing.sale_price(Mango)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `add` keeps names unique, `merge` does not. Two merged catalogs can
//! therefore contain the same name twice; lookups return the first match.
//! Deserialized catalogs are rebuilt through `add`, so a snapshot with
//! repeated names loads with the first occurrence only.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::{PricingPolicy, VatCalculator};
use crate::types::Priced;

// =============================================================================
// Catalog
// =============================================================================

/// An ordered price list of `T` items, optionally priced by `P`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    from = "CatalogSnapshot<T, P>",
    bound(deserialize = "T: Priced + Deserialize<'de>, P: Deserialize<'de>")
)]
pub struct Catalog<T, P = VatCalculator> {
    items: Vec<T>,
    #[serde(default)]
    pricing: Option<P>,
}

/// Wire shape of a catalog before its items go through `add`.
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>, P: Deserialize<'de>"))]
struct CatalogSnapshot<T, P> {
    items: Vec<T>,
    #[serde(default)]
    pricing: Option<P>,
}

impl<T: Priced, P> From<CatalogSnapshot<T, P>> for Catalog<T, P> {
    fn from(snapshot: CatalogSnapshot<T, P>) -> Self {
        let mut catalog = Catalog {
            items: Vec::with_capacity(snapshot.items.len()),
            pricing: snapshot.pricing,
        };
        for item in snapshot.items {
            catalog.add(item);
        }
        catalog
    }
}

impl<T, P> Default for Catalog<T, P> {
    fn default() -> Self {
        Catalog {
            items: Vec::new(),
            pricing: None,
        }
    }
}

impl<T: Priced, P> Catalog<T, P> {
    /// Creates an empty catalog with no pricing policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding a single product.
    pub fn with_product(product: T) -> Self {
        let mut catalog = Self::new();
        catalog.add(product);
        catalog
    }

    /// Attaches a pricing policy (builder style).
    pub fn with_pricing(mut self, policy: P) -> Self {
        self.pricing = Some(policy);
        self
    }

    /// Attaches or replaces the pricing policy.
    pub fn set_pricing(&mut self, policy: P) {
        self.pricing = Some(policy);
    }

    /// Returns the attached pricing policy, if any.
    pub fn pricing(&self) -> Option<&P> {
        self.pricing.as_ref()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Appends `product` unless an item with the same name is already held.
    ///
    /// A duplicate is silently ignored; this is not an error.
    pub fn add(&mut self, product: T) {
        if self.contains(product.name()) {
            debug!(name = %product.name(), "Ignoring duplicate product");
            return;
        }
        debug!(name = %product.name(), price = %product.price(), "Adding product");
        self.items.push(product);
    }

    /// Removes the first item matching `name`, returning it.
    ///
    /// Removing an absent name is a no-op.
    pub fn remove(&mut self, name: &str) -> Option<T> {
        let index = self.items.iter().position(|item| item.has_name(name))?;
        debug!(name = %name, "Removing product");
        Some(self.items.remove(index))
    }

    /// Doubles every stored price in place (`price + price`).
    pub fn double_prices(&mut self) {
        for item in &mut self.items {
            let doubled = item.price().doubled();
            item.set_price(doubled);
        }
        debug!(count = self.items.len(), "Doubled all prices");
    }

    /// Appends every item of `other`, duplicates included.
    pub fn merge_in_place<Q>(&mut self, other: &Catalog<T, Q>)
    where
        T: Clone,
    {
        self.items.extend(other.items.iter().cloned());
        debug!(count = self.items.len(), "Merged catalog in place");
    }

    /// Returns a new catalog with `self`'s items followed by `other`'s.
    ///
    /// No de-duplication happens, so
    /// `a.merge(&b).count() == a.count() + b.count()` always holds.
    /// The result keeps `self`'s pricing policy.
    pub fn merge<Q>(&self, other: &Catalog<T, Q>) -> Self
    where
        T: Clone,
        P: Clone,
    {
        let mut merged = self.clone();
        merged.merge_in_place(other);
        merged
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Case-insensitive exact-name lookup; first match wins.
    pub fn find(&self, name: &str) -> Option<&T> {
        self.items.iter().find(|item| item.has_name(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Number of items currently held.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Positional access.
    ///
    /// ## Errors
    /// `IndexOutOfRange` when `index >= count()`.
    pub fn product_at(&self, index: usize) -> CoreResult<&T> {
        self.items.get(index).ok_or(CoreError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Name-set equivalence: equal counts and every name in `self` also
    /// appears in `other`. Prices are ignored.
    pub fn equals_by_name<Q>(&self, other: &Catalog<T, Q>) -> bool {
        self.count() == other.count() && self.items.iter().all(|item| other.contains(item.name()))
    }

    /// Sum of stored cost prices.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(Priced::price).sum()
    }

    /// Average stored cost price, or `None` for an empty catalog.
    pub fn average_price(&self) -> Option<Money> {
        Money::average_of(self.total_price(), self.count())
    }

    /// Numbered lines with each item's name and cost price.
    ///
    /// ## Example
    /// ```rust
    /// use market_core::{Catalog, Money, Product};
    ///
    /// let mut market: Catalog<Product> = Catalog::new();
    /// market.add(Product::with_price("Mango", Money::from_cents(1000)));
    /// assert_eq!(market.listing(), vec!["Product No.1: Mango, cost 10.00"]);
    /// ```
    pub fn listing(&self) -> Vec<String> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("Product No.{}: {}, cost {}", i + 1, item.name(), item.price()))
            .collect()
    }
}

// =============================================================================
// Priced Queries
// =============================================================================

/// Name, cost and sale price of one catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub name: String,
    pub cost_price: Money,
    pub sale_price: Money,
}

impl fmt::Display for ProductDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: cost {}, sale {}", self.name, self.cost_price, self.sale_price)
    }
}

impl<T: Priced, P: PricingPolicy> Catalog<T, P> {
    /// Returns the attached policy or `NoPricingPolicy`.
    pub fn policy(&self) -> CoreResult<&P> {
        self.pricing.as_ref().ok_or(CoreError::NoPricingPolicy)
    }

    /// Sale price of the item at `index`.
    ///
    /// ## Errors
    /// - `IndexOutOfRange` (checked first)
    /// - `NoPricingPolicy`
    pub fn sale_price_at(&self, index: usize) -> CoreResult<Money> {
        let item = self.product_at(index)?;
        Ok(self.policy()?.sale_price(item))
    }

    /// Sale price of the stored item named `name`.
    ///
    /// ## Errors
    /// - `ItemNotFound` (checked first)
    /// - `NoPricingPolicy`
    pub fn sale_price_of(&self, name: &str) -> CoreResult<Money> {
        let item = self
            .find(name)
            .ok_or_else(|| CoreError::ItemNotFound(name.to_string()))?;
        Ok(self.policy()?.sale_price(item))
    }

    /// Name, cost price and sale price of the item at `index`.
    pub fn product_detail(&self, index: usize) -> CoreResult<ProductDetail> {
        let item = self.product_at(index)?;
        Ok(ProductDetail {
            name: item.name().to_string(),
            cost_price: item.price(),
            sale_price: self.policy()?.sale_price(item),
        })
    }
}

impl<'a, T, P> IntoIterator for &'a Catalog<T, P> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Priced, P> fmt::Display for Catalog<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.listing() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Product, VatRate};

    fn fruit_market() -> Catalog<Product> {
        let mut market = Catalog::new().with_pricing(VatCalculator::new(VatRate::from_bps(10900)));
        market.add(Product::with_price("Mango", Money::from_cents(1000)));
        market.add(Product::with_price("Apple", Money::from_cents(2000)));
        market
    }

    #[test]
    fn test_add_ignores_duplicate_names() {
        let mut market = fruit_market();
        market.add(Product::with_price("MANGO", Money::from_cents(1)));
        assert_eq!(market.count(), 2);
        assert_eq!(market.find("mango").unwrap().price().cents(), 1000);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let market = fruit_market();
        let names: Vec<&str> = market.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Mango", "Apple"]);
    }

    #[test]
    fn test_remove() {
        let mut market = fruit_market();
        assert!(market.remove("Kiwi").is_none());
        assert_eq!(market.count(), 2);

        let removed = market.remove("apple").unwrap();
        assert_eq!(removed.name(), "Apple");
        assert_eq!(market.count(), 1);
        assert!(!market.contains("Apple"));
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let market = fruit_market();
        assert!(market.find("APPLE").is_some());
        assert!(market.contains("mAnGo"));
        assert!(market.find("App").is_none());
    }

    #[test]
    fn test_product_at() {
        let market = fruit_market();
        assert_eq!(market.product_at(1).unwrap().name(), "Apple");
        assert_eq!(
            market.product_at(2).unwrap_err(),
            CoreError::IndexOutOfRange { index: 2, len: 2 }
        );
    }

    #[test]
    fn test_merge_keeps_duplicates() {
        let market = fruit_market();
        let merged = market.merge(&market);
        assert_eq!(merged.count(), 4);
        assert_eq!(market.count(), 2);
        assert!(merged.pricing().is_some());
    }

    #[test]
    fn test_merge_in_place_accepts_other_policy_type() {
        let mut market = fruit_market();
        let plain: Catalog<Product, ()> =
            Catalog::with_product(Product::with_price("Banana", Money::from_cents(5000)));
        market.merge_in_place(&plain);
        assert_eq!(market.count(), 3);
        assert_eq!(market.product_at(2).unwrap().name(), "Banana");
    }

    #[test]
    fn test_double_prices() {
        let mut market = fruit_market();
        market.double_prices();
        assert_eq!(market.find("Mango").unwrap().price().cents(), 2000);
        assert_eq!(market.find("Apple").unwrap().price().cents(), 4000);
    }

    #[test]
    fn test_equals_by_name() {
        let market = fruit_market();
        let mut reordered: Catalog<Product> = Catalog::new();
        reordered.add(Product::with_price("apple", Money::from_cents(1)));
        reordered.add(Product::with_price("MANGO", Money::from_cents(2)));
        assert!(market.equals_by_name(&reordered));

        reordered.remove("apple");
        assert!(!market.equals_by_name(&reordered));
    }

    #[test]
    fn test_average_and_total() {
        let market = fruit_market();
        assert_eq!(market.total_price().cents(), 3000);
        assert_eq!(market.average_price(), Some(Money::from_cents(1500)));

        let empty: Catalog<Product> = Catalog::new();
        assert_eq!(empty.total_price(), Money::zero());
        assert_eq!(empty.average_price(), None);
    }

    #[test]
    fn test_priced_queries() {
        let market = fruit_market();
        assert_eq!(market.sale_price_at(0).unwrap().cents(), 1090);
        assert_eq!(market.sale_price_of("apple").unwrap().cents(), 2180);
        assert_eq!(
            market.sale_price_of("Kiwi").unwrap_err(),
            CoreError::ItemNotFound("Kiwi".to_string())
        );

        let detail = market.product_detail(1).unwrap();
        assert_eq!(detail.to_string(), "Apple: cost 20.00, sale 21.80");
    }

    #[test]
    fn test_priced_queries_without_policy() {
        let market: Catalog<Product> =
            Catalog::with_product(Product::with_price("Mango", Money::from_cents(1000)));
        assert_eq!(market.sale_price_at(0).unwrap_err(), CoreError::NoPricingPolicy);
        assert_eq!(market.sale_price_of("Mango").unwrap_err(), CoreError::NoPricingPolicy);
        assert!(matches!(
            market.sale_price_at(7),
            Err(CoreError::IndexOutOfRange { index: 7, len: 1 })
        ));
    }

    #[test]
    fn test_listing_and_display() {
        let market = fruit_market();
        assert_eq!(
            market.listing(),
            vec![
                "Product No.1: Mango, cost 10.00".to_string(),
                "Product No.2: Apple, cost 20.00".to_string(),
            ]
        );
        assert_eq!(
            market.to_string(),
            "Product No.1: Mango, cost 10.00\nProduct No.2: Apple, cost 20.00\n"
        );
    }

    #[test]
    fn test_double_prices_saturates() {
        let mut market: Catalog<Product> =
            Catalog::with_product(Product::with_price("Gold", Money::from_cents(i64::MAX / 2 + 1)));
        market.double_prices();
        assert_eq!(market.find("Gold").unwrap().price().cents(), i64::MAX);
    }

    #[test]
    fn test_deserialize_goes_through_add() {
        let json = r#"{
            "items": [
                {"name": "Mango", "price": 1000},
                {"name": "MANGO", "price": 1},
                {"name": "Apple", "price": 2000}
            ],
            "pricing": {"rate": 10900}
        }"#;
        let market: Catalog<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(market.count(), 2);
        assert_eq!(market.find("mango").unwrap().price().cents(), 1000);
        assert_eq!(market.sale_price_of("Apple").unwrap().cents(), 2180);
    }
}
