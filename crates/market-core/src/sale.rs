//! # Sale Operation
//!
//! Debits a wallet by the sale price of a catalog item.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sell(catalog, "Apple", wallet)                                         │
//! │       │                                                                 │
//! │       ├── catalog.contains("Apple")?  no ──► ItemNotFound               │
//! │       │                                                                 │
//! │       ├── catalog.policy()?           none ─► NoPricingPolicy           │
//! │       │                                                                 │
//! │       ├── price = policy.sale_price(<stored Apple>)                     │
//! │       │                                                                 │
//! │       ├── result = balance - price                                      │
//! │       │     result <= 0 ──► InsufficientFunds (wallet untouched)        │
//! │       │                                                                 │
//! │       └── wallet.set_balance(result) ──► SaleReceipt                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two entry points exist and they price differently:
//! - [`sell`] prices the catalog's **stored** item for the name.
//! - [`sell_instance`] prices the **passed-in** item, using the catalog only
//!   for the existence check.
//!
//! Selling never removes the item from the catalog; there is no stock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::PricingPolicy;
use crate::types::Priced;
use crate::wallet::Funds;

/// Record of a successful sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleReceipt {
    /// Name as stored in the catalog.
    pub product_name: String,
    pub sale_price: Money,
    /// Wallet balance after the debit.
    pub new_balance: Money,
    pub sold_at: DateTime<Utc>,
}

/// Sells the catalog's stored item named `name`.
///
/// ## Example
/// ```rust
/// use market_core::{sell, Catalog, Money, Product, VatCalculator, VatRate, Wallet, Funds};
///
/// let mut market: Catalog<Product> = Catalog::new()
///     .with_pricing(VatCalculator::new(VatRate::from_bps(10900)));
/// market.add(Product::with_price("Apple", Money::from_cents(2000)));
///
/// let mut wallet = Wallet::new("USD", Money::from_major(1000));
/// let receipt = sell(&market, "apple", &mut wallet).unwrap();
/// assert_eq!(receipt.new_balance.cents(), 97820);
/// assert_eq!(wallet.balance().cents(), 97820);
/// ```
pub fn sell<T, P, F>(catalog: &Catalog<T, P>, name: &str, wallet: &mut F) -> CoreResult<SaleReceipt>
where
    T: Priced,
    P: PricingPolicy,
    F: Funds,
{
    let stored = catalog.find(name).ok_or_else(|| {
        warn!(name = %name, "Item doesn't exist");
        CoreError::ItemNotFound(name.to_string())
    })?;
    let price = catalog.policy()?.sale_price(stored);
    settle(stored.name(), price, wallet)
}

/// Sells `product`, priced from the instance itself.
///
/// The catalog must still contain an item with the same name.
pub fn sell_instance<T, P, I, F>(
    catalog: &Catalog<T, P>,
    product: &I,
    wallet: &mut F,
) -> CoreResult<SaleReceipt>
where
    T: Priced,
    P: PricingPolicy,
    I: Priced + ?Sized,
    F: Funds,
{
    if !catalog.contains(product.name()) {
        warn!(name = %product.name(), "Item doesn't exist");
        return Err(CoreError::ItemNotFound(product.name().to_string()));
    }
    let price = catalog.policy()?.sale_price(product);
    settle(product.name(), price, wallet)
}

/// Debits `wallet` by `price` if the remaining balance stays strictly positive.
fn settle<F: Funds>(name: &str, price: Money, wallet: &mut F) -> CoreResult<SaleReceipt> {
    let available = wallet.balance();
    let result = available - price;

    if !result.is_positive() {
        warn!(
            name = %name,
            price = %price,
            balance = %available,
            "not enough money"
        );
        return Err(CoreError::InsufficientFunds {
            needed: price,
            available,
        });
    }

    wallet.set_balance(result);
    info!(
        name = %name,
        price = %price,
        new_balance = %result,
        currency = %wallet.currency(),
        "Sale completed"
    );

    Ok(SaleReceipt {
        product_name: name.to_string(),
        sale_price: price,
        new_balance: result,
        sold_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::VatCalculator;
    use crate::types::{Product, VatRate};
    use crate::wallet::Wallet;

    fn fruit_market() -> Catalog<Product> {
        let mut market = Catalog::new().with_pricing(VatCalculator::new(VatRate::from_bps(10900)));
        market.add(Product::with_price("Mango", Money::from_cents(1000)));
        market.add(Product::with_price("Apple", Money::from_cents(2000)));
        market
    }

    #[test]
    fn test_sell_debits_wallet() {
        let market = fruit_market();
        let mut wallet = Wallet::new("USD", Money::from_major(1000));

        let receipt = sell(&market, "Apple", &mut wallet).unwrap();
        assert_eq!(receipt.product_name, "Apple");
        assert_eq!(receipt.sale_price.cents(), 2180);
        assert_eq!(wallet.balance().cents(), 97820);

        let receipt = sell(&market, "Mango", &mut wallet).unwrap();
        assert_eq!(receipt.new_balance.cents(), 96730);
        assert_eq!(wallet.balance().cents(), 96730);

        // price list, not inventory
        assert_eq!(market.count(), 2);
    }

    #[test]
    fn test_sell_unknown_item_leaves_wallet_untouched() {
        let market = fruit_market();
        let mut wallet = Wallet::new("USD", Money::from_major(10));
        let err = sell(&market, "Kiwi", &mut wallet).unwrap_err();
        assert_eq!(err, CoreError::ItemNotFound("Kiwi".to_string()));
        assert_eq!(wallet.balance().cents(), 1000);
    }

    #[test]
    fn test_exact_balance_is_insufficient() {
        let market = fruit_market();
        let mut wallet = Wallet::new("USD", Money::from_cents(2180));
        let err = sell(&market, "Apple", &mut wallet).unwrap_err();
        assert_eq!(
            err,
            CoreError::InsufficientFunds {
                needed: Money::from_cents(2180),
                available: Money::from_cents(2180),
            }
        );
        assert_eq!(wallet.balance().cents(), 2180);
    }

    #[test]
    fn test_one_cent_left_is_success() {
        let market = fruit_market();
        let mut wallet = Wallet::new("USD", Money::from_cents(2181));
        let receipt = sell(&market, "Apple", &mut wallet).unwrap();
        assert_eq!(receipt.new_balance.cents(), 1);
    }

    #[test]
    fn test_oversized_price_never_credits_wallet() {
        let mut market = fruit_market();
        market.add(Product::with_price("Yacht", Money::from_cents(9_000_000_000_000_000_000)));
        let mut wallet = Wallet::new("USD", Money::from_major(10));

        let err = sell(&market, "Yacht", &mut wallet).unwrap_err();
        assert_eq!(
            err,
            CoreError::InsufficientFunds {
                needed: Money::from_cents(i64::MAX),
                available: Money::from_major(10),
            }
        );
        assert_eq!(wallet.balance().cents(), 1000);
    }

    #[test]
    fn test_sell_without_policy() {
        let market: Catalog<Product> =
            Catalog::with_product(Product::with_price("Mango", Money::from_cents(1000)));
        let mut wallet = Wallet::new("USD", Money::from_major(10));
        assert_eq!(
            sell(&market, "Mango", &mut wallet).unwrap_err(),
            CoreError::NoPricingPolicy
        );
        assert_eq!(wallet.balance().cents(), 1000);
    }

    #[test]
    fn test_sell_instance_without_policy() {
        let market: Catalog<Product> =
            Catalog::with_product(Product::with_price("Mango", Money::from_cents(1000)));
        let mut wallet = Wallet::new("USD", Money::from_major(10));
        let mango = Product::with_price("mango", Money::from_cents(100));
        assert_eq!(
            sell_instance(&market, &mango, &mut wallet).unwrap_err(),
            CoreError::NoPricingPolicy
        );
        assert_eq!(wallet.balance().cents(), 1000);
    }

    #[test]
    fn test_sell_by_name_uses_stored_price() {
        let market = fruit_market();
        let mut wallet = Wallet::new("USD", Money::from_major(1000));
        let receipt = sell(&market, "APPLE", &mut wallet).unwrap();
        assert_eq!(receipt.sale_price.cents(), 2180);
        assert_eq!(receipt.product_name, "Apple");
    }

    #[test]
    fn test_sell_instance_uses_instance_price() {
        let market = fruit_market();
        let mut wallet = Wallet::new("USD", Money::from_major(1000));
        let cheap_apple = Product::with_price("apple", Money::from_cents(100));

        let receipt = sell_instance(&market, &cheap_apple, &mut wallet).unwrap();
        assert_eq!(receipt.sale_price.cents(), 109);
        assert_eq!(wallet.balance().cents(), 100_000 - 109);
    }

    #[test]
    fn test_sell_instance_requires_catalog_entry() {
        let market = fruit_market();
        let mut wallet = Wallet::new("USD", Money::from_major(1000));
        let kiwi = Product::with_price("Kiwi", Money::from_cents(100));
        assert!(matches!(
            sell_instance(&market, &kiwi, &mut wallet),
            Err(CoreError::ItemNotFound(name)) if name == "Kiwi"
        ));
    }

    #[test]
    fn test_zero_priced_item_sells_at_floor() {
        let mut market = fruit_market();
        market.add(Product::new("Sample"));
        let mut wallet = Wallet::new("USD", Money::from_major(5));
        let receipt = sell(&market, "sample", &mut wallet).unwrap();
        assert_eq!(receipt.sale_price.cents(), 100);
        assert_eq!(wallet.balance().cents(), 400);
    }
}
