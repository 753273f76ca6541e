//! # market-core: Pure Business Logic for the Market Ledger
//!
//! An in-memory price list of products, a VAT calculator, wallets, and the
//! guarded sale that ties them together. Zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Market Ledger Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    market-cli                                   │   │
//! │  │    config (TOML + env) ──► tracing ──► demo run                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ market-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │  pricing  │  │  wallet   │  │   sale    │  │   │
//! │  │   │ Catalog<T>│  │ VatCalc   │  │  Wallet   │  │ sell()    │  │   │
//! │  │   │  Product  │  │  VatRate  │  │ Customer  │  │ Receipt   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Product`, `VatRate`, the `Priced` capability
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - `PricingPolicy` and the fixed-rate `VatCalculator`
//! - [`catalog`] - `Catalog<T, P>` price list
//! - [`wallet`] - `Wallet` and the `Funds` capability
//! - [`customer`] - `Customer` owning an optional wallet
//! - [`sale`] - `sell` / `sell_instance`
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use market_core::{sell, Catalog, Funds, Money, Product, VatCalculator, VatRate, Wallet};
//!
//! let mut market: Catalog<Product> = Catalog::new()
//!     .with_pricing(VatCalculator::new(VatRate::from_multiplier(1.09)));
//! market.add(Product::with_price("Mango", Money::from_cents(1000)));
//! market.add(Product::with_price("Apple", Money::from_cents(2000)));
//!
//! let mut wallet = Wallet::new("USD", Money::from_major(1000));
//! sell(&market, "Apple", &mut wallet).unwrap();
//! sell(&market, "Mango", &mut wallet).unwrap();
//! assert_eq!(wallet.balance().to_string(), "967.30");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod customer;
pub mod error;
pub mod money;
pub mod pricing;
pub mod sale;
pub mod types;
pub mod validation;
pub mod wallet;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, ProductDetail};
pub use customer::{Customer, CustomerId};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{PricingPolicy, VatCalculator};
pub use sale::{sell, sell_instance, SaleReceipt};
pub use types::{names_match, Priced, Product, VatRate};
pub use wallet::{Funds, Wallet};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sale price charged for any item whose stored price is zero or negative.
pub const SALE_PRICE_FLOOR: Money = Money::from_cents(100);

/// Default VAT multiplier in basis points (×1.09, i.e. 9% VAT).
pub const DEFAULT_VAT_MULTIPLIER_BPS: u32 = 10900;

/// Lowest accepted VAT multiplier (×1.00).
pub const MIN_VAT_MULTIPLIER_BPS: u32 = 10000;

/// Highest accepted VAT multiplier (×2.00).
pub const MAX_VAT_MULTIPLIER_BPS: u32 = 20000;

/// Default wallet currency label.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Longest accepted product name, in characters.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
