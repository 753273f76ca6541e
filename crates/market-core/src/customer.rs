//! # Customer
//!
//! A named buyer that may hold one wallet.
//!
//! ## Lifecycle
//! ```text
//! Customer::new("Somchai")
//!      │
//!      ▼
//! give_wallet(wallet)   → wallet.owner = Some(customer.id)
//!      │
//!      ▼
//! buy(&market, "Apple") → sell(&market, "Apple", wallet)
//!      │
//!      ▼
//! release()             → logs the teardown, hands the wallet back unowned
//! ```
//!
//! Teardown is explicit: dropping a `Customer` without `release` logs
//! nothing.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::pricing::PricingPolicy;
use crate::sale::{sell, SaleReceipt};
use crate::types::Priced;
use crate::wallet::Wallet;

/// Customer identifier (UUID v4).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(Uuid);

impl CustomerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CustomerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    wallet: Option<Wallet>,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        let customer = Customer {
            id: CustomerId::new(),
            name: name.into(),
            wallet: None,
        };
        info!(id = %customer.id, name = %customer.name, "Customer created");
        customer
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wallet(&self) -> Option<&Wallet> {
        self.wallet.as_ref()
    }

    pub fn wallet_mut(&mut self) -> Option<&mut Wallet> {
        self.wallet.as_mut()
    }

    /// Hands `wallet` to this customer, returning any wallet it replaces.
    pub fn give_wallet(&mut self, mut wallet: Wallet) -> Option<Wallet> {
        wallet.set_owner(Some(self.id));
        let previous = self.wallet.replace(wallet);
        previous.map(detach)
    }

    /// Takes the wallet away, clearing its owner.
    pub fn take_wallet(&mut self) -> Option<Wallet> {
        self.wallet.take().map(detach)
    }

    /// Buys `name` from `catalog` with this customer's wallet.
    ///
    /// ## Errors
    /// `NoWallet` when the customer holds no wallet, otherwise whatever
    /// [`sell`] reports.
    pub fn buy<T, P>(&mut self, catalog: &Catalog<T, P>, name: &str) -> CoreResult<SaleReceipt>
    where
        T: Priced,
        P: PricingPolicy,
    {
        let wallet = self
            .wallet
            .as_mut()
            .ok_or_else(|| CoreError::NoWallet(self.name.clone()))?;
        sell(catalog, name, wallet)
    }

    /// Ends this customer's session, returning the unowned wallet.
    pub fn release(mut self) -> Option<Wallet> {
        info!(id = %self.id, name = %self.name, "Customer released");
        self.take_wallet()
    }
}

fn detach(mut wallet: Wallet) -> Wallet {
    wallet.set_owner(None);
    wallet
}
