//! # Wallet
//!
//! A currency-labelled balance belonging (optionally) to a customer.
//!
//! ## Ownership
//! ```text
//! Customer ──owns──► Option<Wallet>
//!    ▲                    │
//!    └──── owner: Option<CustomerId> (lookup key only, never owning)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::customer::CustomerId;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Funds Capability
// =============================================================================

/// Anything holding a balance in one currency.
///
/// The sale operation is generic over this trait.
pub trait Funds {
    /// Currency label (uppercase, e.g. `USD`).
    fn currency(&self) -> &str;

    fn balance(&self) -> Money;

    /// Adds `amount` to the balance. Always succeeds.
    fn credit(&mut self, amount: Money);

    /// Overwrites the balance.
    fn set_balance(&mut self, amount: Money);
}

// =============================================================================
// Wallet
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    currency: String,
    balance: Money,
    owner: Option<CustomerId>,
}

impl Wallet {
    /// Creates an unowned wallet; the currency label is uppercased.
    pub fn new(currency: impl AsRef<str>, balance: Money) -> Self {
        Wallet {
            currency: currency.as_ref().trim().to_uppercase(),
            balance,
            owner: None,
        }
    }

    /// The customer currently holding this wallet.
    pub fn owner(&self) -> Option<CustomerId> {
        self.owner
    }

    pub(crate) fn set_owner(&mut self, owner: Option<CustomerId>) {
        self.owner = owner;
    }

    /// Combined balance of `self` and `other`.
    ///
    /// ## Errors
    /// `CurrencyMismatch` when the currency labels differ.
    ///
    /// ## Example
    /// ```rust
    /// use market_core::{Money, Wallet};
    ///
    /// let a = Wallet::new("usd", Money::from_cents(1000));
    /// let b = Wallet::new("USD", Money::from_cents(250));
    /// assert_eq!(a.sum(&b).unwrap().cents(), 1250);
    /// ```
    pub fn sum<F: Funds>(&self, other: &F) -> CoreResult<Money> {
        if !self.currency.eq_ignore_ascii_case(other.currency()) {
            return Err(CoreError::CurrencyMismatch {
                left: self.currency.clone(),
                right: other.currency().to_string(),
            });
        }
        Ok(self.balance + other.balance())
    }
}

impl Funds for Wallet {
    fn currency(&self) -> &str {
        &self.currency
    }

    fn balance(&self) -> Money {
        self.balance
    }

    fn credit(&mut self, amount: Money) {
        self.balance += amount;
    }

    fn set_balance(&mut self, amount: Money) {
        self.balance = amount;
    }
}

impl fmt::Display for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.balance, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_currency() {
        let wallet = Wallet::new(" thb ", Money::from_major(1000));
        assert_eq!(wallet.currency(), "THB");
        assert_eq!(wallet.to_string(), "1000.00 THB");
        assert!(wallet.owner().is_none());
    }

    #[test]
    fn test_credit_and_set_balance() {
        let mut wallet = Wallet::new("USD", Money::from_cents(100));
        wallet.credit(Money::from_cents(250));
        assert_eq!(wallet.balance().cents(), 350);

        wallet.set_balance(Money::from_cents(1));
        assert_eq!(wallet.balance().cents(), 1);
    }

    #[test]
    fn test_credit_saturates_at_max() {
        let mut wallet = Wallet::new("USD", Money::from_cents(i64::MAX));
        wallet.credit(Money::from_cents(1));
        assert_eq!(wallet.balance().cents(), i64::MAX);
    }

    #[test]
    fn test_sum_requires_same_currency() {
        let usd = Wallet::new("USD", Money::from_cents(100));
        let thb = Wallet::new("THB", Money::from_cents(100));
        assert_eq!(
            usd.sum(&thb).unwrap_err(),
            CoreError::CurrencyMismatch {
                left: "USD".to_string(),
                right: "THB".to_string(),
            }
        );
        assert_eq!(usd.sum(&usd).unwrap().cents(), 200);
    }
}
