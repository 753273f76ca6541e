//! # Pricing Policy
//!
//! Turns a stored cost price into a sale price.
//!
//! ## Calculation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sale_price(item)                                                       │
//! │                                                                         │
//! │    item.price() <= 0.00 ──► 1.00 (floor, any rate)                      │
//! │    item.price()  > 0.00 ──► item.price() × rate                         │
//! │                                                                         │
//! │  Mango 10.00 × 1.09 = 10.90                                             │
//! │  Apple 20.00 × 1.09 = 21.80                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Priced, VatRate};
use crate::SALE_PRICE_FLOOR;

/// Computes the sale price of an item.
///
/// Implementations must be pure: the result depends only on `item`.
pub trait PricingPolicy {
    fn sale_price<T: Priced + ?Sized>(&self, item: &T) -> Money;
}

/// Fixed-rate VAT calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VatCalculator {
    rate: VatRate,
}

impl VatCalculator {
    pub const fn new(rate: VatRate) -> Self {
        VatCalculator { rate }
    }

    pub const fn rate(&self) -> VatRate {
        self.rate
    }
}

impl PricingPolicy for VatCalculator {
    fn sale_price<T: Priced + ?Sized>(&self, item: &T) -> Money {
        let price = item.price();
        if !price.is_positive() {
            return SALE_PRICE_FLOOR;
        }
        price.apply_rate(self.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn calculator() -> VatCalculator {
        VatCalculator::new(VatRate::from_bps(10900))
    }

    #[test]
    fn test_sale_price_applies_rate() {
        let mango = Product::with_price("Mango", Money::from_cents(1000));
        let apple = Product::with_price("Apple", Money::from_cents(2000));
        assert_eq!(calculator().sale_price(&mango).cents(), 1090);
        assert_eq!(calculator().sale_price(&apple).cents(), 2180);
    }

    #[test]
    fn test_non_positive_price_hits_floor() {
        let free = Product::new("Sample");
        let negative = Product::with_price("Refund", Money::from_cents(-300));
        assert_eq!(calculator().sale_price(&free), SALE_PRICE_FLOOR);
        assert_eq!(calculator().sale_price(&negative), SALE_PRICE_FLOOR);

        let steep = VatCalculator::new(VatRate::from_bps(20000));
        assert_eq!(steep.sale_price(&free).cents(), 100);
    }

    #[test]
    fn test_default_calculator_is_identity() {
        let apple = Product::with_price("Apple", Money::from_cents(2000));
        assert_eq!(VatCalculator::default().sale_price(&apple).cents(), 2000);
    }
}
