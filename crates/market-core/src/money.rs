//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    20.0 * 1.09 = 21.800000000000001  ❌                                 │
//! │    1000.0 - 21.8 - 10.9 = 967.3000000000001                             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    2000 cents × 10900 bps / 10000 = 2180 cents                          │
//! │    100000 - 2180 - 1090 = 96730 cents  ✅ exact                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use market_core::money::Money;
//!
//! let price = Money::from_cents(1000); // 10.00
//! let doubled = price.doubled();       // 20.00
//! let total = price + Money::from_cents(500);
//! assert_eq!(total.cents(), 1500);
//! assert_eq!(doubled.to_string(), "20.00");
//!
//! // Parse from text (config files, env vars) without touching floats
//! let parsed: Money = "967.30".parse().unwrap();
//! assert_eq!(parsed.cents(), 96730);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::VatRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: `double_prices` has no guard, so negative prices
///   must survive arithmetic unchanged
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **No currency**: the currency label lives on the wallet
/// - **Saturating arithmetic**: `+`, `-`, `*`, `doubled`, `apply_rate` and
///   `Sum` clamp to `i64::MIN..=i64::MAX` instead of panicking or wrapping,
///   so a credit always succeeds and an oversized sale price can never turn
///   negative
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► PricingPolicy::sale_price ──► Wallet.balance - sale price
///       │
///       └──► Catalog::average_price / total_price
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use market_core::money::Money;
    ///
    /// let price = Money::from_cents(1090); // Represents 10.90
    /// assert_eq!(price.cents(), 1090);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use market_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(10, 90).cents(), 1090);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Creates a whole-unit amount (`from_major(1000)` = 1000.00).
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns `self + self`, saturating at the `i64` bounds.
    #[inline]
    pub const fn doubled(&self) -> Self {
        Money(self.0.saturating_add(self.0))
    }

    /// Multiplies by a VAT multiplier, rounding half up to the nearest cent.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`, in i128 so large
    /// amounts cannot overflow mid-calculation. A result outside the `i64`
    /// range saturates to the nearest bound.
    ///
    /// ## Example
    /// ```rust
    /// use market_core::money::Money;
    /// use market_core::types::VatRate;
    ///
    /// let rate = VatRate::from_bps(10900); // ×1.09
    /// assert_eq!(Money::from_cents(1000).apply_rate(rate).cents(), 1090);
    /// assert_eq!(Money::from_cents(999).apply_rate(rate).cents(), 1089); // 1088.91
    /// ```
    pub fn apply_rate(&self, rate: VatRate) -> Money {
        let scaled = (self.0 as i128 * rate.bps() as i128 + 5000).div_euclid(10000);
        let cents = i64::try_from(scaled)
            .unwrap_or(if scaled.is_negative() { i64::MIN } else { i64::MAX });
        Money::from_cents(cents)
    }

    /// Divides evenly across `count` parts, rounding half up.
    ///
    /// Returns `None` when `count` is zero.
    pub fn average_of(total: Money, count: usize) -> Option<Money> {
        if count == 0 {
            return None;
        }
        let count = count as i128;
        let avg = (total.0 as i128 * 2 + count).div_euclid(count * 2);
        Some(Money::from_cents(avg as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the plain amount with two decimals (`967.30`).
///
/// ## Note
/// No currency symbol: wallets render their own currency label.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.cents_part())
    }
}

/// Parses `"12"`, `"12.3"`, `"12.34"` or `"-0.50"` into exact cents.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (major, minor) = match digits.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (digits, ""),
        };

        if major.is_empty() || !major.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected digits before the decimal point"));
        }
        if minor.len() > 2 || !minor.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("at most two decimal digits are allowed"));
        }

        let major: i64 = major.parse().map_err(|_| invalid("amount is too large"))?;
        let minor: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| invalid("bad fraction"))? * 10,
            _ => minor.parse().map_err(|_| invalid("bad fraction"))?,
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid("amount is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
