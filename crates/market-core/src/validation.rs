//! # Validation Module
//!
//! Input validation for values that enter the ledger from outside
//! (config files, environment variables, command-line input).
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: market-cli                                                   │
//! │  ├── TOML / env parsing (serde, FromStr)                               │
//! │  └── MarketConfig::validate() → THIS MODULE                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: market-core                                                  │
//! │  ├── Product::validated() → THIS MODULE                                │
//! │  └── Catalog / Sale rules (CoreError)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_PRODUCT_NAME_LEN, MAX_VAT_MULTIPLIER_BPS, MIN_VAT_MULTIPLIER_BPS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use market_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Mango").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a currency label.
///
/// ## Rules
/// - Exactly three ASCII letters (ISO 4217 style: `USD`, `THB`, `EUR`)
/// - Case-insensitive; callers normalize to uppercase
pub fn validate_currency_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "currency".to_string(),
        });
    }

    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidFormat {
            field: "currency".to_string(),
            reason: "must be a three-letter code".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stored price in cents.
///
/// ## Rules
/// - Must be non-negative (zero is allowed and prices at the 1.00 floor)
///
/// ## Example
/// ```rust
/// use market_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1000).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a VAT multiplier in basis points.
///
/// ## Rules
/// - Between 10000 (×1.00, no VAT) and 20000 (×2.00, 100% VAT)
pub fn validate_vat_multiplier_bps(bps: u32) -> ValidationResult<()> {
    if !(MIN_VAT_MULTIPLIER_BPS..=MAX_VAT_MULTIPLIER_BPS).contains(&bps) {
        return Err(ValidationError::OutOfRange {
            field: "vat_multiplier_bps".to_string(),
            min: MIN_VAT_MULTIPLIER_BPS as i64,
            max: MAX_VAT_MULTIPLIER_BPS as i64,
        });
    }

    Ok(())
}

/// Validates an opening wallet balance in cents.
pub fn validate_balance_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "balance".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
