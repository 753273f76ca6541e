//! # Error Types
//!
//! Domain-specific error types for market-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  market-core errors (this file)                                        │
//! │  ├── CoreError        - Catalog, pricing and sale failures             │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  market-cli errors (separate crate)                                    │
//! │  └── CliError         - Config file / environment failures             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, index, amounts)
//! 3. Errors are enum variants, never String
//! 4. No operation panics on bad input; every failure is one of these

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// All of these are recoverable: the operation that produced them made no
/// state change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Requested product name is not in the catalog.
    #[error("Item doesn't exist: {0}")]
    ItemNotFound(String),

    /// Wallet balance would not remain strictly positive after the sale.
    ///
    /// ## User Workflow
    /// ```text
    /// Wallet: 21.80
    ///      │
    ///      ▼
    /// sell("Apple") → sale price 21.80
    ///      │
    ///      ▼
    /// 21.80 - 21.80 = 0.00  (not > 0)
    ///      │
    ///      ▼
    /// InsufficientFunds { needed: 21.80, available: 21.80 }
    /// ```
    #[error("not enough money: need {needed}, have {available}")]
    InsufficientFunds { needed: Money, available: Money },

    /// A priced query was made on a catalog with no pricing policy attached.
    #[error("Catalog has no pricing policy attached")]
    NoPricingPolicy,

    /// Positional access past the end of the catalog.
    #[error("Index {index} out of range for catalog of {len} products")]
    IndexOutOfRange { index: usize, len: usize },

    /// Two wallets with different currency labels were combined.
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch { left: String, right: String },

    /// Customer tried to buy without holding a wallet.
    #[error("Customer {0} has no wallet")]
    NoWallet(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation before business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. malformed amount, bad currency code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientFunds {
            needed: Money::from_cents(2180),
            available: Money::from_cents(1000),
        };
        assert_eq!(err.to_string(), "not enough money: need 21.80, have 10.00");

        let err = CoreError::ItemNotFound("Kiwi".to_string());
        assert_eq!(err.to_string(), "Item doesn't exist: Kiwi");

        let err = CoreError::IndexOutOfRange { index: 5, len: 2 };
        assert_eq!(
            err.to_string(),
            "Index 5 out of range for catalog of 2 products"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
