//! # Market Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     MARKET_VAT_RATE=1.09                                               │
//! │     MARKET_CURRENCY=THB                                                │
//! │     MARKET_STARTING_BALANCE=1000.00                                    │
//! │     MARKET_CUSTOMER=Somchai                                            │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/ledger/market.toml (Linux)                               │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     USD, ×1.09, 1000.00                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! currency = "THB"
//! vat_multiplier_bps = 10700
//! starting_balance_cents = 100000
//! customer_name = "Somchai"
//! ```

use std::path::{Path, PathBuf};

use market_core::validation::{
    validate_balance_cents, validate_currency_code, validate_vat_multiplier_bps,
};
use market_core::{Money, VatRate, DEFAULT_CURRENCY, DEFAULT_VAT_MULTIPLIER_BPS};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::CliResult;

const CONFIG_FILE_NAME: &str = "market.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Wallet currency label.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// VAT multiplier in basis points (10900 = ×1.09).
    #[serde(default = "default_vat_multiplier_bps")]
    pub vat_multiplier_bps: u32,

    /// Opening wallet balance in cents.
    #[serde(default = "default_starting_balance_cents")]
    pub starting_balance_cents: i64,

    #[serde(default = "default_customer_name")]
    pub customer_name: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_vat_multiplier_bps() -> u32 {
    DEFAULT_VAT_MULTIPLIER_BPS
}

fn default_starting_balance_cents() -> i64 {
    100_000
}

fn default_customer_name() -> String {
    "Customer".to_string()
}

impl Default for MarketConfig {
    fn default() -> Self {
        MarketConfig {
            currency: default_currency(),
            vat_multiplier_bps: default_vat_multiplier_bps(),
            starting_balance_cents: default_starting_balance_cents(),
            customer_name: default_customer_name(),
        }
    }
}

impl MarketConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (market.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading market config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Writes the configuration as TOML.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        info!(?path, "Market config saved");
        Ok(())
    }

    pub fn validate(&self) -> CliResult<()> {
        validate_currency_code(&self.currency)?;
        validate_vat_multiplier_bps(self.vat_multiplier_bps)?;
        validate_balance_cents(self.starting_balance_cents)?;
        Ok(())
    }

    /// Applies `MARKET_*` overrides read through `lookup`.
    ///
    /// Unparseable values are logged and ignored.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(rate) = lookup("MARKET_VAT_RATE") {
            match rate.trim().parse::<f64>() {
                Ok(multiplier) if multiplier.is_finite() && multiplier >= 0.0 => {
                    debug!(rate = %rate, "Overriding VAT rate from environment");
                    self.vat_multiplier_bps = VatRate::from_multiplier(multiplier).bps();
                }
                _ => warn!(rate = %rate, "Ignoring invalid MARKET_VAT_RATE"),
            }
        }

        if let Some(currency) = lookup("MARKET_CURRENCY") {
            self.currency = currency.trim().to_uppercase();
        }

        if let Some(balance) = lookup("MARKET_STARTING_BALANCE") {
            match balance.parse::<Money>() {
                Ok(amount) => self.starting_balance_cents = amount.cents(),
                Err(e) => warn!(balance = %balance, error = %e, "Ignoring invalid MARKET_STARTING_BALANCE"),
            }
        }

        if let Some(name) = lookup("MARKET_CUSTOMER") {
            self.customer_name = name;
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "market", "ledger")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn vat_rate(&self) -> VatRate {
        VatRate::from_bps(self.vat_multiplier_bps)
    }

    pub fn starting_balance(&self) -> Money {
        Money::from_cents(self.starting_balance_cents)
    }
}
