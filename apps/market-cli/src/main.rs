//! # Market Ledger CLI
//!
//! Runs a fruit-market session against the configured VAT rate and wallet.
//!
//! ## Usage
//! ```bash
//! cargo run -p market-cli
//! cargo run -p market-cli -- --config ./market.toml --json
//! MARKET_VAT_RATE=1.07 RUST_LOG=debug cargo run -p market-cli
//! ```

mod config;
mod error;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use market_core::{Catalog, Customer, Money, Product, VatCalculator, Wallet};
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::config::MarketConfig;
use crate::error::CliResult;

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn,market_core=info,market=info";

struct Args {
    config: Option<PathBuf>,
    write_config: Option<PathBuf>,
    json: bool,
}

fn main() -> ExitCode {
    init_tracing();

    let Some(args) = parse_args() else {
        return ExitCode::SUCCESS;
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Market run failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Parses command-line flags; returns `None` after printing help.
fn parse_args() -> Option<Args> {
    let argv: Vec<String> = env::args().collect();
    let mut args = Args {
        config: None,
        write_config: None,
        json: false,
    };

    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < argv.len() {
                    args.config = Some(PathBuf::from(&argv[i + 1]));
                    i += 1;
                }
            }
            "--write-config" => {
                if i + 1 < argv.len() {
                    args.write_config = Some(PathBuf::from(&argv[i + 1]));
                    i += 1;
                }
            }
            "--json" => args.json = true,
            "--help" | "-h" => {
                println!("Market Ledger");
                println!();
                println!("Usage: market [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --config <PATH>      Config file (default: platform config dir)");
                println!("      --write-config <PATH> Write the effective config as TOML");
                println!("      --json               Print the final catalog as JSON");
                println!("  -h, --help               Show this help message");
                return None;
            }
            other => eprintln!("ignoring unknown argument: {}", other),
        }
        i += 1;
    }

    Some(args)
}

fn run(args: Args) -> CliResult<()> {
    let config = MarketConfig::load(args.config)?;
    if let Some(path) = &args.write_config {
        config.save(path)?;
    }

    println!("Market Ledger");
    println!("=============");
    println!("VAT: {}", config.vat_rate());
    println!();

    let mut market: Catalog<Product> =
        Catalog::new().with_pricing(VatCalculator::new(config.vat_rate()));
    market.add(Product::validated("Mango", Money::from_major(10))?);
    market.add(Product::validated("Apple", Money::from_major(20))?);
    print!("{}", market);
    println!("{}", market.product_detail(1)?);
    println!();

    let mut customer = Customer::new(config.customer_name.clone());
    customer.give_wallet(Wallet::new(&config.currency, config.starting_balance()));

    for name in ["Apple", "Mango", "Kiwi"] {
        match customer.buy(&market, name) {
            Ok(receipt) => println!(
                "{} bought {} for {}, balance {}",
                customer.name(),
                receipt.product_name,
                receipt.sale_price,
                receipt.new_balance
            ),
            Err(e) => println!("{} could not buy {}: {}", customer.name(), name, e),
        }
    }
    println!();

    let banana_market: Catalog<Product> =
        Catalog::with_product(Product::validated("Banana", Money::from_major(50))?);
    let merged = market.merge(&banana_market);
    println!("Merged market has {} products", merged.count());
    println!(
        "Banana market equals merged market: {}",
        banana_market.equals_by_name(&merged)
    );

    market.remove("Kiwi");
    market.double_prices();
    println!("After doubling prices:");
    print!("{}", market);
    if let Some(average) = market.average_price() {
        println!("Average cost price: {}", average);
    }
    println!("Total cost price: {}", market.total_price());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&market)?);
    }

    if let Some(wallet) = customer.release() {
        println!();
        println!("Wallet returned with {}", wallet);
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: [`DEFAULT_LOG_FILTER`]
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
