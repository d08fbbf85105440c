pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::csv_market::CsvMarket;
pub use app::report::{render, OutputFormat};
pub use app::run_quote;
pub use config::toml_config::TomlConfig;
pub use crate::core::quote::{QuoteEvaluator, PAYMENT_PERIOD};
pub use crate::core::{Offer, OfferSource, Quote};
pub use utils::error::{QuoteError, Result};
