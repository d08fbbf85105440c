use crate::app::report::OutputFormat;
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "loan-quote")]
#[command(about = "Quotes a loan against a single lender's offer")]
pub struct CliConfig {
    /// CSV market file with a 'Lender,Rate,Available' header
    #[arg(long)]
    pub market: Option<String>,

    /// TOML configuration describing the offer
    #[arg(short, long)]
    pub config: Option<String>,

    /// Requested loan amount
    #[arg(long)]
    pub loan: f64,

    /// Output format, overrides the config file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_positive_amount("loan", self.loan)?;

        match (&self.market, &self.config) {
            (Some(_), Some(_)) => Err(QuoteError::ConfigValidationError {
                field: "market".to_string(),
                message: "use either --market or --config, not both".to_string(),
            }),
            (None, None) => Err(QuoteError::MissingConfigError {
                field: "market".to_string(),
            }),
            (Some(market), None) => {
                validation::validate_path("market", market)?;
                validation::validate_file_extensions(
                    "market",
                    std::slice::from_ref(market),
                    &["csv"],
                )
            }
            (None, Some(config)) => validation::validate_path("config", config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(std::iter::once("loan-quote").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_market_and_loan() {
        let config = parse(&["--market", "market.csv", "--loan", "1000"]);
        assert_eq!(config.loan, 1000.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_source_required() {
        assert!(parse(&["--loan", "1000"]).validate().is_err());
    }

    #[test]
    fn test_sources_conflict() {
        let config = parse(&["--market", "m.csv", "--config", "q.toml", "--loan", "1000"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_loan_must_be_positive() {
        let config = parse(&["--market", "market.csv", "--loan", "0"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_format_flag() {
        let config = parse(&["--config", "q.toml", "--loan", "1", "--format", "json"]);
        assert_eq!(config.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_market_must_be_csv() {
        let config = parse(&["--market", "market.json", "--loan", "1000"]);
        assert!(config.validate().is_err());
    }
}
