use clap::Parser;
use loan_quote::utils::error::ErrorSeverity;
use loan_quote::utils::{logger, validation::Validate};
use loan_quote::{render, run_quote, CliConfig, CsvMarket, OutputFormat, QuoteError, TomlConfig};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌 (JSON 輸出時日誌也用 JSON)
    if config.format == Some(OutputFormat::Json) {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting loan-quote");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match quote(&config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!(
                "Quote failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}

fn quote(config: &CliConfig) -> Result<String, QuoteError> {
    let (quote, file_format) = match (&config.market, &config.config) {
        (Some(market), _) => (run_quote(&CsvMarket::new(market), config.loan)?, None),
        (None, Some(path)) => {
            tracing::info!("Loading configuration from: {}", path);
            let toml_config = TomlConfig::from_file(path)?;
            toml_config.validate()?;
            (
                run_quote(&toml_config, config.loan)?,
                Some(toml_config.output_format()),
            )
        }
        (None, None) => {
            return Err(QuoteError::MissingConfigError {
                field: "market".to_string(),
            })
        }
    };

    let format = config.format.or(file_format).unwrap_or_default();
    render(quote.as_ref(), format)
}
