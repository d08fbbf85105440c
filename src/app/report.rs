use crate::core::Quote;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

pub const NO_QUOTE_MESSAGE: &str = "It is not possible to provide a quote at this time.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(quote: Option<&Quote>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(quote)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&quote)?),
    }
}

fn render_text(quote: Option<&Quote>) -> String {
    match quote {
        Some(quote) => format!(
            "Requested amount: {}\nRate: {}\nMonthly repayment: {}\nTotal repayment: {}",
            quote.requested_amount_display(),
            quote.rate_display(),
            quote.monthly_repayment_display(),
            quote.total_repayment_display()
        ),
        None => NO_QUOTE_MESSAGE.to_string(),
    }
}
