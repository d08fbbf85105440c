use crate::core::{Offer, OfferSource};
use crate::utils::error::{QuoteError, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Market file in `Lender,Rate,Available` CSV form, holding a single offer.
#[derive(Debug, Clone)]
pub struct CsvMarket {
    path: PathBuf,
}

impl CsvMarket {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses the single offer out of any CSV reader.
    pub fn parse_offer<R: Read>(reader: R) -> Result<Offer> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut offers = csv_reader
            .deserialize::<Offer>()
            .collect::<std::result::Result<Vec<_>, _>>()?;

        match offers.len() {
            0 => Err(QuoteError::MissingConfigError {
                field: "market offer".to_string(),
            }),
            1 => offers.remove(0).validated(),
            n => Err(QuoteError::InvalidConfigValueError {
                field: "market".to_string(),
                value: format!("{} offers", n),
                reason: "the market holds exactly one offer".to_string(),
            }),
        }
    }
}

impl OfferSource for CsvMarket {
    fn load_offer(&self) -> Result<Offer> {
        tracing::debug!("Reading market file: {}", self.path.display());
        let file = std::fs::File::open(&self.path)?;
        let offer = Self::parse_offer(file)?;
        tracing::debug!(lender = offer.lender(), "Loaded offer");
        Ok(offer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_offer() {
        let data = "Lender,Rate,Available\nLen,0.07,1000\n";
        let offer = CsvMarket::parse_offer(data.as_bytes()).unwrap();

        assert_eq!(offer.lender(), "Len");
        assert_eq!(offer.rate(), 0.07);
        assert_eq!(offer.available(), 1000.0);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let data = "Lender, Rate, Available\nBob , 0.075 , 640\n";
        let offer = CsvMarket::parse_offer(data.as_bytes()).unwrap();
        assert_eq!(offer.lender(), "Bob");
        assert_eq!(offer.available(), 640.0);
    }

    #[test]
    fn test_empty_market_is_missing_offer() {
        let err = CsvMarket::parse_offer("Lender,Rate,Available\n".as_bytes()).unwrap_err();
        assert!(matches!(err, QuoteError::MissingConfigError { .. }));
    }

    #[test]
    fn test_multiple_offers_rejected() {
        let data = "Lender,Rate,Available\nLen,0.07,1000\nBob,0.075,640\n";
        let err = CsvMarket::parse_offer(data.as_bytes()).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_zero_rate_row_rejected() {
        let data = "Lender,Rate,Available\nLen,0,1000\n";
        let err = CsvMarket::parse_offer(data.as_bytes()).unwrap_err();
        assert!(matches!(err, QuoteError::ZeroRateError { .. }));
    }

    #[test]
    fn test_malformed_row_is_csv_error() {
        let data = "Lender,Rate,Available\nLen,seven,1000\n";
        let err = CsvMarket::parse_offer(data.as_bytes()).unwrap_err();
        assert!(matches!(err, QuoteError::CsvError(_)));
    }
}
