use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid offer {field} '{value}': {reason}")]
    InvalidOfferError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Offer from '{lender}' has a zero interest rate; the repayment formula is undefined")]
    ZeroRateError { lender: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parsing,
    Configuration,
    Offer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl QuoteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QuoteError::IoError(_) => ErrorCategory::Io,
            QuoteError::CsvError(_) | QuoteError::SerializationError(_) => ErrorCategory::Parsing,
            QuoteError::ConfigError { .. }
            | QuoteError::ConfigValidationError { .. }
            | QuoteError::InvalidConfigValueError { .. }
            | QuoteError::MissingConfigError { .. } => ErrorCategory::Configuration,
            QuoteError::InvalidOfferError { .. } | QuoteError::ZeroRateError { .. } => {
                ErrorCategory::Offer
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Parsing | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Offer => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            QuoteError::IoError(_) => "Check that the file exists and is readable",
            QuoteError::CsvError(_) => {
                "Make sure the market file has a 'Lender,Rate,Available' header and one offer row"
            }
            QuoteError::SerializationError(_) => "Report this issue; the quote could not be encoded",
            QuoteError::ConfigError { .. } | QuoteError::ConfigValidationError { .. } => {
                "Check the configuration file syntax"
            }
            QuoteError::InvalidConfigValueError { .. } => "Correct the highlighted value and retry",
            QuoteError::MissingConfigError { .. } => "Provide the missing value on the command line or in the config file",
            QuoteError::InvalidOfferError { .. } => "Offers need a positive available amount and a non-negative rate",
            QuoteError::ZeroRateError { .. } => "Use an offer with a rate above zero",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QuoteError::IoError(e) => format!("Could not read input: {}", e),
            QuoteError::CsvError(e) => format!("Market file is malformed: {}", e),
            QuoteError::MissingConfigError { field } => format!("'{}' is required", field),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_follows_category() {
        let io = QuoteError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.category(), ErrorCategory::Io);
        assert_eq!(io.severity(), ErrorSeverity::Critical);

        let zero = QuoteError::ZeroRateError {
            lender: "Len".to_string(),
        };
        assert_eq!(zero.category(), ErrorCategory::Offer);
        assert_eq!(zero.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_user_friendly_message() {
        let missing = QuoteError::MissingConfigError {
            field: "loan".to_string(),
        };
        assert_eq!(missing.user_friendly_message(), "'loan' is required");
    }
}
