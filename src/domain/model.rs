use crate::utils::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};

/// A single lender's offer: how much it can lend and at what annual rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    #[serde(rename = "Lender")]
    lender: String,
    #[serde(rename = "Rate")]
    rate: f64,
    #[serde(rename = "Available")]
    available: f64,
}

impl Offer {
    /// Builds an offer, rejecting amounts and rates the repayment formula
    /// cannot handle. A zero rate is refused outright since `1 - (1 + 0)^-n`
    /// is zero.
    pub fn new(lender: impl Into<String>, rate: f64, available: f64) -> Result<Self> {
        let lender = lender.into();

        if !available.is_finite() || available <= 0.0 {
            return Err(QuoteError::InvalidOfferError {
                field: "available".to_string(),
                value: available.to_string(),
                reason: "must be a positive amount".to_string(),
            });
        }

        if !rate.is_finite() || rate < 0.0 {
            return Err(QuoteError::InvalidOfferError {
                field: "rate".to_string(),
                value: rate.to_string(),
                reason: "must be a non-negative fraction".to_string(),
            });
        }

        if rate == 0.0 {
            return Err(QuoteError::ZeroRateError { lender });
        }

        Ok(Self {
            lender,
            rate,
            available,
        })
    }

    pub fn lender(&self) -> &str {
        &self.lender
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn available(&self) -> f64 {
        self.available
    }

    /// Re-runs the constructor checks; used after deserializing, which
    /// bypasses `new`.
    pub fn validated(self) -> Result<Self> {
        Self::new(self.lender, self.rate, self.available)
    }
}

/// Quote for a fully funded loan. Repayments are already rounded to pence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    rate: String,
    requested_amount: String,
    monthly_repayment: f64,
    total_repayment: f64,
}

impl Quote {
    pub(crate) fn new(
        rate: String,
        requested_amount: String,
        monthly_repayment: f64,
        total_repayment: f64,
    ) -> Self {
        Self {
            rate,
            requested_amount,
            monthly_repayment,
            total_repayment,
        }
    }

    /// Annual rate as a percentage to 1 d.p., e.g. `7.0%`.
    pub fn rate_display(&self) -> &str {
        &self.rate
    }

    /// Requested amount as given, e.g. `£1000`.
    pub fn requested_amount_display(&self) -> &str {
        &self.requested_amount
    }

    pub fn monthly_repayment(&self) -> f64 {
        self.monthly_repayment
    }

    pub fn total_repayment(&self) -> f64 {
        self.total_repayment
    }

    pub fn monthly_repayment_display(&self) -> String {
        format!("£{:.2}", self.monthly_repayment)
    }

    pub fn total_repayment_display(&self) -> String {
        format!("£{:.2}", self.total_repayment)
    }
}
