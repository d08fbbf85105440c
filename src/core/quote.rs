use crate::domain::model::{Offer, Quote};

/// Number of monthly instalments every loan is repaid over.
pub const PAYMENT_PERIOD: u32 = 36;

/// A market holding exactly one offer.
///
/// Quotes are only given when the offer covers the loan exactly; there is
/// no partial funding and no over-funding.
#[derive(Debug, Clone)]
pub struct QuoteEvaluator {
    offer: Offer,
    payment_period: u32,
}

impl QuoteEvaluator {
    pub fn new(offer: Offer) -> Self {
        Self {
            offer,
            payment_period: PAYMENT_PERIOD,
        }
    }

    pub fn payment_period(&self) -> u32 {
        self.payment_period
    }

    pub fn offer(&self) -> &Offer {
        &self.offer
    }

    /// Quote for `requested_amount`, or `None` when the offer's available
    /// amount differs from it.
    pub fn evaluate(&self, requested_amount: f64) -> Option<Quote> {
        if self.offer.available() != requested_amount {
            tracing::debug!(
                lender = self.offer.lender(),
                available = self.offer.available(),
                requested = requested_amount,
                "Offer does not match requested amount"
            );
            return None;
        }

        let monthly = self.monthly_repayment();
        let total = self.total_repayment();

        tracing::debug!(
            lender = self.offer.lender(),
            monthly,
            total,
            "Quote computed"
        );

        Some(Quote::new(
            format!("{:.1}%", round_half_away(self.offer.rate() * 100.0, 1)),
            format!("£{}", requested_amount),
            round_half_away(monthly, 2),
            round_half_away(total, 2),
        ))
    }

    /// Unrounded monthly instalment: `P = L·i / (1 - (1 + i)^-n)`.
    pub fn monthly_repayment(&self) -> f64 {
        let monthly_rate = self.offer.rate() / 12.0;
        let discount = 1.0 - (1.0 + monthly_rate).powi(-(self.payment_period as i32));

        (self.offer.available() * monthly_rate) / discount
    }

    /// Unrounded sum of all instalments.
    pub fn total_repayment(&self) -> f64 {
        self.payment_period as f64 * self.monthly_repayment()
    }
}

/// Rounds half away from zero, unlike banker's rounding.
pub fn round_half_away(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
