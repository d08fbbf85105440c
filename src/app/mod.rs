pub mod report;

use crate::core::quote::QuoteEvaluator;
use crate::core::{OfferSource, Quote};
use crate::utils::error::Result;

/// Loads the market's offer and quotes `loan` against it.
pub fn run_quote<S: OfferSource>(source: &S, loan: f64) -> Result<Option<Quote>> {
    let offer = source.load_offer()?;
    tracing::info!(
        lender = offer.lender(),
        rate = offer.rate(),
        available = offer.available(),
        "Market offer loaded"
    );

    let evaluator = QuoteEvaluator::new(offer);
    let quote = evaluator.evaluate(loan);

    if quote.is_none() {
        tracing::warn!(
            "No quote: offer of {} does not match requested {}",
            evaluator.offer().available(),
            loan
        );
    }

    Ok(quote)
}
