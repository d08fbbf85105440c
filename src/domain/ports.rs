use crate::domain::model::Offer;
use crate::utils::error::Result;

/// Anything that can hand over the one offer the market holds.
pub trait OfferSource {
    fn load_offer(&self) -> Result<Offer>;
}
