pub mod quote;

pub use crate::domain::model::{Offer, Quote};
pub use crate::domain::ports::OfferSource;
pub use crate::utils::error::Result;
