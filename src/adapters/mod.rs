// Adapters layer: concrete offer sources backed by files.

pub mod csv_market;
