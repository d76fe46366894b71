//! Plan pricing: band lookup tables with per-gram fallback, plus checkout discounts.

mod discounts;
mod parser;
mod table;

pub use discounts::{apply_discounts, percent_of, DiscountKind, DiscountLine, DiscountPolicy};
pub use table::{PriceEntry, PriceQuote, PriceSource, PriceTable};

#[derive(Debug, thiserror::Error)]
pub enum PriceTableError {
    #[error("failed to read price table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid price table CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("price band for '{recipe}' is invalid (min {min_lb}, max {max_lb:?})")]
    InvalidBand {
        recipe: String,
        min_lb: f64,
        max_lb: Option<f64>,
    },
}
