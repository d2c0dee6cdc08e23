pub mod entry;
pub mod filter;
pub mod types;
pub mod watchlist;

pub use entry::{ContractViolation, PriceSnapshot, StockEntry};
pub use types::*;
pub use watchlist::{aggregate, Counts, Watchlist};
