pub mod details;
pub mod error;
pub mod watchlist;

pub use details::CompanyDetails;
pub use error::ApiError;
pub use watchlist::{HttpWatchlistApi, StockDataRecord, WatchlistApi, WatchlistRecord};
