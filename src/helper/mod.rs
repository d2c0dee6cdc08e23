pub mod cycle;
pub mod number;

pub use number::{format_change, format_price, format_volume, Sign};
