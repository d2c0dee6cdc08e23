use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `GET /api/company-details/{symbol}`
///
/// Every figure is nullable: the service returns `null` when the market
/// history for the day is empty.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CompanyDetails {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub current_price: Option<Decimal>,
    /// Absolute move against the previous close
    #[serde(default)]
    pub price_change: Option<Decimal>,
    #[serde(default)]
    pub previous_close: Option<Decimal>,
    #[serde(default)]
    pub high24: Option<Decimal>,
    #[serde(default)]
    pub low24: Option<Decimal>,
    #[serde(default)]
    pub volume: Option<Decimal>,
}
