use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::Classification;
use crate::api::{CompanyDetails, WatchlistRecord};

/// Market figures fetched after the entry itself
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceSnapshot {
    pub current: Decimal,
    pub change_percent: Option<Decimal>,
    pub high24: Option<Decimal>,
    pub low24: Option<Decimal>,
    pub volume: Option<u64>,
}

impl PriceSnapshot {
    /// `None` when the service has no current price for the symbol
    pub fn from_details(details: &CompanyDetails) -> Option<Self> {
        let current = details.current_price?;
        let change_percent = match (details.price_change, details.previous_close) {
            (Some(change), Some(prev)) if !prev.is_zero() => {
                Some((change / prev * Decimal::ONE_HUNDRED).round_dp(2))
            }
            (Some(change), _) => Some(change),
            (None, _) => None,
        };
        Some(Self {
            current,
            change_percent,
            high24: details.high24,
            low24: details.low24,
            volume: details.volume.and_then(|v| v.trunc().to_u64()),
        })
    }
}

/// One watched stock
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StockEntry {
    pub symbol: String,
    pub company_name: String,
    pub classification: Classification,
    pub haram_reason: Option<String>,
    pub price: Option<PriceSnapshot>,
}

impl StockEntry {
    pub fn new(
        symbol: impl Into<String>,
        company_name: impl Into<String>,
        classification: Classification,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            company_name: company_name.into(),
            classification,
            haram_reason: None,
            price: None,
        }
    }

    /// `needle` must already be lowercased
    pub fn matches_search(&self, needle: &str) -> bool {
        self.symbol.to_lowercase().contains(needle)
            || self.company_name.to_lowercase().contains(needle)
    }
}

/// Backend row that cannot be shown as an entry
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    #[error("watchlist row without a symbol")]
    MissingSymbol,
    #[error("{symbol}: no classification")]
    MissingClassification { symbol: String },
    #[error("{symbol}: unknown classification `{value}`")]
    UnknownClassification { symbol: String, value: String },
}

impl ContractViolation {
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Self::MissingSymbol => None,
            Self::MissingClassification { symbol }
            | Self::UnknownClassification { symbol, .. } => Some(symbol),
        }
    }
}

impl TryFrom<WatchlistRecord> for StockEntry {
    type Error = ContractViolation;

    fn try_from(record: WatchlistRecord) -> Result<Self, Self::Error> {
        let symbol = record.symbol.trim().to_string();
        if symbol.is_empty() {
            return Err(ContractViolation::MissingSymbol);
        }

        let stock_data = record.stock_data.unwrap_or_default();
        let raw = stock_data
            .initial_classification
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ContractViolation::MissingClassification {
                symbol: symbol.clone(),
            })?;
        let classification = Classification::parse(&raw).ok_or_else(|| {
            ContractViolation::UnknownClassification {
                symbol: symbol.clone(),
                value: raw.clone(),
            }
        })?;

        let company_name = match record.company_name.trim() {
            "" => symbol.clone(),
            name => name.to_string(),
        };

        Ok(Self {
            symbol,
            company_name,
            classification,
            haram_reason: stock_data
                .haram_reason
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty()),
            price: None,
        })
    }
}
