use std::time::Duration;

use futures::future::BoxFuture;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

use super::details::CompanyDetails;
use super::error::{server_message, ApiError};
use crate::config::Config;
use crate::data::PriceSnapshot;

/// One row of `GET /api/watchlist/{userId}`
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistRecord {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub stock_data: Option<StockDataRecord>,
}

/// Compliance payload stored alongside each watchlist row
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct StockDataRecord {
    // the model declares `Initial_classification` with an alias, both spellings reach us
    #[serde(
        rename = "Initial_Classification",
        alias = "Initial_classification",
        default
    )]
    pub initial_classification: Option<String>,
    #[serde(rename = "Haram_Reason", default)]
    pub haram_reason: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct WatchlistResponse {
    #[serde(default)]
    pub watchlist: Vec<WatchlistRecord>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RemoveResponse {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
}

/// Backend operations the watchlist screen depends on
///
/// Futures are `'static` so callers can move them onto a spawned task.
pub trait WatchlistApi: Send + Sync {
    fn fetch(&self, user_id: &str) -> BoxFuture<'static, Result<Vec<WatchlistRecord>, ApiError>>;

    fn remove(&self, user_id: &str, symbol: &str) -> BoxFuture<'static, Result<(), ApiError>>;

    /// Best-effort price snapshot; `Ok(None)` when the service has no quote
    fn company_details(
        &self,
        symbol: &str,
    ) -> BoxFuture<'static, Result<Option<PriceSnapshot>, ApiError>>;

    /// Whether `company_details` is backed by a real service
    fn has_price_source(&self) -> bool {
        false
    }
}

pub struct HttpWatchlistApi {
    client: reqwest::Client,
    api_url: Url,
    details_url: Option<Url>,
    symbol_suffix: String,
}

impl HttpWatchlistApi {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("shariawatch/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            details_url: config.details_url.clone(),
            symbol_suffix: config.symbol_suffix.clone(),
        })
    }
}

impl WatchlistApi for HttpWatchlistApi {
    fn fetch(&self, user_id: &str) -> BoxFuture<'static, Result<Vec<WatchlistRecord>, ApiError>> {
        let client = self.client.clone();
        let url = endpoint(&self.api_url, &["api", "watchlist", user_id]);
        Box::pin(async move {
            let url = url?;
            tracing::debug!(%url, "fetching watchlist");
            let resp = client.get(url).send().await?;
            let body: WatchlistResponse = read_json(resp).await?;
            tracing::info!(entries = body.watchlist.len(), "watchlist fetched");
            Ok(body.watchlist)
        })
    }

    fn remove(&self, user_id: &str, symbol: &str) -> BoxFuture<'static, Result<(), ApiError>> {
        let client = self.client.clone();
        let url = endpoint(&self.api_url, &["api", "watchlist", user_id, symbol]);
        let symbol = symbol.to_string();
        Box::pin(async move {
            let url = url?;
            tracing::debug!(%url, symbol = %symbol, "removing from watchlist");
            let resp = client.delete(url).send().await?;
            let body: RemoveResponse = read_json(resp).await?;
            if body.success {
                tracing::info!(symbol = %symbol, "removed from watchlist");
                Ok(())
            } else {
                let message = body.message.unwrap_or_default();
                tracing::warn!(symbol = %symbol, message = %message, "removal rejected");
                Err(ApiError::Rejected(message))
            }
        })
    }

    fn company_details(
        &self,
        symbol: &str,
    ) -> BoxFuture<'static, Result<Option<PriceSnapshot>, ApiError>> {
        let Some(base) = self.details_url.as_ref() else {
            return Box::pin(async { Ok(None) });
        };
        let client = self.client.clone();
        let lookup = format!("{symbol}{}", self.symbol_suffix);
        let url = endpoint(base, &["api", "company-details", lookup.as_str()]);
        Box::pin(async move {
            let resp = client.get(url?).send().await?;
            if resp.status() == reqwest::StatusCode::NOT_FOUND {
                return Ok(None);
            }
            let details: CompanyDetails = read_json(resp).await?;
            Ok(PriceSnapshot::from_details(&details))
        })
    }

    fn has_price_source(&self) -> bool {
        self.details_url.is_some()
    }
}

/// Append path segments to `base`, percent-encoding each one
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, ApiError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| ApiError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp.bytes().await?;
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: server_message(&body),
        });
    }
    Ok(serde_json::from_slice(&body)?)
}

#[cfg(test)]
mod tests {
    use super::{endpoint, RemoveResponse, WatchlistResponse};
    use url::Url;

    #[test]
    fn endpoint_appends_encoded_segments() {
        let base = Url::parse("http://localhost:5000").expect("valid url");
        let url = endpoint(&base, &["api", "watchlist", "u1", "A B"]).expect("endpoint");
        assert_eq!(url.as_str(), "http://localhost:5000/api/watchlist/u1/A%20B");
    }

    #[test]
    fn endpoint_respects_base_path_with_trailing_slash() {
        let base = Url::parse("https://example.com/backend/").expect("valid url");
        let url = endpoint(&base, &["api", "watchlist", "u1"]).expect("endpoint");
        assert_eq!(url.as_str(), "https://example.com/backend/api/watchlist/u1");
    }

    #[test]
    fn endpoint_escapes_slashes_inside_symbols() {
        let base = Url::parse("http://localhost").expect("valid url");
        let url = endpoint(&base, &["api", "watchlist", "u1", "M/M"]).expect("endpoint");
        assert!(url.as_str().ends_with("/u1/M%2FM"));
    }

    #[test]
    fn watchlist_response_accepts_both_classification_spellings() {
        let body = r#"{"watchlist":[
            {"symbol":"TCS","companyName":"Tata Consultancy","stockData":{"Initial_Classification":"Halal"}},
            {"symbol":"ITC","companyName":"ITC Ltd","stockData":{"Initial_classification":"haram","Haram_Reason":"Tobacco"}},
            {"symbol":"XYZ","companyName":"No Data"}
        ]}"#;
        let parsed: WatchlistResponse = serde_json::from_str(body).expect("parse");
        assert_eq!(parsed.watchlist.len(), 3);
        let first = parsed.watchlist[0].stock_data.as_ref().expect("stock data");
        assert_eq!(first.initial_classification.as_deref(), Some("Halal"));
        let second = parsed.watchlist[1].stock_data.as_ref().expect("stock data");
        assert_eq!(second.initial_classification.as_deref(), Some("haram"));
        assert_eq!(second.haram_reason.as_deref(), Some("Tobacco"));
        assert!(parsed.watchlist[2].stock_data.is_none());
    }

    #[test]
    fn empty_watchlist_is_a_valid_response() {
        let parsed: WatchlistResponse =
            serde_json::from_str(r#"{"watchlist":[]}"#).expect("parse");
        assert!(parsed.watchlist.is_empty());
    }

    #[test]
    fn remove_response_defaults_to_failure() {
        let parsed: RemoveResponse = serde_json::from_str("{}").expect("parse");
        assert!(!parsed.success);
        let parsed: RemoveResponse =
            serde_json::from_str(r#"{"success":true,"message":"Removed"}"#).expect("parse");
        assert!(parsed.success);
        assert_eq!(parsed.message.as_deref(), Some("Removed"));
    }
}
