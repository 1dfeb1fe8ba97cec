//! HTTP price feed serving a static JSON list of observations.
//!
//! The feed is a single unauthenticated GET returning
//! `[{"currency": "...", "date": "...", "price": ...}, ...]`.
//! No pagination, no retry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::PriceObservation;
use crate::provider::PriceFeed;

/// Provider ID constant
const PROVIDER_ID: &str = "SWITCHEO";

/// Default feed location
pub const DEFAULT_PRICE_FEED_URL: &str = "https://interview.switcheo.com/prices.json";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Price feed backed by a fixed JSON URL.
///
/// # Example
///
/// ```ignore
/// use tokenswap_market_data::SwitcheoPriceFeed;
///
/// let feed = SwitcheoPriceFeed::new();
/// let observations = feed.fetch_prices().await?;
/// ```
pub struct SwitcheoPriceFeed {
    client: Client,
    url: String,
}

impl SwitcheoPriceFeed {
    /// Create a feed pointing at [`DEFAULT_PRICE_FEED_URL`].
    pub fn new() -> Self {
        Self::with_url(DEFAULT_PRICE_FEED_URL)
    }

    /// Create a feed pointing at a custom URL (mirrors, local fixtures).
    pub fn with_url(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn parse_body(body: &str) -> Result<Vec<PriceObservation>, MarketDataError> {
        serde_json::from_str(body).map_err(|e| MarketDataError::InvalidResponse {
            provider: PROVIDER_ID.to_string(),
            message: e.to_string(),
        })
    }
}

impl Default for SwitcheoPriceFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceFeed for SwitcheoPriceFeed {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_prices(&self) -> Result<Vec<PriceObservation>, MarketDataError> {
        debug!("Fetching prices from {}", self.url);

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::Network(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Price feed returned HTTP {}", status);
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })?;

        let observations = Self::parse_body(&body)?;
        debug!("Price feed returned {} observations", observations.len());
        Ok(observations)
    }
}
