//! In-memory price feed.
//!
//! Serves a fixed observation list (or a fixed failure). Useful for offline
//! runs and for exercising callers without a network.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::PriceObservation;
use crate::provider::PriceFeed;

const PROVIDER_ID: &str = "FIXED";

pub struct FixedPriceFeed {
    outcome: Result<Vec<PriceObservation>, String>,
}

impl FixedPriceFeed {
    pub fn new(observations: Vec<PriceObservation>) -> Self {
        Self {
            outcome: Ok(observations),
        }
    }

    /// A feed whose every fetch fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
        }
    }
}

#[async_trait]
impl PriceFeed for FixedPriceFeed {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_prices(&self) -> Result<Vec<PriceObservation>, MarketDataError> {
        match &self.outcome {
            Ok(observations) => Ok(observations.clone()),
            Err(message) => Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: message.clone(),
            }),
        }
    }
}
