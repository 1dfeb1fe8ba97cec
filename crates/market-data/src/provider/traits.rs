//! Price feed trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::PriceObservation;

/// A source of raw price observations.
///
/// Implementations return the list exactly as the source reports it:
/// duplicates, stale entries and malformed dates included. Deduplication is
/// the caller's job.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use tokenswap_market_data::provider::PriceFeed;
///
/// struct MyFeed;
///
/// #[async_trait]
/// impl PriceFeed for MyFeed {
///     fn id(&self) -> &'static str {
///         "MY_FEED"
///     }
///
///     async fn fetch_prices(&self) -> Result<Vec<PriceObservation>, MarketDataError> {
///         Ok(vec![])
///     }
/// }
/// ```
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Unique identifier for this feed, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch the full observation list.
    async fn fetch_prices(&self) -> Result<Vec<PriceObservation>, MarketDataError>;
}
