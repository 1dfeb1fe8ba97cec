use super::currency_converter::calculate_conversion;
use super::fx_model::{ConversionRequest, ConversionResult};
use super::fx_traits::FxServiceTrait;
use super::price_table::PriceTable;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use tokenswap_market_data::PriceFeed;

/// Where the session's price table stands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceLoadStatus {
    /// No fetch finished yet.
    Loading,
    /// Table available.
    Loaded,
    /// The single fetch failed. Stays this way for the session.
    Failed,
}

#[derive(Clone)]
enum LoadState {
    Loading,
    Loaded(Arc<PriceTable>),
    Failed,
}

/// Holds the session's price table, loaded once from a [`PriceFeed`].
#[derive(Clone)]
pub struct FxService {
    feed: Arc<dyn PriceFeed>,
    state: Arc<RwLock<LoadState>>,
    attempted: Arc<AtomicBool>,
}

impl FxService {
    pub fn new(feed: Arc<dyn PriceFeed>) -> Self {
        Self {
            feed,
            state: Arc::new(RwLock::new(LoadState::Loading)),
            attempted: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn status(&self) -> PriceLoadStatus {
        match self.read_state() {
            LoadState::Loading => PriceLoadStatus::Loading,
            LoadState::Loaded(_) => PriceLoadStatus::Loaded,
            LoadState::Failed => PriceLoadStatus::Failed,
        }
    }

    fn read_state(&self) -> LoadState {
        match self.state.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn write_state(&self, next: LoadState) {
        match self.state.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }
}

#[async_trait]
impl FxServiceTrait for FxService {
    /// Fetches and normalizes the price list.
    ///
    /// Only the first call fetches; later calls return immediately. A failed
    /// fetch is logged and not retried.
    async fn initialize(&self) {
        if self.attempted.swap(true, Ordering::AcqRel) {
            log::debug!("Price table already requested, skipping fetch");
            return;
        }

        match self.feed.fetch_prices().await {
            Ok(observations) => {
                let raw_count = observations.len();
                let table = PriceTable::from_observations(observations);
                log::info!(
                    "Loaded {} prices from {} ({} raw observations)",
                    table.len(),
                    self.feed.id(),
                    raw_count
                );
                self.write_state(LoadState::Loaded(Arc::new(table)));
            }
            Err(e) => {
                log::error!("Failed to fetch prices from {}: {}", self.feed.id(), e);
                self.write_state(LoadState::Failed);
            }
        }
    }

    fn price_table(&self) -> Option<Arc<PriceTable>> {
        match self.read_state() {
            LoadState::Loaded(table) => Some(table),
            LoadState::Loading | LoadState::Failed => None,
        }
    }

    fn convert(&self, request: &ConversionRequest) -> ConversionResult {
        let table = self.price_table();
        calculate_conversion(table.as_deref(), request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swap::AmountInput;
    use std::sync::atomic::AtomicUsize;
    use tokenswap_market_data::{FixedPriceFeed, MarketDataError, PriceObservation};

    struct CountingFeed {
        inner: FixedPriceFeed,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PriceFeed for CountingFeed {
        fn id(&self) -> &'static str {
            "COUNTING"
        }

        async fn fetch_prices(&self) -> Result<Vec<PriceObservation>, MarketDataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.fetch_prices().await
        }
    }

    fn observations() -> Vec<PriceObservation> {
        vec![
            PriceObservation::new("ETH", 1900.0, "2024-01-01"),
            PriceObservation::new("ETH", 2000.0, "2024-01-02"),
            PriceObservation::new("USDC", 1.0, "2024-01-01"),
        ]
    }

    #[tokio::test]
    async fn test_loads_and_normalizes() {
        let service = FxService::new(Arc::new(FixedPriceFeed::new(observations())));
        assert_eq!(service.status(), PriceLoadStatus::Loading);
        assert!(!service.is_loaded());

        service.initialize().await;

        assert_eq!(service.status(), PriceLoadStatus::Loaded);
        let table = service.price_table().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.price("ETH"), Some(2000.0));

        let request = ConversionRequest::new("ETH", "USDC", AmountInput::parse("1").unwrap());
        assert_eq!(
            service.convert(&request).output_amount.as_deref(),
            Some("2000.000000")
        );
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_table_absent() {
        let service = FxService::new(Arc::new(FixedPriceFeed::failing("connection refused")));
        service.initialize().await;

        assert_eq!(service.status(), PriceLoadStatus::Failed);
        assert!(service.price_table().is_none());

        let request = ConversionRequest::new("ETH", "USDC", AmountInput::parse("1").unwrap());
        assert_eq!(service.convert(&request), ConversionResult::empty());
    }

    #[tokio::test]
    async fn test_fetches_only_once() {
        let feed = Arc::new(CountingFeed {
            inner: FixedPriceFeed::failing("offline"),
            calls: AtomicUsize::new(0),
        });
        let service = FxService::new(feed.clone());

        service.initialize().await;
        service.initialize().await;
        service.clone().initialize().await;

        assert_eq!(feed.calls.load(Ordering::SeqCst), 1);
        assert_eq!(service.status(), PriceLoadStatus::Failed);
    }
}
