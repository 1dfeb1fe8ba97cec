use std::sync::Arc;

use crate::config::Config;
use tokenswap_core::{
    fx::{FxService, FxServiceTrait},
    swap::{SimulatedSwapBackend, SwapBackend, SwapConfirmer},
};
use tokenswap_market_data::{PriceFeed, SwitcheoPriceFeed};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub fx_service: Arc<FxService>,
    pub swap_confirmer: Arc<SwapConfirmer>,
}

pub fn init_tracing() {
    let log_format = std::env::var("TS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Builds state backed by the configured HTTP price feed.
pub fn build_state(config: &Config) -> Arc<AppState> {
    let feed = Arc::new(SwitcheoPriceFeed::with_url(config.price_feed_url.clone()));
    let backend = Arc::new(SimulatedSwapBackend::new(config.confirm_delay));
    build_state_with(feed, backend)
}

pub fn build_state_with(feed: Arc<dyn PriceFeed>, backend: Arc<dyn SwapBackend>) -> Arc<AppState> {
    Arc::new(AppState {
        fx_service: Arc::new(FxService::new(feed)),
        swap_confirmer: Arc::new(SwapConfirmer::new(backend)),
    })
}

/// Starts the one-shot price load in the background.
///
/// Requests arriving before it finishes see the table as loading.
pub fn spawn_price_load(state: &Arc<AppState>) -> tokio::task::JoinHandle<()> {
    let fx_service = Arc::clone(&state.fx_service);
    tokio::spawn(async move {
        fx_service.initialize().await;
        tracing::info!("Price load finished: {:?}", fx_service.status());
    })
}
