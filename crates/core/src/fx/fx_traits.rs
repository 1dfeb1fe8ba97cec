use std::sync::Arc;

use async_trait::async_trait;

use super::fx_model::{ConversionRequest, ConversionResult};
use super::price_table::PriceTable;

/// Trait defining the contract for FX service operations.
#[async_trait]
pub trait FxServiceTrait: Send + Sync {
    /// Loads the session's price table. Runs at most one fetch.
    async fn initialize(&self);

    /// The loaded table, or `None` while loading or after a failed fetch.
    fn price_table(&self) -> Option<Arc<PriceTable>>;

    fn is_loaded(&self) -> bool {
        self.price_table().is_some()
    }

    fn convert(&self, request: &ConversionRequest) -> ConversionResult;
}
