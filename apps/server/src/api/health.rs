use std::sync::Arc;

use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tokenswap_core::fx::PriceLoadStatus;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    prices: PriceLoadStatus,
    swap_in_progress: bool,
}

async fn get_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        prices: state.fx_service.status(),
        swap_in_progress: state.swap_confirmer.is_busy(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(get_health))
}
