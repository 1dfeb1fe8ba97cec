use std::sync::Arc;

use crate::{error::ApiResult, models::ConversionForm, AppState};
use axum::{extract::State, routing::post, Json, Router};
use tokenswap_core::{
    errors::Error as CoreError,
    fx::FxServiceTrait,
    swap::{SwapOrder, SwapReceipt, SwapSession},
};

/// Confirms a swap against the simulated backend.
///
/// Rejected with 409 while another confirmation is still running.
async fn confirm_swap(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ConversionForm>,
) -> ApiResult<Json<SwapReceipt>> {
    let table = state
        .fx_service
        .price_table()
        .ok_or(CoreError::PricesUnavailable)?;

    let mut session = SwapSession::with_pair(form.from_currency, form.to_currency);
    session.set_prices(table);
    session.set_amount(&form.amount)?;

    let order = SwapOrder::from_session(&session)?;
    let receipt = state.swap_confirmer.confirm(order).await?;
    Ok(Json(receipt))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/swap/confirm", post(confirm_swap))
}
