use std::sync::Arc;

use crate::{error::ApiResult, models::CurrencyOption, AppState};
use axum::{extract::State, routing::get, Json, Router};
use tokenswap_core::{
    errors::Error as CoreError,
    fx::{FxServiceTrait, PriceTable},
};
use tokenswap_market_data::token_icon_url;

fn loaded_table(state: &AppState) -> ApiResult<Arc<PriceTable>> {
    state
        .fx_service
        .price_table()
        .ok_or_else(|| CoreError::PricesUnavailable.into())
}

/// Normalized price table, one entry per currency, sorted by code.
async fn get_prices(State(state): State<Arc<AppState>>) -> ApiResult<Json<Arc<PriceTable>>> {
    let table = loaded_table(&state)?;
    Ok(Json(table))
}

/// Selectable currencies with their icon URLs, in table order.
async fn get_currencies(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<CurrencyOption>>> {
    let table = loaded_table(&state)?;
    let options = table
        .currencies()
        .map(|currency| CurrencyOption {
            currency: currency.to_string(),
            icon_url: token_icon_url(currency),
        })
        .collect();
    Ok(Json(options))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/prices", get(get_prices))
        .route("/currencies", get(get_currencies))
}
