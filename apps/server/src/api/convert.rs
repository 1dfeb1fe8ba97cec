use std::sync::Arc;

use crate::{
    error::ApiResult,
    models::{ConversionForm, ConversionResponse},
    AppState,
};
use axum::{extract::State, routing::post, Json, Router};
use tokenswap_core::fx::{ConversionRequest, FxServiceTrait};

/// Converts an amount between two currencies.
///
/// Missing prices are not an error: the response carries an empty output
/// amount and no rate. Only a malformed amount is rejected.
async fn convert(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ConversionForm>,
) -> ApiResult<Json<ConversionResponse>> {
    let request = ConversionRequest::try_from(form)?;
    let result = state.fx_service.convert(&request);
    Ok(Json(ConversionResponse::new(&request, result)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/convert", post(convert))
}
