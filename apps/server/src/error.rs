use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tokenswap_core::errors::Error as CoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::Core(e) => match e {
                CoreError::Validation(_) => (StatusCode::BAD_REQUEST, e.to_string()),
                CoreError::PricesUnavailable => (StatusCode::SERVICE_UNAVAILABLE, e.to_string()),
                CoreError::ConfirmationInProgress => (StatusCode::CONFLICT, e.to_string()),
                CoreError::NotConfirmable(_) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
                CoreError::ConfirmationFailed(reason) => (StatusCode::BAD_GATEWAY, reason.clone()),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = self.status_and_message();
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<tokenswap_core::ValidationError> for ApiError {
    fn from(err: tokenswap_core::ValidationError) -> Self {
        ApiError::Core(err.into())
    }
}
