//! Core error types for the token swap engine.
//!
//! Missing price data is not an error here: the calculator reports it as an
//! empty result. These types cover the input boundary and the confirmation
//! step. Feed failures are logged by the FX service and surface only as
//! [`Error::PricesUnavailable`].

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the swap engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Prices are not available")]
    PricesUnavailable,

    #[error("A swap confirmation is already in progress")]
    ConfirmationInProgress,

    #[error("Swap cannot be confirmed: {0}")]
    NotConfirmable(String),

    #[error("Swap confirmation failed: {0}")]
    ConfirmationFailed(String),
}

/// Validation errors for user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Amount may only contain digits and a single decimal point: '{0}'")]
    InvalidAmount(String),

    #[error("Amount exceeds {max} characters")]
    AmountTooLong { max: usize },

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}
