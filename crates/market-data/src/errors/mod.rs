//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching prices from a feed.
///
/// None of these are retried: a failed fetch leaves the caller without a
/// price table for the rest of the session.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// A provider-specific error occurred (bad status, unreadable body).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider answered, but the payload is not a list of observations.
    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse {
        /// The provider that sent the payload
        provider: String,
        /// What failed to decode
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Provider id attached to this error, if any.
    pub fn provider(&self) -> Option<&str> {
        match self {
            Self::ProviderError { provider, .. }
            | Self::Timeout { provider }
            | Self::InvalidResponse { provider, .. } => Some(provider),
            Self::Network(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = MarketDataError::ProviderError {
            provider: "SWITCHEO".to_string(),
            message: "HTTP 500".to_string(),
        };
        assert_eq!(format!("{}", error), "Provider error: SWITCHEO - HTTP 500");

        let error = MarketDataError::Timeout {
            provider: "SWITCHEO".to_string(),
        };
        assert_eq!(format!("{}", error), "Timeout: SWITCHEO");

        let error = MarketDataError::InvalidResponse {
            provider: "SWITCHEO".to_string(),
            message: "expected a sequence".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Invalid response from SWITCHEO: expected a sequence"
        );
    }

    #[test]
    fn test_provider_accessor() {
        let error = MarketDataError::Timeout {
            provider: "SWITCHEO".to_string(),
        };
        assert_eq!(error.provider(), Some("SWITCHEO"));
    }
}
