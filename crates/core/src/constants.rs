/// Currency selected as the swap source when a session starts
pub const DEFAULT_FROM_CURRENCY: &str = "ETH";

/// Currency selected as the swap target when a session starts
pub const DEFAULT_TO_CURRENCY: &str = "USDC";

/// Maximum length of the amount field, decimal point included
pub const MAX_AMOUNT_LENGTH: usize = 12;

/// Fractional digits used when rendering amounts and rates
pub const DISPLAY_DECIMAL_PRECISION: usize = 6;

/// Multiplier for the second exchange rate display line
pub const RATE_PREVIEW_MULTIPLIER: f64 = 5.0;

/// Artificial delay before a simulated confirmation resolves (milliseconds)
pub const DEFAULT_CONFIRM_DELAY_MS: u64 = 1000;

/// Artificial "processing" step after the confirmation delay (milliseconds)
pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 300;

/// Message shown when the simulated backend fails
pub const CONFIRMATION_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";
