//! Token Swap Core - price normalization, conversion and swap state.
//!
//! Prices arrive as raw observations from a `PriceFeed`. They are normalized
//! once into a [`fx::PriceTable`] (freshest observation per currency, sorted
//! by code) and every conversion is recomputed from that table on demand.

pub mod balances;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod swap;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
pub use errors::ValidationError;
