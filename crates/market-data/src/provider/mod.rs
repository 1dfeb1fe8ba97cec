//! Price feed abstractions and implementations.
//!
//! This module contains:
//! - The `PriceFeed` trait that all feeds implement
//! - The HTTP feed for the Switcheo price list
//! - A fixed in-memory feed

mod fixed;
mod traits;

pub mod switcheo;

// Re-exports
pub use fixed::FixedPriceFeed;
pub use switcheo::{SwitcheoPriceFeed, DEFAULT_PRICE_FEED_URL};
pub use traits::PriceFeed;
