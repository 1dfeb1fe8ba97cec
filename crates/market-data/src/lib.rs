//! Token Swap Market Data Crate
//!
//! This crate fetches raw token prices for the swap engine.
//!
//! # Overview
//!
//! - [`PriceObservation`] - One `{currency, price, date}` record from a feed
//! - [`PriceFeed`] - Trait implemented by every price source
//! - [`SwitcheoPriceFeed`] - HTTP feed serving a static JSON list
//! - [`FixedPriceFeed`] - In-memory feed
//! - [`token_icon_url`] - Currency code to icon URL
//!
//! Feeds return observations as reported. Duplicates and stale entries are
//! expected and left for the caller to normalize.

pub mod errors;
pub mod icons;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use icons::{token_icon_file, token_icon_url, TOKEN_ICON_BASE};
pub use models::PriceObservation;
pub use provider::{FixedPriceFeed, PriceFeed, SwitcheoPriceFeed, DEFAULT_PRICE_FEED_URL};
