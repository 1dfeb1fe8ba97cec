//! FX module - price table normalization, conversion and the price service.

pub mod currency_converter;
mod fx_model;
mod fx_service;
mod fx_traits;
mod price_table;

pub use currency_converter::{calculate_conversion, CurrencyConverter};
pub use fx_model::{format_fixed, rate_lines, ConversionRequest, ConversionResult};
pub use fx_service::{FxService, PriceLoadStatus};
pub use fx_traits::FxServiceTrait;
pub use price_table::{normalize_prices, normalize_prices_with, PriceTable};
