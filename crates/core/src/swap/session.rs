use std::sync::Arc;

use crate::constants::{DEFAULT_FROM_CURRENCY, DEFAULT_TO_CURRENCY};
use crate::errors::ValidationError;
use crate::fx::{calculate_conversion, rate_lines, ConversionRequest, ConversionResult, PriceTable};

use super::amount_input::AmountInput;

/// State behind the swap form.
///
/// Holds the inputs only. The conversion result is derived on every call to
/// [`result`](Self::result), never cached, so it cannot go stale when the
/// table, the pair or the amount changes.
#[derive(Clone, Debug)]
pub struct SwapSession {
    prices: Option<Arc<PriceTable>>,
    from_currency: String,
    to_currency: String,
    amount: AmountInput,
}

impl Default for SwapSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SwapSession {
    /// New session on the default pair with an empty amount and no prices.
    pub fn new() -> Self {
        Self::with_pair(DEFAULT_FROM_CURRENCY, DEFAULT_TO_CURRENCY)
    }

    pub fn with_pair(from_currency: impl Into<String>, to_currency: impl Into<String>) -> Self {
        Self {
            prices: None,
            from_currency: from_currency.into(),
            to_currency: to_currency.into(),
            amount: AmountInput::empty(),
        }
    }

    /// Installs the session's price table.
    pub fn set_prices(&mut self, prices: Arc<PriceTable>) {
        self.prices = Some(prices);
    }

    pub fn prices(&self) -> Option<&PriceTable> {
        self.prices.as_deref()
    }

    /// True until a price table has been installed.
    pub fn is_loading(&self) -> bool {
        self.prices.is_none()
    }

    /// Currencies available for selection, in table order. Empty while loading.
    pub fn currencies(&self) -> Vec<String> {
        self.prices
            .as_deref()
            .map(|table| table.currencies().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Applies an edit to the amount field.
    ///
    /// A rejected edit leaves the current amount unchanged.
    pub fn set_amount(&mut self, text: &str) -> Result<(), ValidationError> {
        self.amount = AmountInput::parse(text)?;
        Ok(())
    }

    pub fn amount(&self) -> &AmountInput {
        &self.amount
    }

    pub fn clear_amount(&mut self) {
        self.amount = AmountInput::empty();
    }

    pub fn from_currency(&self) -> &str {
        &self.from_currency
    }

    pub fn to_currency(&self) -> &str {
        &self.to_currency
    }

    pub fn set_from_currency(&mut self, currency: impl Into<String>) {
        self.from_currency = currency.into();
    }

    pub fn set_to_currency(&mut self, currency: impl Into<String>) {
        self.to_currency = currency.into();
    }

    /// Exchanges source and target. Pure relabeling: prices are untouched.
    pub fn swap_currencies(&mut self) {
        std::mem::swap(&mut self.from_currency, &mut self.to_currency);
    }

    pub fn request(&self) -> ConversionRequest {
        ConversionRequest::new(
            self.from_currency.clone(),
            self.to_currency.clone(),
            self.amount.clone(),
        )
    }

    pub fn result(&self) -> ConversionResult {
        calculate_conversion(self.prices.as_deref(), &self.request())
    }

    /// "1 X ≈ r Y" / "5 X ≈ 5r Y", empty when there is no rate.
    pub fn rate_lines(&self) -> Vec<String> {
        self.result()
            .exchange_rate
            .map(|rate| rate_lines(&self.from_currency, &self.to_currency, rate))
            .unwrap_or_default()
    }

    /// Confirm is enabled only with a non-empty amount and a computed output.
    pub fn can_confirm(&self) -> bool {
        !self.amount.is_empty() && self.result().has_output()
    }
}
