use super::fx_model::{format_fixed, ConversionRequest, ConversionResult};
use super::price_table::PriceTable;

/// Conversion arithmetic over a normalized [`PriceTable`].
///
/// Every price is per unit of the same reference currency, so any pair
/// converts through it directly: `amount * from_price / to_price`.
/// Holds a borrow of the table and nothing else, so it is cheap to rebuild
/// on every input change.
pub struct CurrencyConverter<'a> {
    table: &'a PriceTable,
}

impl<'a> CurrencyConverter<'a> {
    pub fn new(table: &'a PriceTable) -> Self {
        Self { table }
    }

    /// Converts `amount` units of `from_currency` into `to_currency`.
    ///
    /// Returns `None` when either price is missing, the target price is
    /// zero, or the result is not finite.
    pub fn convert_amount(&self, amount: f64, from_currency: &str, to_currency: &str) -> Option<f64> {
        if !amount.is_finite() {
            return None;
        }

        let from_price = self.table.price(from_currency)?;
        let to_price = self.table.price(to_currency)?;

        if to_price == 0.0 {
            return None;
        }

        let converted = (amount * from_price) / to_price;
        converted.is_finite().then_some(converted)
    }

    /// Price of one unit of `from_currency` in `to_currency`.
    ///
    /// Only defined when both prices are present and strictly positive.
    pub fn get_rate(&self, from_currency: &str, to_currency: &str) -> Option<f64> {
        let from_price = self.table.price(from_currency)?;
        let to_price = self.table.price(to_currency)?;

        if from_price > 0.0 && to_price > 0.0 {
            Some(from_price / to_price)
        } else {
            None
        }
    }
}

/// Computes the conversion result for a request against an optional table.
///
/// Output amount and rate are computed independently: a missing or empty
/// amount still yields a rate when both currencies are priced.
pub fn calculate_conversion(
    table: Option<&PriceTable>,
    request: &ConversionRequest,
) -> ConversionResult {
    let Some(table) = table else {
        return ConversionResult::empty();
    };

    let converter = CurrencyConverter::new(table);

    let output_amount = request
        .amount
        .value()
        .and_then(|amount| {
            converter.convert_amount(amount, &request.from_currency, &request.to_currency)
        })
        .map(format_fixed);

    let exchange_rate = converter.get_rate(&request.from_currency, &request.to_currency);

    ConversionResult {
        output_amount,
        exchange_rate,
    }
}
