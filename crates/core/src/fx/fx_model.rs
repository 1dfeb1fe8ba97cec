use serde::{Deserialize, Serialize};

use crate::constants::{DISPLAY_DECIMAL_PRECISION, RATE_PREVIEW_MULTIPLIER};
use crate::swap::AmountInput;

/// Source/target pair plus an already validated amount.
///
/// The amount can only come from [`AmountInput::parse`], so malformed text
/// never reaches the calculator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    pub from_currency: String,
    pub to_currency: String,
    pub amount: AmountInput,
}

impl ConversionRequest {
    pub fn new(
        from_currency: impl Into<String>,
        to_currency: impl Into<String>,
        amount: AmountInput,
    ) -> Self {
        Self {
            from_currency: from_currency.into(),
            to_currency: to_currency.into(),
            amount,
        }
    }

    /// Same request with source and target exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            from_currency: self.to_currency.clone(),
            to_currency: self.from_currency.clone(),
            amount: self.amount.clone(),
        }
    }
}

/// Derived output of a conversion.
///
/// `output_amount` is `None` when the amount or either price is missing;
/// `exchange_rate` is `None` when either price is missing or not positive.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub output_amount: Option<String>,
    pub exchange_rate: Option<f64>,
}

impl ConversionResult {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Output amount as displayed, empty string when absent.
    pub fn output_display(&self) -> &str {
        self.output_amount.as_deref().unwrap_or("")
    }

    pub fn has_output(&self) -> bool {
        self.output_amount
            .as_deref()
            .is_some_and(|amount| !amount.is_empty())
    }
}

/// Renders a value as fixed-point with six fractional digits.
///
/// A value lying exactly halfway between two six-digit decimals rounds away
/// from zero. `{:.6}` alone would round it to even.
pub fn format_fixed(value: f64) -> String {
    match exact_tie_units(value) {
        Some(units) => {
            let sign = if value < 0.0 { "-" } else { "" };
            format!("{}{}.{:06}", sign, units / 1_000_000, units % 1_000_000)
        }
        None => format!("{:.*}", DISPLAY_DECIMAL_PRECISION, value),
    }
}

/// Millionths of `|value|`, rounded up, when `value` is an exact tie at the
/// sixth fractional digit.
///
/// A double has a decimal expansion ending in 5 at the seventh digit only
/// when `value * 128` is an odd integer, i.e. `value = odd / 128` and the
/// expansion is `odd * 78125` ten-millionths.
fn exact_tie_units(value: f64) -> Option<u128> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53

    let scaled = value * 128.0;
    if !scaled.is_finite() || scaled.fract() != 0.0 || scaled.abs() >= MAX_EXACT {
        return None;
    }
    let odd = scaled.abs() as u128;
    if odd % 2 == 0 {
        return None;
    }
    Some((odd * 78_125 + 5) / 10)
}

/// Display lines for a rate: one unit and five units of the source currency.
///
/// `"1 ETH ≈ 2000.000000 USDC"`, `"5 ETH ≈ 10000.000000 USDC"`
pub fn rate_lines(from_currency: &str, to_currency: &str, rate: f64) -> Vec<String> {
    vec![
        format!(
            "1 {} ≈ {} {}",
            from_currency,
            format_fixed(rate),
            to_currency
        ),
        format!(
            "{} {} ≈ {} {}",
            RATE_PREVIEW_MULTIPLIER,
            from_currency,
            format_fixed(RATE_PREVIEW_MULTIPLIER * rate),
            to_currency
        ),
    ]
}
