use serde::{Deserialize, Serialize};
use tokenswap_core::fx::{ConversionRequest, ConversionResult};
use tokenswap_core::swap::AmountInput;
use tokenswap_core::ValidationError;

/// Conversion form as submitted by a client. The amount is still raw text.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConversionForm {
    pub from_currency: String,
    pub to_currency: String,
    #[serde(default)]
    pub amount: String,
}

impl TryFrom<ConversionForm> for ConversionRequest {
    type Error = ValidationError;

    fn try_from(form: ConversionForm) -> Result<Self, Self::Error> {
        if form.from_currency.is_empty() {
            return Err(ValidationError::MissingField("fromCurrency".to_string()));
        }
        if form.to_currency.is_empty() {
            return Err(ValidationError::MissingField("toCurrency".to_string()));
        }
        let amount = AmountInput::parse(&form.amount)?;
        Ok(ConversionRequest::new(
            form.from_currency,
            form.to_currency,
            amount,
        ))
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResponse {
    pub from_currency: String,
    pub to_currency: String,
    pub amount: String,
    pub output_amount: String,
    pub exchange_rate: Option<f64>,
    pub rate_lines: Vec<String>,
}

impl ConversionResponse {
    pub fn new(request: &ConversionRequest, result: ConversionResult) -> Self {
        let rate_lines = result
            .exchange_rate
            .map(|rate| {
                tokenswap_core::fx::rate_lines(&request.from_currency, &request.to_currency, rate)
            })
            .unwrap_or_default();
        Self {
            from_currency: request.from_currency.clone(),
            to_currency: request.to_currency.clone(),
            amount: request.amount.to_string(),
            output_amount: result.output_display().to_string(),
            exchange_rate: result.exchange_rate,
            rate_lines,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyOption {
    pub currency: String,
    pub icon_url: String,
}
