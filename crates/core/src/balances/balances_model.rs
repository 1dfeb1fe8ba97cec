use serde::{Deserialize, Serialize};

/// A holding of one currency on one blockchain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalance {
    pub currency: String,
    pub amount: f64,
    pub blockchain: String,
}

impl WalletBalance {
    pub fn new(currency: impl Into<String>, amount: f64, blockchain: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            amount,
            blockchain: blockchain.into(),
        }
    }
}

/// A balance kept by the ranking, with its display fields.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedBalance {
    #[serde(flatten)]
    pub balance: WalletBalance,
    pub priority: i32,
    /// Amount rendered without fractional digits
    pub formatted: String,
    /// `price * amount`, with a missing price counted as zero
    pub usd_value: f64,
}
