use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One reported price record from the external feed.
///
/// The `date` is kept exactly as the feed sent it. Use
/// [`timestamp`](Self::timestamp) to get the parsed instant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    /// Token or currency code, e.g. "ETH"
    pub currency: String,

    /// Price per unit in the feed's reference currency
    pub price: f64,

    /// Observation time as received (RFC 3339 or `YYYY-MM-DD`)
    pub date: String,
}

impl PriceObservation {
    pub fn new(currency: impl Into<String>, price: f64, date: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            price,
            date: date.into(),
        }
    }

    /// Parses `date` into a UTC instant.
    ///
    /// Accepts RFC 3339 (`2023-08-29T07:10:40.000Z`) and bare dates
    /// (`2024-01-01`, read as midnight UTC). Returns `None` for anything else.
    ///
    /// `Option` orders `None` before every `Some`, so an unparseable date
    /// compares as older than any parseable one.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = self.date.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parses_feed_timestamp() {
        let obs = PriceObservation::new("BLUR", 0.2081, "2023-08-29T07:10:40.000Z");
        assert_eq!(
            obs.timestamp(),
            Some(Utc.with_ymd_and_hms(2023, 8, 29, 7, 10, 40).unwrap())
        );
    }

    #[test]
    fn test_parses_bare_date_as_midnight() {
        let obs = PriceObservation::new("BTC", 30000.0, "2024-01-02");
        assert_eq!(
            obs.timestamp(),
            Some(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_unparseable_date_is_none() {
        let obs = PriceObservation::new("BTC", 30000.0, "yesterday");
        assert!(obs.timestamp().is_none());
        assert!(obs.timestamp() < PriceObservation::new("BTC", 1.0, "1970-01-01").timestamp());
    }

    #[test]
    fn test_deserializes_feed_entry() {
        let json = r#"{"currency":"USDC","date":"2023-08-29T07:10:30.000Z","price":0.989832}"#;
        let obs: PriceObservation = serde_json::from_str(json).unwrap();
        assert_eq!(obs.currency, "USDC");
        assert_eq!(obs.price, 0.989832);
        assert!(obs.timestamp().is_some());
    }
}
