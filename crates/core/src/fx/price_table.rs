use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use tokenswap_market_data::PriceObservation;

/// Deduplicated price table: one observation per currency, the freshest one.
///
/// Backed by a `BTreeMap`, so iteration is always in ascending byte-wise
/// order of currency code.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceTable {
    entries: BTreeMap<String, PriceObservation>,
}

impl PriceTable {
    /// Builds a table from raw observations, keeping the latest per currency.
    ///
    /// Unparseable dates rank below every parseable date and are logged at
    /// `debug`. See [`normalize_prices_with`] to observe them directly.
    pub fn from_observations<I>(observations: I) -> Self
    where
        I: IntoIterator<Item = PriceObservation>,
    {
        normalize_prices_with(observations, |obs| {
            log::debug!(
                "Price observation for {} has an unparseable date '{}'",
                obs.currency,
                obs.date
            );
        })
    }

    pub fn get(&self, currency: &str) -> Option<&PriceObservation> {
        self.entries.get(currency)
    }

    /// Per-unit price for a currency.
    pub fn price(&self, currency: &str) -> Option<f64> {
        self.entries.get(currency).map(|obs| obs.price)
    }

    pub fn contains(&self, currency: &str) -> bool {
        self.entries.contains_key(currency)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Currency codes in table order.
    pub fn currencies(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Observations in table order.
    pub fn iter(&self) -> impl Iterator<Item = &PriceObservation> {
        self.entries.values()
    }

    /// Consumes the table into its observations, sorted by currency.
    pub fn into_observations(self) -> Vec<PriceObservation> {
        self.entries.into_values().collect()
    }
}

impl IntoIterator for PriceTable {
    type Item = PriceObservation;
    type IntoIter = btree_map::IntoValues<String, PriceObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl FromIterator<PriceObservation> for PriceTable {
    fn from_iter<I: IntoIterator<Item = PriceObservation>>(iter: I) -> Self {
        Self::from_observations(iter)
    }
}

/// Serialized as the sorted observation list, the same shape the feed uses.
impl Serialize for PriceTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.values())
    }
}

/// Normalizes raw observations into a [`PriceTable`].
pub fn normalize_prices<I>(observations: I) -> PriceTable
where
    I: IntoIterator<Item = PriceObservation>,
{
    PriceTable::from_observations(observations)
}

/// Normalizes raw observations, reporting every observation whose date
/// cannot be parsed to `on_malformed`.
///
/// Single left-to-right pass. An entry is replaced only when the incoming
/// date is strictly later, so on equal dates the first one seen stays.
/// This never fails: malformed entries are deprioritized, not rejected.
pub fn normalize_prices_with<I, F>(observations: I, mut on_malformed: F) -> PriceTable
where
    I: IntoIterator<Item = PriceObservation>,
    F: FnMut(&PriceObservation),
{
    let mut entries: BTreeMap<String, PriceObservation> = BTreeMap::new();

    for obs in observations {
        let incoming = obs.timestamp();
        if incoming.is_none() {
            on_malformed(&obs);
        }

        match entries.entry(obs.currency.clone()) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(obs);
            }
            btree_map::Entry::Occupied(mut slot) => {
                if incoming > slot.get().timestamp() {
                    slot.insert(obs);
                }
            }
        }
    }

    PriceTable { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(currency: &str, price: f64, date: &str) -> PriceObservation {
        PriceObservation::new(currency, price, date)
    }

    #[test]
    fn test_empty_input_yields_empty_table() {
        let table = normalize_prices(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_keeps_latest_observation() {
        let table = normalize_prices(vec![
            obs("BTC", 30000.0, "2024-01-01"),
            obs("BTC", 31000.0, "2024-01-02"),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.price("BTC"), Some(31000.0));
    }

    #[test]
    fn test_keeps_latest_regardless_of_order() {
        let table = normalize_prices(vec![
            obs("BTC", 31000.0, "2024-01-02"),
            obs("BTC", 30000.0, "2024-01-01"),
        ]);
        assert_eq!(table.price("BTC"), Some(31000.0));
    }

    #[test]
    fn test_equal_dates_keep_first_seen() {
        let table = normalize_prices(vec![
            obs("USDC", 1.0, "2023-08-29T07:10:30.000Z"),
            obs("USDC", 0.99, "2023-08-29T07:10:30.000Z"),
        ]);
        assert_eq!(table.price("USDC"), Some(1.0));
    }

    #[test]
    fn test_equal_instants_in_different_formats_keep_first_seen() {
        let table = normalize_prices(vec![
            obs("ATOM", 7.0, "2024-01-01"),
            obs("ATOM", 7.5, "2024-01-01T00:00:00Z"),
        ]);
        assert_eq!(table.price("ATOM"), Some(7.0));
    }

    #[test]
    fn test_unparseable_date_loses_to_parseable() {
        let table = normalize_prices(vec![
            obs("OSMO", 0.5, "not a date"),
            obs("OSMO", 0.4, "2020-01-01"),
        ]);
        assert_eq!(table.price("OSMO"), Some(0.4));

        let table = normalize_prices(vec![
            obs("OSMO", 0.4, "2020-01-01"),
            obs("OSMO", 0.5, "not a date"),
        ]);
        assert_eq!(table.price("OSMO"), Some(0.4));
    }

    #[test]
    fn test_unparseable_only_keeps_first() {
        let table = normalize_prices(vec![obs("EVMOS", 1.0, "?"), obs("EVMOS", 2.0, "??")]);
        assert_eq!(table.price("EVMOS"), Some(1.0));
    }

    #[test]
    fn test_malformed_callback_sees_each_bad_date() {
        let mut malformed = Vec::new();
        let table = normalize_prices_with(
            vec![
                obs("A", 1.0, "bad"),
                obs("B", 2.0, "2024-01-01"),
                obs("A", 3.0, "also bad"),
            ],
            |o| malformed.push(o.date.clone()),
        );
        assert_eq!(table.len(), 2);
        assert_eq!(malformed, vec!["bad".to_string(), "also bad".to_string()]);
    }

    #[test]
    fn test_sorted_by_currency() {
        let table = normalize_prices(vec![
            obs("USDC", 1.0, "2024-01-01"),
            obs("ATOM", 7.0, "2024-01-01"),
            obs("ETH", 2000.0, "2024-01-01"),
            obs("bNEO", 7.1, "2024-01-01"),
        ]);
        let currencies: Vec<&str> = table.currencies().collect();
        assert_eq!(currencies, vec!["ATOM", "ETH", "USDC", "bNEO"]);
    }

    #[test]
    fn test_mixed_case_codes_sort_after_uppercase() {
        let table = normalize_prices(vec![
            obs("wstETH", 2100.0, "2024-01-01"),
            obs("SWTH", 0.004, "2024-01-01"),
            obs("axlUSDC", 1.0, "2024-01-01"),
            obs("rSWTH", 0.004, "2024-01-01"),
            obs("ATOM", 7.0, "2024-01-01"),
            obs("ampLUNA", 0.5, "2024-01-01"),
            obs("bNEO", 7.1, "2024-01-01"),
        ]);
        let currencies: Vec<&str> = table.currencies().collect();
        assert_eq!(
            currencies,
            vec!["ATOM", "SWTH", "ampLUNA", "axlUSDC", "bNEO", "rSWTH", "wstETH"]
        );
    }

    #[test]
    fn test_renormalizing_is_a_fixed_point() {
        let table = normalize_prices(vec![
            obs("ETH", 1900.0, "2024-01-01"),
            obs("ETH", 2000.0, "2024-01-03"),
            obs("USDC", 1.0, "2024-01-02"),
        ]);
        let again = normalize_prices(table.clone().into_observations());
        assert_eq!(again, table);
    }

    #[test]
    fn test_serializes_as_sorted_list() {
        let table = normalize_prices(vec![
            obs("USDC", 1.0, "2024-01-01"),
            obs("ETH", 2000.0, "2024-01-01"),
        ]);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json[0]["currency"], "ETH");
        assert_eq!(json[1]["currency"], "USDC");
        assert_eq!(json[1]["date"], "2024-01-01");
    }

    #[test]
    fn test_collect_into_table() {
        let table: PriceTable = vec![obs("ETH", 1.0, "2024-01-01")].into_iter().collect();
        assert!(table.contains("ETH"));
        assert!(!table.contains("BTC"));
    }
}
