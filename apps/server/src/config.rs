use std::{
    net::{Ipv4Addr, SocketAddr, SocketAddrV4},
    str::FromStr,
    time::Duration,
};

use tokenswap_core::constants::DEFAULT_CONFIRM_DELAY_MS;
use tokenswap_market_data::DEFAULT_PRICE_FEED_URL;

const DEFAULT_LISTEN_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8088));

pub struct Config {
    pub listen_addr: SocketAddr,
    pub price_feed_url: String,
    pub confirm_delay: Duration,
    pub cors_allow: Vec<String>,
}

impl Config {
    /// Reads `TS_*` variables from the process environment.
    ///
    /// Load `.env` before calling this.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let listen_addr = parse_or_default(
            "TS_LISTEN_ADDR",
            lookup("TS_LISTEN_ADDR"),
            DEFAULT_LISTEN_ADDR,
        );
        let price_feed_url = lookup("TS_PRICE_FEED_URL")
            .unwrap_or_else(|| DEFAULT_PRICE_FEED_URL.to_string());
        let confirm_delay_ms = parse_or_default(
            "TS_CONFIRM_DELAY_MS",
            lookup("TS_CONFIRM_DELAY_MS"),
            DEFAULT_CONFIRM_DELAY_MS,
        );
        let cors_allow = lookup("TS_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self {
            listen_addr,
            price_feed_url,
            confirm_delay: Duration::from_millis(confirm_delay_ms),
            cors_allow,
        }
    }
}

fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("Invalid {} '{}', using {}", key, raw, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_listen_addr() {
        assert_eq!(DEFAULT_LISTEN_ADDR.to_string(), "0.0.0.0:8088");
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(config.price_feed_url, DEFAULT_PRICE_FEED_URL);
        assert_eq!(
            config.confirm_delay,
            Duration::from_millis(DEFAULT_CONFIRM_DELAY_MS)
        );
        assert_eq!(config.cors_allow, vec!["*".to_string()]);
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("TS_LISTEN_ADDR", "not-an-address"),
            ("TS_CONFIRM_DELAY_MS", "soon"),
        ]);
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(
            config.confirm_delay,
            Duration::from_millis(DEFAULT_CONFIRM_DELAY_MS)
        );
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("TS_LISTEN_ADDR", "127.0.0.1:9000"),
            ("TS_PRICE_FEED_URL", "http://localhost/prices.json"),
            ("TS_CONFIRM_DELAY_MS", "0"),
            ("TS_CORS_ALLOW_ORIGINS", "http://a.test, ,http://b.test"),
        ]);
        assert_eq!(config.listen_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.price_feed_url, "http://localhost/prices.json");
        assert_eq!(config.confirm_delay, Duration::ZERO);
        assert_eq!(
            config.cors_allow,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }
}
