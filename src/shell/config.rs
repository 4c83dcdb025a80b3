// Runtime configuration read from the environment.
//
// TASK_TRACKER_ADDR       bind address, defaults to 0.0.0.0:8080
// SUPABASE_URL            hosted store base url
// SUPABASE_SERVICE_KEY    hosted store service key
//
// Without both store variables the service runs on the in-memory store.

use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid TASK_TRACKER_ADDR {value:?}: {reason}")]
    InvalidAddr { value: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    InMemory,
    Postgrest { url: String, service_key: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub store: StoreConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup("TASK_TRACKER_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidAddr {
                value: raw_addr.clone(),
                reason: e.to_string(),
            })?;

        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let store = match (non_empty("SUPABASE_URL"), non_empty("SUPABASE_SERVICE_KEY")) {
            (Some(url), Some(service_key)) => StoreConfig::Postgrest { url, service_key },
            _ => StoreConfig::InMemory,
        };

        Ok(Self { addr, store })
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[rstest]
    fn it_should_default_to_the_in_memory_store() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr, DEFAULT_ADDR.parse().unwrap());
        assert_eq!(config.store, StoreConfig::InMemory);
    }

    #[rstest]
    fn it_should_use_the_hosted_store_when_both_variables_are_set() {
        let config = Config::from_lookup(lookup(&[
            ("TASK_TRACKER_ADDR", "127.0.0.1:3000"),
            ("SUPABASE_URL", "https://db.example.test"),
            ("SUPABASE_SERVICE_KEY", "secret"),
        ]))
        .unwrap();
        assert_eq!(config.addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(
            config.store,
            StoreConfig::Postgrest {
                url: "https://db.example.test".into(),
                service_key: "secret".into()
            }
        );
    }

    #[rstest]
    #[case(&[("SUPABASE_URL", "https://db.example.test")])]
    #[case(&[("SUPABASE_URL", "https://db.example.test"), ("SUPABASE_SERVICE_KEY", " ")])]
    fn it_should_fall_back_when_the_store_is_half_configured(#[case] pairs: &[(&str, &str)]) {
        let config = Config::from_lookup(lookup(pairs)).unwrap();
        assert_eq!(config.store, StoreConfig::InMemory);
    }

    #[rstest]
    fn it_should_reject_an_invalid_address() {
        let result = Config::from_lookup(lookup(&[("TASK_TRACKER_ADDR", "not-an-addr")]));
        assert!(matches!(result, Err(ConfigError::InvalidAddr { .. })));
    }
}
