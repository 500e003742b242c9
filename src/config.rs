//! Client configuration.
//!
//! Callers hand the library raw librdkafka key/value pairs; the library
//! forwards them verbatim and only interprets the handful of keys it needs
//! for its own bookkeeping (the operation timeout).

use std::time::Duration;

use rdkafka::config::ClientConfig;

use crate::error::{AdminError, Result};

pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Ordered key/value configuration for an admin client. Later entries win,
/// matching librdkafka's own last-set-wins behavior.
#[derive(Debug, Clone, Default)]
pub struct AdminConfig {
    entries: Vec<(String, String)>,
}

impl AdminConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_brokers(brokers: impl Into<String>) -> Self {
        let mut config = Self::new();
        config.set("bootstrap.servers", brokers);
        config
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Timeout applied to every admin operation. Honors `request.timeout.ms`
    /// when the caller sets it, like the upstream admin clients do.
    pub fn operation_timeout(&self) -> Duration {
        self.get("request.timeout.ms")
            .and_then(|ms| ms.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_OPERATION_TIMEOUT)
    }

    /// A client without brokers can never do anything useful; reject it
    /// before librdkafka accepts the config and fails much later.
    pub fn validate(&self) -> Result<()> {
        match self.get("bootstrap.servers") {
            Some(v) if !v.trim().is_empty() => Ok(()),
            _ => Err(AdminError::config("bootstrap.servers is required")),
        }
    }

    pub fn to_client_config(&self) -> ClientConfig {
        let mut client_config = ClientConfig::new();
        for (key, value) in &self.entries {
            client_config.set(key, value);
        }
        client_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_set_wins() {
        let mut config = AdminConfig::new();
        config.set("bootstrap.servers", "a:9092");
        config.set("bootstrap.servers", "b:9092");
        assert_eq!(config.get("bootstrap.servers"), Some("b:9092"));
    }

    #[test]
    fn operation_timeout_defaults_to_thirty_seconds() {
        let config = AdminConfig::from_brokers("localhost:9092");
        assert_eq!(config.operation_timeout(), DEFAULT_OPERATION_TIMEOUT);
    }

    #[test]
    fn operation_timeout_honors_request_timeout_ms() {
        let mut config = AdminConfig::from_brokers("localhost:9092");
        config.set("request.timeout.ms", "1500");
        assert_eq!(config.operation_timeout(), Duration::from_millis(1500));
    }

    #[test]
    fn unparseable_timeout_falls_back_to_default() {
        let mut config = AdminConfig::from_brokers("localhost:9092");
        config.set("request.timeout.ms", "soon");
        assert_eq!(config.operation_timeout(), DEFAULT_OPERATION_TIMEOUT);
    }

    #[test]
    fn validate_requires_bootstrap_servers() {
        assert!(AdminConfig::new().validate().is_err());

        let mut config = AdminConfig::new();
        config.set("bootstrap.servers", "   ");
        assert!(config.validate().is_err());

        assert!(AdminConfig::from_brokers("localhost:9092").validate().is_ok());
    }
}
