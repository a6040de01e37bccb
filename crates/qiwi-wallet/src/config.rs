//! Client configuration

use std::time::Duration;

/// Public QIWI API host
pub const DEFAULT_BASE_URL: &str = "https://edge.qiwi.com";

/// Client configuration
#[derive(Debug, Clone)]
pub struct WalletConfig {
    /// Provider host, without a trailing slash
    pub base_url: String,
    /// Request timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl WalletConfig {
    /// Defaults overridden by `QIWI_BASE_URL` and `QIWI_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("QIWI_BASE_URL") {
            config = config.base_url(&url);
        }
        if let Some(secs) = std::env::var("QIWI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.timeout = Some(Duration::from_secs(secs));
        }
        config
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = WalletConfig::default();
        assert_eq!(config.base_url, "https://edge.qiwi.com");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let config = WalletConfig::default().base_url("http://localhost:9000/");
        assert_eq!(config.base_url, "http://localhost:9000");
    }
}
