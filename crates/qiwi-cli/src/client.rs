//! Builds a [`WalletClient`] from command-line flags and the environment

use anyhow::{Context, Result};
use qiwi_wallet::{WalletClient, WalletConfig};

/// Environment variable holding the API token
pub const TOKEN_VAR: &str = "TOKEN";

/// Environment variable holding the wallet phone number
pub const PHONE_VAR: &str = "PHONE_NUMBER";

/// Connection settings gathered from flags, falling back to the environment
#[derive(Debug, Default)]
pub struct Connection {
    pub token: Option<String>,
    pub phone: Option<String>,
    pub base_url: Option<String>,
}

impl Connection {
    pub fn connect(self) -> Result<WalletClient> {
        let token = resolve(self.token, TOKEN_VAR)?;
        let phone = resolve(self.phone, PHONE_VAR)?;

        let mut config = WalletConfig::from_env();
        if let Some(url) = self.base_url.as_deref() {
            config = config.base_url(url);
        }
        tracing::debug!(base_url = %config.base_url, %phone, "connecting");

        WalletClient::with_config(token, &phone, config).context("Invalid wallet credentials")
    }
}

fn resolve(flag: Option<String>, var: &str) -> Result<String> {
    match flag {
        Some(value) => Ok(value),
        None => std::env::var(var)
            .with_context(|| format!("{} not set: pass it as a flag or put it in .env", var)),
    }
}
