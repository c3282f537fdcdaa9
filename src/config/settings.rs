//! Client configuration resolved from the environment

use std::fmt;

use crate::api::endpoints::DEFAULT_GATEWAY_URL;
use crate::error::{AppError, Result};

/// Environment variable holding the gateway subscription key
pub const SUBSCRIPTION_KEY_ENV: &str = "SUBSCRIPTION_KEY";

/// Environment variable overriding the gateway origin
pub const GATEWAY_URL_ENV: &str = "NYC311_GATEWAY_URL";

/// Opaque gateway credential. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct SubscriptionKey(String);

impl SubscriptionKey {
    /// Wrap a key, rejecting blank values
    pub fn new(key: &str) -> Result<Self> {
        let key = key.trim();
        if key.is_empty() {
            return Err(AppError::MissingCredential(SUBSCRIPTION_KEY_ENV));
        }
        Ok(Self(key.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SubscriptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SubscriptionKey(***)")
    }
}

/// Everything a client needs to reach the gateway
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Gateway origin without trailing slash (e.g., "https://api.nyc.gov")
    pub base_url: String,
    pub subscription_key: SubscriptionKey,
}

impl ClientConfig {
    /// Create a config for the default gateway
    pub fn new(subscription_key: SubscriptionKey) -> Self {
        Self {
            base_url: DEFAULT_GATEWAY_URL.to_string(),
            subscription_key,
        }
    }

    /// Point the client at a different origin (staging gateway, mock server)
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
            return Err(AppError::Config(format!(
                "Gateway URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }

    /// Resolve from `SUBSCRIPTION_KEY` and, optionally, `NYC311_GATEWAY_URL`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = lookup(SUBSCRIPTION_KEY_ENV)
            .ok_or(AppError::MissingCredential(SUBSCRIPTION_KEY_ENV))?;
        let config = Self::new(SubscriptionKey::new(&key)?);

        match lookup(GATEWAY_URL_ENV) {
            Some(url) if !url.trim().is_empty() => config.with_base_url(&url),
            _ => Ok(config),
        }
    }
}
