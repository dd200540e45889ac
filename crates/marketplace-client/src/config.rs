//! Client configuration with environment overrides.

use crate::error::ConfigError;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://qa-internship.avito.com";

pub const BASE_URL_ENV: &str = "MARKETPLACE_BASE_URL";
pub const TIMEOUT_ENV: &str = "MARKETPLACE_TIMEOUT_SECS";
pub const SEED_ENV: &str = "MARKETPLACE_SEED";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Request timeout; `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
    /// Seed for test data generation; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            seed: None,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable source.
    ///
    /// Unset variables fall back to defaults. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut config = Self::default();
        if let Some(base_url) = read(BASE_URL_ENV) {
            config = config.with_base_url(base_url);
        }
        if let Some(raw) = read(TIMEOUT_ENV) {
            config.timeout = Some(Duration::from_secs(parse_number(TIMEOUT_ENV, &raw)?));
        }
        if let Some(raw) = read(SEED_ENV) {
            config.seed = Some(parse_number(SEED_ENV, &raw)?);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: format!("unsupported scheme '{other}'"),
            }),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn parse_number(variable: &str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidNumber {
            variable: variable.to_string(),
            value: raw.to_string(),
        })
}
