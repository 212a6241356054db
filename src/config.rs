use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TICK_RATE_MS: u64 = 33;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    Missing(&'static str),

    #[error("{name} must be an absolute http(s) URL, got {value:?}")]
    InvalidUrl { name: &'static str, value: String },

    #[error("{name} must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
    pub request_timeout: Duration,
    pub tick_rate: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. `VITE_`-prefixed
    /// names are accepted so an existing web `.env` keeps working.
    pub fn from_vars<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |primary: &str, fallback: &str| {
            get(primary)
                .or_else(|| get(fallback))
                .filter(|v| !v.trim().is_empty())
        };

        let api_url = lookup("API_URL", "VITE_API_URL").ok_or(ConfigError::Missing("API_URL"))?;
        let api_url = api_url.trim().to_string();
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl {
                name: "API_URL",
                value: api_url,
            });
        }

        let api_key = lookup("API_KEY", "VITE_API_KEY").ok_or(ConfigError::Missing("API_KEY"))?;

        let request_timeout = match get("TOPSTREAMS_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        name: "TOPSTREAMS_TIMEOUT_SECS",
                        value: raw,
                    });
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_url,
            api_key,
            request_timeout,
            tick_rate: Duration::from_millis(DEFAULT_TICK_RATE_MS),
        })
    }
}
