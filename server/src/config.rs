//! Sync configuration parsed from environment variables.

use flights::DEFAULT_FLIGHT_LIMIT;

pub const DEFAULT_OPENSKY_API_URL: &str = "https://opensky-network.org/api/states/all";
pub const DEFAULT_SYNC_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_OPENSKY_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_OPENSKY_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid OPENSKY_API_URL '{0}': expected an http(s) URL")]
    InvalidApiUrl(String),

    #[error("FLIGHT_LIMIT must be greater than zero")]
    ZeroFlightLimit,

    #[error("{var} must be greater than zero")]
    ZeroInterval { var: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub api_url: String,
    /// Maximum state vectors kept from one upstream response.
    pub flight_limit: usize,
    pub interval_secs: u64,
    pub timeouts: HttpTimeouts,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_OPENSKY_API_URL.to_owned(),
            flight_limit: DEFAULT_FLIGHT_LIMIT,
            interval_secs: DEFAULT_SYNC_INTERVAL_SECS,
            timeouts: HttpTimeouts {
                request_secs: DEFAULT_OPENSKY_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_OPENSKY_CONNECT_TIMEOUT_SECS,
            },
        }
    }
}

impl SyncConfig {
    /// Build typed sync config from environment variables.
    ///
    /// Optional:
    /// - `OPENSKY_API_URL`: default `https://opensky-network.org/api/states/all`
    /// - `FLIGHT_LIMIT`: default 300
    /// - `SYNC_INTERVAL_SECS`: default 60
    /// - `OPENSKY_REQUEST_TIMEOUT_SECS`: default 15
    /// - `OPENSKY_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// Numeric values that fail to parse fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a non-http URL or a zero limit/interval.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = std::env::var("OPENSKY_API_URL").unwrap_or_else(|_| DEFAULT_OPENSKY_API_URL.to_owned());
        let config = Self {
            api_url: api_url.trim().to_owned(),
            flight_limit: env_parse("FLIGHT_LIMIT", DEFAULT_FLIGHT_LIMIT),
            interval_secs: env_parse("SYNC_INTERVAL_SECS", DEFAULT_SYNC_INTERVAL_SECS),
            timeouts: HttpTimeouts {
                request_secs: env_parse("OPENSKY_REQUEST_TIMEOUT_SECS", DEFAULT_OPENSKY_REQUEST_TIMEOUT_SECS),
                connect_secs: env_parse("OPENSKY_CONNECT_TIMEOUT_SECS", DEFAULT_OPENSKY_CONNECT_TIMEOUT_SECS),
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that defaults always satisfy but env overrides may not.
    ///
    /// # Errors
    ///
    /// See [`SyncConfig::from_env`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(self.api_url.clone()));
        }
        if self.flight_limit == 0 {
            return Err(ConfigError::ZeroFlightLimit);
        }
        if self.interval_secs == 0 {
            return Err(ConfigError::ZeroInterval { var: "SYNC_INTERVAL_SECS" });
        }
        if self.timeouts.request_secs == 0 {
            return Err(ConfigError::ZeroInterval { var: "OPENSKY_REQUEST_TIMEOUT_SECS" });
        }
        if self.timeouts.connect_secs == 0 {
            return Err(ConfigError::ZeroInterval { var: "OPENSKY_CONNECT_TIMEOUT_SECS" });
        }
        Ok(())
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
