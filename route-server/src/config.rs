//! Process configuration, read once at startup.

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::directions::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DirectionsConfig};

/// Origin allowed for CORS when `ALLOWED_ORIGINS` is unset.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

const DEFAULT_HOST: IpAddr = IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8000;

/// Errors building the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Server configuration.
#[derive(Clone)]
pub struct AppConfig {
    /// Directions API key; `None` when unset or empty
    pub api_key: Option<String>,

    /// Origins allowed to call the API from a browser
    pub allowed_origins: Vec<String>,

    /// Address the server listens on
    pub bind_addr: SocketAddr,

    /// Base URL of the directions provider
    pub directions_base_url: String,

    /// Bound on each upstream call
    pub directions_timeout: Duration,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("GOOGLE_MAPS_API_KEY").filter(|k| !k.trim().is_empty());

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_ALLOWED_ORIGIN.to_string()]);

        let host = parse_var(&lookup, "HOST", DEFAULT_HOST)?;
        let port = parse_var(&lookup, "PORT", DEFAULT_PORT)?;
        let timeout_secs = parse_var(&lookup, "DIRECTIONS_TIMEOUT_SECS", DEFAULT_TIMEOUT.as_secs())?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "DIRECTIONS_TIMEOUT_SECS",
                value: lookup("DIRECTIONS_TIMEOUT_SECS").unwrap_or_default(),
            });
        }

        let directions_base_url =
            lookup("DIRECTIONS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            allowed_origins,
            bind_addr: SocketAddr::new(host, port),
            directions_base_url,
            directions_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Configuration for the directions client.
    pub fn directions_config(&self) -> DirectionsConfig {
        DirectionsConfig::new(self.api_key.clone())
            .with_base_url(&self.directions_base_url)
            .with_timeout(self.directions_timeout)
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("allowed_origins", &self.allowed_origins)
            .field("bind_addr", &self.bind_addr)
            .field("directions_base_url", &self.directions_base_url)
            .field("directions_timeout", &self.directions_timeout)
            .finish()
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
