//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `SYNAPSE_*` environment
//! variables; the Gemini credential is read from `GEMINI_API_KEY`.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;

use crate::constants::{DEFAULT_GEMINI_URL, DEFAULT_SEARCH_URL};

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SYNAPSE_*` overrides on top of defaults.
/// A missing `GEMINI_API_KEY` is not a startup error: the server boots and
/// reports a configuration error on each LLM-dependent request instead.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Gemini API key. `None` when `GEMINI_API_KEY` is unset or blank.
    pub gemini_api_key: Option<String>,

    /// Gemini `generateContent` endpoint URL.
    pub gemini_url: String,

    /// Search API endpoint URL.
    pub search_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            gemini_api_key: None,
            gemini_url: DEFAULT_GEMINI_URL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "SYNAPSE_PORT";
    const ENV_BIND_ADDR: &'static str = "SYNAPSE_BIND_ADDR";
    const ENV_GEMINI_API_KEY: &'static str = "GEMINI_API_KEY";
    const ENV_GEMINI_URL: &'static str = "SYNAPSE_GEMINI_URL";
    const ENV_SEARCH_URL: &'static str = "SYNAPSE_SEARCH_URL";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let gemini_api_key = Self::parse_optional_string_from_env(Self::ENV_GEMINI_API_KEY);
        let gemini_url = Self::parse_string_from_env(Self::ENV_GEMINI_URL, defaults.gemini_url);
        let search_url = Self::parse_string_from_env(Self::ENV_SEARCH_URL, defaults.search_url);

        Ok(Self {
            port,
            bind_addr,
            gemini_api_key,
            gemini_url,
            search_url,
        })
    }

    /// Validates basic invariants (URL schemes; does not touch the network).
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::check_url(Self::ENV_GEMINI_URL, &self.gemini_url)?;
        Self::check_url(Self::ENV_SEARCH_URL, &self.search_url)?;
        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Returns `true` when a non-empty API key is configured.
    pub fn gemini_configured(&self) -> bool {
        self.gemini_api_key.is_some()
    }

    fn check_url(name: &'static str, value: &str) -> Result<(), ConfigError> {
        if value.starts_with("http://") || value.starts_with("https://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidUrl {
                name,
                value: value.to_string(),
            })
        }
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }
}
