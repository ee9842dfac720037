//! Server configuration read from the environment.

use std::net::{AddrParseError, SocketAddr};

use colorway::DEFAULT_BASE_URL;

/// Variable holding the address to listen on.
pub const ADDR_VAR: &str = "COLORWAY_ADDR";

/// Variable holding the path colors are served under.
pub const BASE_URL_VAR: &str = "COLORWAY_BASE_URL";

const DEFAULT_ADDR: &str = "127.0.0.1:5000";

/// Settings of a running server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// The socket address to listen on.
    pub addr: SocketAddr,
    /// The path colors are served under, without trailing `/`. Also the base
    /// of every `href` in responses.
    pub base_url: String,
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through the given variable lookup, falling back
    /// to defaults for unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                value: addr.clone(),
                source,
            })?;

        let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !base_url.starts_with('/') {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self { addr, base_url })
    }
}

/// A configuration variable with an unusable value.
#[derive(Debug)]
pub enum ConfigError {
    /// The listen address is not a socket address such as `127.0.0.1:5000`.
    InvalidAddr {
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        source: AddrParseError,
    },
    /// The base URL is not an absolute path.
    InvalidBaseUrl(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigError::InvalidAddr { value, .. } => {
                write!(f, "{ADDR_VAR} is not a socket address: '{value}'")
            }
            ConfigError::InvalidBaseUrl(value) => {
                write!(f, "{BASE_URL_VAR} must start with '/': '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidAddr { source, .. } => Some(source),
            ConfigError::InvalidBaseUrl(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.addr, "127.0.0.1:5000".parse().unwrap());
        assert_eq!(config.base_url, "/api/v1/colors");
    }

    #[test]
    fn overrides() {
        let config = config(&[(ADDR_VAR, "0.0.0.0:8080"), (BASE_URL_VAR, "/colors/")]).unwrap();
        assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.base_url, "/colors");
    }

    #[test]
    fn invalid_values() {
        let err = config(&[(ADDR_VAR, "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr { .. }));
        assert!(std::error::Error::source(&err).is_some());

        let err = config(&[(BASE_URL_VAR, "colors")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "COLORWAY_BASE_URL must start with '/': 'colors'"
        );
    }
}
