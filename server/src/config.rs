//! Server configuration read from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const HOST_VAR: &str = "TODO_HOST";
pub const PORT_VAR: &str = "PORT";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {var}")]
    Invalid { var: &'static str, value: String },
}

/// Where the HTTP listener binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable lookup. Unset variables
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: parse_var(&lookup, HOST_VAR)?.unwrap_or(defaults.host),
            port: parse_var(&lookup, PORT_VAR)?.unwrap_or(defaults.port),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(value) = lookup(var) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::Invalid { var, value })
}
