//! Configuration loading for the grid-robot service

use crate::error::ServiceError;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "grid-robot.toml";

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener settings
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Bind address (default: 0.0.0.0)
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Logging settings
#[derive(Clone, Debug, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter used when `RUST_LOG` is unset (default: grid_robot=info)
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_filter() -> String {
    "grid_robot=info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ServiceError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ServiceError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self, ServiceError> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply the value of the `PORT` environment variable, if set.
    pub fn apply_port_env(&mut self, port: Option<String>) -> Result<(), ServiceError> {
        if let Some(port) = port {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| ServiceError::Config(format!("invalid PORT value: {port:?}")))?;
        }
        Ok(())
    }

    /// Apply command line overrides; they take precedence over file and environment.
    pub fn apply_overrides(&mut self, host: Option<String>, port: Option<u16>) {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ServiceError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse::<SocketAddr>()
            .map_err(|e| {
                ServiceError::Config(format!(
                    "invalid listen address {}:{}: {e}",
                    self.server.host, self.server.port
                ))
            })
    }
}
