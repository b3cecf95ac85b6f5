//! Configuration schema (lineaflow.toml)

use crate::connection::Connection;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Main configuration structure
///
/// The `[connections]` table maps connection identifiers to their resolved
/// settings; the config-backed hook factory looks identifiers up here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Known connections, keyed by connection identifier
    #[serde(default)]
    pub connections: HashMap<String, Connection>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            connections: HashMap::new(),
        }
    }
}

impl Config {
    /// Load config from TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load config from TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save config to TOML file
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let toml =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, toml).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Look up a connection by identifier
    pub fn connection(&self, conn_id: &str) -> Option<&Connection> {
        self.connections.get(conn_id)
    }

    /// Add a connection
    pub fn with_connection(mut self, conn_id: impl Into<String>, connection: Connection) -> Self {
        self.connections.insert(conn_id.into(), connection);
        self
    }
}

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_is_empty() {
        let config = Config::default();
        assert!(config.connections.is_empty());
    }

    #[test]
    fn parse_connections_table() {
        let toml = r#"
            [connections.redshift_default]
            host = "cluster.abc123.us-east-1.redshift.amazonaws.com"
            port = 5439
            database = "analytics"
            login = "etl"
            password = "s3cret"

            [connections.pg_main]
            host = "localhost"
            port = 5432
        "#;

        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.connections.len(), 2);

        let redshift = config.connection("redshift_default").unwrap();
        assert_eq!(
            redshift.host,
            "cluster.abc123.us-east-1.redshift.amazonaws.com"
        );
        assert_eq!(redshift.port, Some(5439));
        assert_eq!(redshift.database.as_deref(), Some("analytics"));

        assert!(config.connection("unknown").is_none());
    }

    #[test]
    fn parse_error_on_bad_toml() {
        let result = Config::from_toml("connections = 42");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = Config::from_file(std::path::Path::new("/nonexistent/lineaflow.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn config_toml_roundtrip() {
        let config = Config::default().with_connection(
            "pg_main",
            Connection::new("localhost").with_port(5432).with_database("app"),
        );

        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(config, parsed);
    }
}
