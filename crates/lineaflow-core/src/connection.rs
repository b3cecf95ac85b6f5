//! Resolved connection records
//!
//! A [`Connection`] holds the settings one connection identifier resolves to:
//! host, port, database, credentials, and any dialect-specific extras. These
//! records live in the `[connections]` table of `lineaflow.toml` and are the
//! payload of every connection hook.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Connection settings for one connection identifier
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Server hostname or IP
    pub host: String,

    /// Server port, when the dialect uses one
    #[serde(default)]
    pub port: Option<u16>,

    /// Database name
    #[serde(default)]
    pub database: Option<String>,

    /// Schema to use when queries do not qualify table names
    #[serde(default)]
    pub schema: Option<String>,

    /// Login user
    #[serde(default)]
    pub login: Option<String>,

    /// Login password
    #[serde(default)]
    pub password: Option<String>,

    /// Dialect-specific extra settings
    #[serde(default)]
    pub extra: HashMap<String, String>,
}

impl Connection {
    /// Create a connection with just a host
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: None,
            database: None,
            schema: None,
            login: None,
            password: None,
            extra: HashMap::new(),
        }
    }

    /// Set the port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the database
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set the schema
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Set login credentials
    pub fn with_credentials(
        mut self,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.login = Some(login.into());
        self.password = Some(password.into());
        self
    }

    /// Set a dialect-specific extra
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Host with port appended when present
    pub fn authority(&self) -> String {
        match self.port {
            Some(port) => format!("{}:{}", self.host, port),
            None => self.host.clone(),
        }
    }
}

// Passwords must never reach logs or reports.
impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("schema", &self.schema)
            .field("login", &self.login)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("extra", &self.extra)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn authority_with_and_without_port() {
        let conn = Connection::new("warehouse.example.com").with_port(5439);
        assert_eq!(conn.authority(), "warehouse.example.com:5439");

        let conn = Connection::new("warehouse.example.com");
        assert_eq!(conn.authority(), "warehouse.example.com");
    }

    #[test]
    fn debug_redacts_password() {
        let conn = Connection::new("db.example.com").with_credentials("etl", "s3cret");

        let debug = format!("{:?}", conn);
        assert!(!debug.contains("s3cret"));
        assert!(debug.contains("***"));
        assert!(debug.contains("etl"));
    }

    #[test]
    fn connection_toml_roundtrip() {
        let conn = Connection::new("db.example.com")
            .with_port(5432)
            .with_database("analytics")
            .with_extra("sslmode", "require");

        let toml = toml::to_string(&conn).unwrap();
        let parsed: Connection = toml::from_str(&toml).unwrap();
        assert_eq!(conn, parsed);
    }
}
