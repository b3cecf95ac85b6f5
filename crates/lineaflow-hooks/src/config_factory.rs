//! Hook factory backed by the lineaflow.toml connections table

use crate::factory::{ConnectionHook, HookError, HookFactory};
use lineaflow_core::Config;

/// Builds hooks by resolving identifiers against a loaded [`Config`]
///
/// This is the default production factory: the orchestrator deployment
/// declares its connections in `lineaflow.toml` and every extractor shares
/// one instance of this factory.
#[derive(Debug, Clone)]
pub struct ConfigHookFactory {
    config: Config,
}

impl ConfigHookFactory {
    /// Create a factory over a loaded config
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Number of connections the factory can resolve
    pub fn connection_count(&self) -> usize {
        self.config.connections.len()
    }
}

impl HookFactory for ConfigHookFactory {
    fn build_hook(&self, conn_id: &str) -> Result<ConnectionHook, HookError> {
        let connection = self
            .config
            .connection(conn_id)
            .cloned()
            .ok_or_else(|| HookError::UnknownConnId(conn_id.to_string()))?;

        tracing::debug!(conn_id, host = %connection.host, "built connection hook");

        Ok(ConnectionHook::new(conn_id, connection))
    }
}
