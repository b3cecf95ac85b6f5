//! Mock hook factory for testing
//!
//! Returns predefined connections without touching any orchestrator store.
//! Useful for:
//! - Unit testing extractor dispatch and hook construction
//! - Verifying connection identifiers pass through extractors unchanged
//! - Simulating host-side construction failures
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lineaflow_core::Connection;
//! use lineaflow_hooks::{HookFactory, MockHookFactory};
//!
//! let factory = MockHookFactory::new()
//!     .with_connection("redshift_default", Connection::new("cluster.example.com"));
//!
//! let hook = factory.build_hook("redshift_default")?;
//! assert_eq!(factory.requested_ids(), vec!["redshift_default"]);
//! ```

use crate::factory::{ConnectionHook, HookError, HookFactory};
use lineaflow_core::Connection;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock hook factory
///
/// Stores connections in memory and records every identifier it is asked to
/// build, so tests can assert on exactly what an extractor requested.
pub struct MockHookFactory {
    /// Predefined connections by identifier
    connections: HashMap<String, Connection>,

    /// Error to return instead of building any hook
    forced_error: Option<HookError>,

    /// Identifiers passed to build_hook, in call order
    requested: Mutex<Vec<String>>,
}

impl MockHookFactory {
    /// Create a mock factory with no predefined connections
    pub fn new() -> Self {
        Self {
            connections: HashMap::new(),
            forced_error: None,
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Add a connection for an identifier
    pub fn with_connection(mut self, conn_id: impl Into<String>, connection: Connection) -> Self {
        self.connections.insert(conn_id.into(), connection);
        self
    }

    /// Make every build fail with the given error
    ///
    /// This simulates the host framework refusing to construct the hook.
    pub fn with_forced_error(mut self, error: HookError) -> Self {
        self.forced_error = Some(error);
        self
    }

    /// Identifiers passed to `build_hook` so far, in call order
    pub fn requested_ids(&self) -> Vec<String> {
        self.requested
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of hooks requested so far
    pub fn build_count(&self) -> usize {
        self.requested_ids().len()
    }
}

impl Default for MockHookFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl HookFactory for MockHookFactory {
    fn build_hook(&self, conn_id: &str) -> Result<ConnectionHook, HookError> {
        self.requested
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(conn_id.to_string());

        if let Some(error) = &self.forced_error {
            return Err(error.clone());
        }

        self.connections
            .get(conn_id)
            .cloned()
            .map(|connection| ConnectionHook::new(conn_id, connection))
            .ok_or_else(|| HookError::UnknownConnId(conn_id.to_string()))
    }
}
