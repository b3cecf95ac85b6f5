//! Hook factory trait and the hook record it produces

use lineaflow_core::Connection;

/// Errors raised while building a connection hook
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HookError {
    /// No connection is registered under the identifier
    #[error("unknown connection id '{0}'")]
    UnknownConnId(String),

    /// The host framework failed to construct the hook
    #[error("hook construction failed: {0}")]
    Factory(String),
}

/// A live credentials/connectivity handle for one connection identifier
///
/// Built on demand, owned by the caller, never cached by the factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionHook {
    /// The identifier the hook was built from
    pub conn_id: String,

    /// The settings the identifier resolved to
    pub connection: Connection,
}

impl ConnectionHook {
    /// Create a hook from an identifier and its resolved settings
    pub fn new(conn_id: impl Into<String>, connection: Connection) -> Self {
        Self {
            conn_id: conn_id.into(),
            connection,
        }
    }
}

/// Trait for factories that turn connection identifiers into hooks
///
/// Dialect extractors receive an implementation of this trait at
/// construction time, so they stay decoupled from whatever connection
/// store the host orchestrator actually uses.
pub trait HookFactory: Send + Sync {
    /// Build a hook for a connection identifier
    ///
    /// Each call constructs a fresh hook; callers own the result. Failures
    /// (unknown identifier, host-side construction error) surface as
    /// [`HookError`] and are propagated unchanged by extractors.
    fn build_hook(&self, conn_id: &str) -> Result<ConnectionHook, HookError>;
}
