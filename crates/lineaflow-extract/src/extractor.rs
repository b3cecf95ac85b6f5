//! Dialect extractor trait

use lineaflow_core::{CoreError, TaskInstance};
use lineaflow_hooks::{ConnectionHook, HookError};

/// Errors surfaced by [`DialectExtractor::build_connection_hook`]
///
/// Both variants are transparent wrappers: the collaborator error passes
/// through unchanged, with no recovery, retry, or translation here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// The task does not expose the dialect's connection-identifier field
    #[error(transparent)]
    Task(#[from] CoreError),

    /// The hook factory failed to build the hook
    #[error(transparent)]
    Hook(#[from] HookError),
}

/// Trait for dialect extractor adapters
///
/// One implementation per SQL dialect. Every operation is stateless and
/// idempotent: the extractor is a pure mapping from dialect identity to
/// configuration values plus one delegated factory call, so instances are
/// freely shared behind `Arc`.
pub trait DialectExtractor: Send + Sync {
    /// Operator class names this extractor applies to
    ///
    /// The registry indexes the extractor under each returned name. Fixed
    /// set, stable across calls.
    fn matched_operator_names(&self) -> &'static [&'static str];

    /// Dialect token used to tag produced lineage records
    fn scheme(&self) -> &'static str;

    /// Schema assumed when a parsed query does not qualify table names
    ///
    /// Returned verbatim, with no case normalization. Never empty.
    fn default_schema(&self) -> &'static str {
        "public"
    }

    /// Build a connection hook for the given task
    ///
    /// Reads the dialect's connection-identifier field off the task and
    /// delegates construction to the injected hook factory. The hook is
    /// created fresh on every call and owned by the caller; failures from
    /// the task accessor or the factory propagate unchanged.
    fn build_connection_hook(&self, task: &TaskInstance) -> Result<ConnectionHook, ExtractError>;
}
