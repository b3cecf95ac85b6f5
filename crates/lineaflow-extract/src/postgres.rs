//! PostgreSQL dialect extractor
//!
//! The base dialect of the Postgres family: Redshift reuses its SQL surface
//! and its `public` default schema, so [`RedshiftExtractor`](crate::redshift)
//! differs from this adapter only in its constants and conn-id field.

use crate::extractor::{DialectExtractor, ExtractError};
use lineaflow_core::TaskInstance;
use lineaflow_hooks::{ConnectionHook, HookFactory};
use std::sync::Arc;

/// Operator attribute carrying the PostgreSQL connection identifier
pub const POSTGRES_CONN_FIELD: &str = "postgres_conn_id";

/// PostgreSQL dialect extractor
pub struct PostgresExtractor {
    hooks: Arc<dyn HookFactory>,
}

impl PostgresExtractor {
    /// Create the extractor with the hook factory it will delegate to
    pub fn new(hooks: Arc<dyn HookFactory>) -> Self {
        Self { hooks }
    }
}

impl DialectExtractor for PostgresExtractor {
    fn matched_operator_names(&self) -> &'static [&'static str] {
        &["PostgresOperator"]
    }

    fn scheme(&self) -> &'static str {
        "postgres"
    }

    fn build_connection_hook(&self, task: &TaskInstance) -> Result<ConnectionHook, ExtractError> {
        let conn_id = task.field(POSTGRES_CONN_FIELD)?;
        Ok(self.hooks.build_hook(conn_id)?)
    }
}
