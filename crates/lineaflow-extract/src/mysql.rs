//! MySQL dialect extractor

use crate::extractor::{DialectExtractor, ExtractError};
use lineaflow_core::TaskInstance;
use lineaflow_hooks::{ConnectionHook, HookFactory};
use std::sync::Arc;

/// Operator attribute carrying the MySQL connection identifier
pub const MYSQL_CONN_FIELD: &str = "mysql_conn_id";

/// MySQL dialect extractor
///
/// MySQL has no schema/database split, so `default_schema` stays at the
/// trait default and consumers should prefer the database on the built
/// hook's connection when qualifying table names.
pub struct MySqlExtractor {
    hooks: Arc<dyn HookFactory>,
}

impl MySqlExtractor {
    /// Create the extractor with the hook factory it will delegate to
    pub fn new(hooks: Arc<dyn HookFactory>) -> Self {
        Self { hooks }
    }
}

impl DialectExtractor for MySqlExtractor {
    fn matched_operator_names(&self) -> &'static [&'static str] {
        &["MySqlOperator"]
    }

    fn scheme(&self) -> &'static str {
        "mysql"
    }

    fn build_connection_hook(&self, task: &TaskInstance) -> Result<ConnectionHook, ExtractError> {
        let conn_id = task.field(MYSQL_CONN_FIELD)?;
        Ok(self.hooks.build_hook(conn_id)?)
    }
}
