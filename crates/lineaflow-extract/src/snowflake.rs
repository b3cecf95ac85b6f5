//! Snowflake dialect extractor

use crate::extractor::{DialectExtractor, ExtractError};
use lineaflow_core::TaskInstance;
use lineaflow_hooks::{ConnectionHook, HookFactory};
use std::sync::Arc;

/// Operator attribute carrying the Snowflake connection identifier
pub const SNOWFLAKE_CONN_FIELD: &str = "snowflake_conn_id";

/// Snowflake dialect extractor
pub struct SnowflakeExtractor {
    hooks: Arc<dyn HookFactory>,
}

impl SnowflakeExtractor {
    /// Create the extractor with the hook factory it will delegate to
    pub fn new(hooks: Arc<dyn HookFactory>) -> Self {
        Self { hooks }
    }
}

impl DialectExtractor for SnowflakeExtractor {
    fn matched_operator_names(&self) -> &'static [&'static str] {
        &["SnowflakeOperator"]
    }

    fn scheme(&self) -> &'static str {
        "snowflake"
    }

    // Snowflake folds unquoted identifiers to upper case; the literal is
    // passed through verbatim, never normalized here.
    fn default_schema(&self) -> &'static str {
        "PUBLIC"
    }

    fn build_connection_hook(&self, task: &TaskInstance) -> Result<ConnectionHook, ExtractError> {
        let conn_id = task.field(SNOWFLAKE_CONN_FIELD)?;
        Ok(self.hooks.build_hook(conn_id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineaflow_core::Connection;
    use lineaflow_hooks::MockHookFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn constants() {
        let extractor = SnowflakeExtractor::new(Arc::new(MockHookFactory::new()));

        assert_eq!(extractor.matched_operator_names(), &["SnowflakeOperator"]);
        assert_eq!(extractor.scheme(), "snowflake");
        assert_eq!(extractor.default_schema(), "PUBLIC");
    }

    #[test]
    fn builds_hook_from_snowflake_conn_id() {
        let factory = Arc::new(MockHookFactory::new().with_connection(
            "sf_warehouse",
            Connection::new("xy12345.snowflakecomputing.com"),
        ));
        let extractor = SnowflakeExtractor::new(factory);

        let task = TaskInstance::new("SnowflakeOperator", "etl", "load_facts")
            .with_field(SNOWFLAKE_CONN_FIELD, "sf_warehouse");

        let hook = extractor.build_connection_hook(&task).unwrap();
        assert_eq!(hook.conn_id, "sf_warehouse");
    }
}
