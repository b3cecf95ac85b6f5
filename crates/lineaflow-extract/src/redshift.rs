//! Amazon Redshift dialect extractor
//!
//! Redshift speaks the Postgres SQL surface but is a distinct dialect to the
//! lineage model: its records are tagged `redshift` and its hooks are built
//! from the operator's `redshift_conn_id`, not the Postgres one.

use crate::extractor::{DialectExtractor, ExtractError};
use lineaflow_core::TaskInstance;
use lineaflow_hooks::{ConnectionHook, HookFactory};
use std::sync::Arc;

/// Operator attribute carrying the Redshift connection identifier
pub const REDSHIFT_CONN_FIELD: &str = "redshift_conn_id";

/// Amazon Redshift dialect extractor
pub struct RedshiftExtractor {
    hooks: Arc<dyn HookFactory>,
}

impl RedshiftExtractor {
    /// Create the extractor with the hook factory it will delegate to
    pub fn new(hooks: Arc<dyn HookFactory>) -> Self {
        Self { hooks }
    }
}

impl DialectExtractor for RedshiftExtractor {
    fn matched_operator_names(&self) -> &'static [&'static str] {
        &["RedshiftSQLOperator"]
    }

    fn scheme(&self) -> &'static str {
        "redshift"
    }

    // Same default as Postgres, stated here because Redshift is registered
    // as its own dialect rather than reusing the Postgres adapter.
    fn default_schema(&self) -> &'static str {
        "public"
    }

    fn build_connection_hook(&self, task: &TaskInstance) -> Result<ConnectionHook, ExtractError> {
        let conn_id = task.field(REDSHIFT_CONN_FIELD)?;
        Ok(self.hooks.build_hook(conn_id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineaflow_core::{Connection, CoreError};
    use lineaflow_hooks::MockHookFactory;
    use pretty_assertions::assert_eq;

    fn redshift_task() -> TaskInstance {
        TaskInstance::new("RedshiftSQLOperator", "etl", "load_users")
    }

    #[test]
    fn constants() {
        let extractor = RedshiftExtractor::new(Arc::new(MockHookFactory::new()));

        assert_eq!(extractor.matched_operator_names(), &["RedshiftSQLOperator"]);
        assert_eq!(extractor.scheme(), "redshift");
        assert_eq!(extractor.default_schema(), "public");
    }

    #[test]
    fn constants_are_stable_across_calls() {
        let extractor = RedshiftExtractor::new(Arc::new(MockHookFactory::new()));

        assert_eq!(
            extractor.matched_operator_names(),
            extractor.matched_operator_names()
        );
        assert_eq!(extractor.scheme(), extractor.scheme());
        assert!(!extractor.default_schema().is_empty());
    }

    #[test]
    fn conn_id_passes_through_unchanged() {
        let factory = Arc::new(
            MockHookFactory::new()
                .with_connection("redshift_default", Connection::new("cluster.example.com")),
        );
        let extractor = RedshiftExtractor::new(factory.clone());

        let task = redshift_task().with_field(REDSHIFT_CONN_FIELD, "redshift_default");

        let hook = extractor.build_connection_hook(&task).unwrap();
        assert_eq!(hook.conn_id, "redshift_default");
        assert_eq!(factory.requested_ids(), vec!["redshift_default"]);
    }

    #[test]
    fn missing_conn_id_field_propagates() {
        let factory = Arc::new(MockHookFactory::new());
        let extractor = RedshiftExtractor::new(factory.clone());

        let err = extractor.build_connection_hook(&redshift_task()).unwrap_err();
        assert_eq!(
            err,
            ExtractError::Task(CoreError::MissingField {
                operator: "RedshiftSQLOperator".to_string(),
                field: REDSHIFT_CONN_FIELD.to_string(),
            })
        );
        // No hook was attempted: the factory was never reached.
        assert_eq!(factory.build_count(), 0);
    }
}
