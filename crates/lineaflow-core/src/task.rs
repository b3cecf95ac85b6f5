//! Orchestrator task handles
//!
//! A [`TaskInstance`] is an opaque view of one workflow task as the
//! orchestrator hands it to the extraction engine. Extractors only ever read
//! from it; they never retain or mutate it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Errors raised by the core domain model
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The operator does not expose the requested attribute
    #[error("operator '{operator}' has no field '{field}'")]
    MissingField {
        /// Operator class name of the task
        operator: String,

        /// Name of the missing attribute
        field: String,
    },
}

/// One workflow task instance under inspection
///
/// Carries the operator class name (used for extractor dispatch) and the
/// operator's attributes as a string map. Dialect-specific connection
/// identifiers (`postgres_conn_id`, `redshift_conn_id`, ...) live in
/// [`fields`](Self::fields).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInstance {
    /// Operator class name (e.g. "RedshiftSQLOperator")
    pub operator_class: String,

    /// Task identifier within the DAG
    pub task_id: String,

    /// Identifier of the owning DAG
    pub dag_id: String,

    /// Operator attributes, keyed by attribute name
    #[serde(default)]
    pub fields: HashMap<String, String>,
}

impl TaskInstance {
    /// Create a task instance with no operator attributes
    pub fn new(
        operator_class: impl Into<String>,
        dag_id: impl Into<String>,
        task_id: impl Into<String>,
    ) -> Self {
        Self {
            operator_class: operator_class.into(),
            task_id: task_id.into(),
            dag_id: dag_id.into(),
            fields: HashMap::new(),
        }
    }

    /// Add an operator attribute
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Read an operator attribute
    ///
    /// Fails with [`CoreError::MissingField`] when the operator does not
    /// expose the attribute. Extractors propagate this error unchanged.
    pub fn field(&self, name: &str) -> Result<&str, CoreError> {
        self.fields
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| CoreError::MissingField {
                operator: self.operator_class.clone(),
                field: name.to_string(),
            })
    }

    /// Fully qualified task name
    pub fn fqn(&self) -> String {
        format!("{}.{}", self.dag_id, self.task_id)
    }
}

impl fmt::Display for TaskInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fqn())
    }
}
