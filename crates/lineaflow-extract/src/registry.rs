//! Extractor registry
//!
//! Maps operator class names to dialect extractors so the lineage engine can
//! dispatch to the right adapter when it encounters a task.

use crate::extractor::DialectExtractor;
use crate::mysql::MySqlExtractor;
use crate::postgres::PostgresExtractor;
use crate::redshift::RedshiftExtractor;
use crate::snowflake::SnowflakeExtractor;
use lineaflow_core::TaskInstance;
use lineaflow_hooks::HookFactory;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of dialect extractors, keyed by operator class name
#[derive(Default)]
pub struct ExtractorRegistry {
    by_operator: HashMap<String, Arc<dyn DialectExtractor>>,
}

impl ExtractorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            by_operator: HashMap::new(),
        }
    }

    /// Create a registry preloaded with all built-in dialects
    ///
    /// Every extractor shares the one hook factory.
    pub fn default_with(hooks: Arc<dyn HookFactory>) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PostgresExtractor::new(hooks.clone())));
        registry.register(Arc::new(RedshiftExtractor::new(hooks.clone())));
        registry.register(Arc::new(MySqlExtractor::new(hooks.clone())));
        registry.register(Arc::new(SnowflakeExtractor::new(hooks)));
        registry
    }

    /// Register an extractor under every operator name it matches
    ///
    /// A later registration for an already-claimed operator name replaces
    /// the earlier one.
    pub fn register(&mut self, extractor: Arc<dyn DialectExtractor>) {
        for name in extractor.matched_operator_names() {
            let previous = self
                .by_operator
                .insert((*name).to_string(), extractor.clone());

            if let Some(previous) = previous {
                tracing::warn!(
                    operator = name,
                    replaced = previous.scheme(),
                    by = extractor.scheme(),
                    "operator name re-registered"
                );
            }
        }
    }

    /// Look up the extractor for an operator class name
    pub fn extractor_for(&self, operator_class: &str) -> Option<Arc<dyn DialectExtractor>> {
        let found = self.by_operator.get(operator_class).cloned();
        if found.is_none() {
            tracing::debug!(operator = operator_class, "no extractor registered");
        }
        found
    }

    /// Look up the extractor matching a task's operator class
    pub fn for_task(&self, task: &TaskInstance) -> Option<Arc<dyn DialectExtractor>> {
        self.extractor_for(&task.operator_class)
    }

    /// Number of operator names with a registered extractor
    pub fn len(&self) -> usize {
        self.by_operator.len()
    }

    /// Whether the registry has no registered extractors
    pub fn is_empty(&self) -> bool {
        self.by_operator.is_empty()
    }
}
