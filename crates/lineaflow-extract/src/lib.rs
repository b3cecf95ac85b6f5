//! Dialect extractor adapters for SQL lineage extraction
//!
//! Each supported SQL dialect contributes one [`DialectExtractor`]: a small,
//! stateless record telling the lineage engine which operator classes it
//! applies to, which scheme token tags its lineage records, which schema to
//! assume for unqualified table names, and how to obtain a connection hook
//! for a given task.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use lineaflow_extract::{DialectExtractor, ExtractorRegistry, RedshiftExtractor};
//! use lineaflow_hooks::ConfigHookFactory;
//!
//! let factory = Arc::new(ConfigHookFactory::new(config));
//! let registry = ExtractorRegistry::default_with(factory);
//!
//! if let Some(extractor) = registry.for_task(&task) {
//!     let hook = extractor.build_connection_hook(&task)?;
//! }
//! ```

pub mod extractor;
pub mod mysql;
pub mod namespace;
pub mod postgres;
pub mod redshift;
pub mod registry;
pub mod snowflake;

pub use extractor::{DialectExtractor, ExtractError};
pub use mysql::MySqlExtractor;
pub use namespace::dataset_namespace;
pub use postgres::PostgresExtractor;
pub use redshift::RedshiftExtractor;
pub use registry::ExtractorRegistry;
pub use snowflake::SnowflakeExtractor;
