//! Lineaflow Core
//!
//! Shared domain model for the lineage extractor adapters:
//! orchestrator task handles, resolved connection records, and the
//! TOML configuration the hook factories read.

pub mod config;
pub mod connection;
pub mod task;

pub use config::{Config, ConfigError};
pub use connection::Connection;
pub use task::{CoreError, TaskInstance};
