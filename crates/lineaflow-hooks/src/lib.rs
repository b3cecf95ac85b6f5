//! Connection hooks for lineage extraction
//!
//! This crate is the seam between dialect extractors and the host
//! orchestrator's connection store. Extractors never name a concrete hook
//! type; they hold a [`HookFactory`] and ask it to build a
//! [`ConnectionHook`] for a connection identifier on demand.
//!
//! ## Example
//!
//! ```rust,ignore
//! use lineaflow_core::Config;
//! use lineaflow_hooks::{ConfigHookFactory, HookFactory};
//!
//! let config = Config::from_file("lineaflow.toml".as_ref())?;
//! let factory = ConfigHookFactory::new(config);
//! let hook = factory.build_hook("redshift_default")?;
//! ```

pub mod config_factory;
pub mod factory;
pub mod mock;

pub use config_factory::ConfigHookFactory;
pub use factory::{ConnectionHook, HookError, HookFactory};
pub use mock::MockHookFactory;
