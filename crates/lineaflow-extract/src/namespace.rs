//! Dataset namespace construction
//!
//! Lineage records tag every dataset with a namespace derived from the
//! dialect's scheme token and the connection authority, in the form
//! `scheme://host:port` (port omitted when the connection has none).

use lineaflow_core::Connection;

/// Build the dataset namespace for a dialect scheme and connection
pub fn dataset_namespace(scheme: &str, connection: &Connection) -> String {
    format!("{}://{}", scheme, connection.authority())
}
