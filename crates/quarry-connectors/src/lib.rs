//! # quarry-connectors
//!
//! Data-source drivers known to Quarry. Each [`Connector`] declares the
//! options it accepts as a [`ConfigurationSchema`] and can probe a live
//! connection. The [`ConnectorRegistry`] resolves connector types by name.

pub mod error;
pub mod pg;
pub mod registry;
pub mod schema;
pub mod sqlite;

use async_trait::async_trait;
use quarry_core::entities::DataSourceOptions;

pub use error::ConnectorError;
pub use registry::ConnectorRegistry;
pub use schema::{ConfigurationSchema, PropertyKind, PropertySpec};

#[async_trait]
pub trait Connector: Send + Sync {
    /// Stored `type` value, e.g. `"pg"`.
    fn type_name(&self) -> &'static str;

    /// Human readable name.
    fn name(&self) -> &'static str;

    fn configuration_schema(&self) -> ConfigurationSchema;

    /// Open a connection with `options` and run a trivial statement.
    async fn test_connection(&self, options: &DataSourceOptions) -> Result<(), ConnectorError>;
}
