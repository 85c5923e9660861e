//! SQLite connector backed by libSQL.

use std::path::Path;

use async_trait::async_trait;
use quarry_core::entities::DataSourceOptions;
use serde_json::Value;

use crate::Connector;
use crate::error::ConnectorError;
use crate::schema::{ConfigurationSchema, PropertyKind};

pub struct SqliteConnector;

#[async_trait]
impl Connector for SqliteConnector {
    fn type_name(&self) -> &'static str {
        "sqlite"
    }

    fn name(&self) -> &'static str {
        "Sqlite"
    }

    fn configuration_schema(&self) -> ConfigurationSchema {
        ConfigurationSchema::new()
            .property("dbpath", PropertyKind::String)
            .title("Database Path")
            .required()
    }

    async fn test_connection(&self, options: &DataSourceOptions) -> Result<(), ConnectorError> {
        let dbpath = options
            .get("dbpath")
            .and_then(Value::as_str)
            .ok_or_else(|| ConnectorError::invalid("dbpath is required"))?;

        // Opening a missing path would create an empty database.
        if !Path::new(dbpath).is_file() {
            return Err(ConnectorError::Connection(format!(
                "database file not found: {dbpath}"
            )));
        }

        let db = libsql::Builder::new_local(dbpath)
            .build()
            .await
            .map_err(|e| ConnectorError::Connection(e.to_string()))?;
        let conn = db
            .connect()
            .map_err(|e| ConnectorError::Connection(e.to_string()))?;
        let mut rows = conn
            .query("PRAGMA quick_check", ())
            .await
            .map_err(|e| ConnectorError::Connection(e.to_string()))?;
        let status = match rows
            .next()
            .await
            .map_err(|e| ConnectorError::Connection(e.to_string()))?
        {
            Some(row) => row
                .get::<String>(0)
                .map_err(|e| ConnectorError::Connection(e.to_string()))?,
            None => return Err(ConnectorError::Connection("quick_check returned no rows".into())),
        };
        if status != "ok" {
            return Err(ConnectorError::Connection(status));
        }
        tracing::debug!(dbpath, "sqlite connection ok");
        Ok(())
    }
}
