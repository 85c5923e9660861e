//! PostgreSQL connector.

use std::time::Duration;

use async_trait::async_trait;
use quarry_core::entities::DataSourceOptions;
use serde_json::Value;
use tokio_postgres::NoTls;

use crate::Connector;
use crate::error::ConnectorError;
use crate::schema::{ConfigurationSchema, PropertyKind};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5432;
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct PostgresConnector;

impl PostgresConnector {
    fn connection_config(
        options: &DataSourceOptions,
    ) -> Result<tokio_postgres::Config, ConnectorError> {
        let text = |key: &str| options.get(key).and_then(Value::as_str);

        let port = match options.get("port") {
            None => DEFAULT_PORT,
            Some(value) => value
                .as_u64()
                .and_then(|p| u16::try_from(p).ok())
                .ok_or_else(|| ConnectorError::invalid(format!("port {value} is out of range")))?,
        };
        let dbname = text("dbname").ok_or_else(|| ConnectorError::invalid("dbname is required"))?;

        let mut config = tokio_postgres::Config::new();
        config
            .host(text("host").unwrap_or(DEFAULT_HOST))
            .port(port)
            .dbname(dbname)
            .connect_timeout(CONNECT_TIMEOUT);
        if let Some(user) = text("user") {
            config.user(user);
        }
        if let Some(password) = text("password") {
            config.password(password);
        }
        Ok(config)
    }
}

#[async_trait]
impl Connector for PostgresConnector {
    fn type_name(&self) -> &'static str {
        "pg"
    }

    fn name(&self) -> &'static str {
        "PostgreSQL"
    }

    fn configuration_schema(&self) -> ConfigurationSchema {
        ConfigurationSchema::new()
            .property("user", PropertyKind::String)
            .property("password", PropertyKind::String)
            .secret()
            .property("host", PropertyKind::String)
            .default_value(DEFAULT_HOST)
            .property("port", PropertyKind::Number)
            .default_value(DEFAULT_PORT)
            .property("dbname", PropertyKind::String)
            .title("Database Name")
            .required()
    }

    async fn test_connection(&self, options: &DataSourceOptions) -> Result<(), ConnectorError> {
        let config = Self::connection_config(options)?;
        let (client, connection) = config
            .connect(NoTls)
            .await
            .map_err(|e| ConnectorError::Connection(e.to_string()))?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!("Postgres connection error: {}", e);
            }
        });

        client
            .simple_query("SELECT 1")
            .await
            .map_err(|e| ConnectorError::Connection(e.to_string()))?;
        Ok(())
    }
}
