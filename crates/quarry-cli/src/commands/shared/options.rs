//! Data source options from the command line.

use quarry_connectors::ConnectorError;
use quarry_core::entities::DataSourceOptions;
use serde_json::Value;

use crate::commands::{CommandError, CommandResult};

pub const INVALID_CONFIGURATION: &str = "Error: invalid configuration.";

/// Parse `--options` as a JSON object.
pub fn parse_options(raw: &str) -> CommandResult<DataSourceOptions> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(options)) => Ok(options),
        Ok(other) => {
            tracing::warn!(value = %other, "options are not a JSON object");
            Err(invalid_configuration())
        }
        Err(error) => {
            tracing::warn!(%error, "options are not valid JSON");
            Err(invalid_configuration())
        }
    }
}

pub fn invalid_configuration() -> CommandError {
    CommandError::Validation(INVALID_CONFIGURATION.to_string())
}

/// Map connector failures to the reports printed for them.
pub fn connector_error(error: ConnectorError) -> CommandError {
    match error {
        unknown @ ConnectorError::UnknownType { .. } => {
            CommandError::Validation(format!("Error: {unknown}"))
        }
        ConnectorError::InvalidConfiguration { reasons } => {
            tracing::warn!(?reasons, "options rejected by connector schema");
            invalid_configuration()
        }
        ConnectorError::Connection(message) => {
            CommandError::Validation(format!("Failure: {message}"))
        }
    }
}
