//! Connector lookup by type name.

use std::collections::BTreeMap;

use quarry_core::entities::DataSourceOptions;

use crate::Connector;
use crate::error::ConnectorError;
use crate::pg::PostgresConnector;
use crate::sqlite::SqliteConnector;

pub struct ConnectorRegistry {
    connectors: BTreeMap<&'static str, Box<dyn Connector>>,
}

impl ConnectorRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            connectors: BTreeMap::new(),
        }
    }

    /// Registry holding every connector shipped with Quarry.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(PostgresConnector));
        registry.register(Box::new(SqliteConnector));
        registry
    }

    pub fn register(&mut self, connector: Box<dyn Connector>) {
        self.connectors.insert(connector.type_name(), connector);
    }

    /// Registered type names in alphabetical order.
    #[must_use]
    pub fn types(&self) -> Vec<&'static str> {
        self.connectors.keys().copied().collect()
    }

    /// # Errors
    ///
    /// Returns `ConnectorError::UnknownType` naming the supported types.
    pub fn get(&self, connector_type: &str) -> Result<&dyn Connector, ConnectorError> {
        self.connectors
            .get(connector_type)
            .map(Box::as_ref)
            .ok_or_else(|| ConnectorError::UnknownType {
                requested: connector_type.to_string(),
                supported: self.types().into_iter().map(String::from).collect(),
            })
    }

    /// Validate `options` against the schema of `connector_type`.
    ///
    /// # Errors
    ///
    /// `UnknownType` for an unregistered type, `InvalidConfiguration` when
    /// the options break the schema.
    pub fn validate(
        &self,
        connector_type: &str,
        options: &DataSourceOptions,
    ) -> Result<(), ConnectorError> {
        self.get(connector_type)?
            .configuration_schema()
            .validate(options)
    }
}

impl Default for ConnectorRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn builtin_types_are_sorted() {
        assert_eq!(ConnectorRegistry::with_builtin().types(), vec!["pg", "sqlite"]);
    }

    #[test]
    fn unknown_type_is_an_error() {
        let registry = ConnectorRegistry::with_builtin();
        let err = registry.get("wrong").err().unwrap();
        assert_eq!(
            err.to_string(),
            "the type \"wrong\" is not supported (supported types: pg, sqlite)."
        );
    }

    #[test]
    fn validate_dispatches_to_connector_schema() {
        let registry = ConnectorRegistry::with_builtin();
        let sqlite = json!({"dbpath": "/tmp/test.db"}).as_object().cloned().unwrap();
        registry.validate("sqlite", &sqlite).unwrap();
        assert!(registry.validate("pg", &sqlite).is_err());
    }
}
