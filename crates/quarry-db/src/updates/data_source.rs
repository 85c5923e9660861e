//! Data source update builder.

use quarry_core::entities::DataSourceOptions;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct DataSourceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub connector_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<DataSourceOptions>,
}

impl DataSourceUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.connector_type.is_none() && self.options.is_none()
    }

    /// Column names this update touches. Values stay out of it since
    /// options may carry credentials.
    #[must_use]
    pub fn changed_fields(&self) -> Vec<&'static str> {
        [
            ("name", self.name.is_some()),
            ("type", self.connector_type.is_some()),
            ("options", self.options.is_some()),
        ]
        .into_iter()
        .filter_map(|(field, set)| set.then_some(field))
        .collect()
    }
}

pub struct DataSourceUpdateBuilder(DataSourceUpdate);

impl DataSourceUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(DataSourceUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn connector_type(mut self, connector_type: impl Into<String>) -> Self {
        self.0.connector_type = Some(connector_type.into());
        self
    }

    #[must_use]
    pub fn options(mut self, options: DataSourceOptions) -> Self {
        self.0.options = Some(options);
        self
    }

    #[must_use]
    pub fn build(self) -> DataSourceUpdate {
        self.0
    }
}

impl Default for DataSourceUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
