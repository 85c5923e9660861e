//! Per-connector option schemas.
//!
//! A [`ConfigurationSchema`] keeps its properties in declaration order so
//! interactive prompts follow the order the connector lists them, and renders
//! to a JSON Schema document for validation.

use quarry_core::entities::DataSourceOptions;
use serde_json::{Map, Value, json};

use crate::error::ConnectorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    String,
    Number,
    Boolean,
}

impl PropertyKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }

    /// Convert raw console input into a JSON value of this kind.
    ///
    /// Returns `None` when the input does not parse.
    #[must_use]
    pub fn parse(self, raw: &str) -> Option<Value> {
        let raw = raw.trim();
        match self {
            Self::String => Some(Value::String(raw.to_string())),
            Self::Number => raw.parse::<i64>().map(Value::from).ok().or_else(|| {
                raw.parse::<f64>()
                    .ok()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
            }),
            Self::Boolean => match raw.to_ascii_lowercase().as_str() {
                "true" | "yes" | "y" | "1" => Some(Value::Bool(true)),
                "false" | "no" | "n" | "0" => Some(Value::Bool(false)),
                _ => None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertySpec {
    pub name: String,
    pub kind: PropertyKind,
    pub title: Option<String>,
    pub default: Option<Value>,
    pub required: bool,
    /// Never echoed in logs.
    pub secret: bool,
}

impl PropertySpec {
    /// Prompt label: the title, or the property name capitalized.
    #[must_use]
    pub fn display_title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        let mut chars = self.name.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }
}

/// Ordered option declarations for one connector type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigurationSchema {
    properties: Vec<PropertySpec>,
}

impl ConfigurationSchema {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn property(mut self, name: &str, kind: PropertyKind) -> Self {
        self.properties.push(PropertySpec {
            name: name.to_string(),
            kind,
            title: None,
            default: None,
            required: false,
            secret: false,
        });
        self
    }

    /// Set the title of the most recently declared property.
    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        if let Some(last) = self.properties.last_mut() {
            last.title = Some(title.to_string());
        }
        self
    }

    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        if let Some(last) = self.properties.last_mut() {
            last.default = Some(value.into());
        }
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        if let Some(last) = self.properties.last_mut() {
            last.required = true;
        }
        self
    }

    #[must_use]
    pub fn secret(mut self) -> Self {
        if let Some(last) = self.properties.last_mut() {
            last.secret = true;
        }
        self
    }

    #[must_use]
    pub fn properties(&self) -> &[PropertySpec] {
        &self.properties
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertySpec> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Render as a JSON Schema object rejecting unknown keys.
    #[must_use]
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        for spec in &self.properties {
            let mut prop = Map::new();
            prop.insert("type".into(), Value::from(spec.kind.as_str()));
            if let Some(title) = &spec.title {
                prop.insert("title".into(), Value::from(title.as_str()));
            }
            if let Some(default) = &spec.default {
                prop.insert("default".into(), default.clone());
            }
            properties.insert(spec.name.clone(), Value::Object(prop));
        }
        let required: Vec<&str> = self
            .properties
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false,
        })
    }

    /// Check `options` against the rendered JSON Schema.
    ///
    /// # Errors
    ///
    /// Returns `ConnectorError::InvalidConfiguration` listing every violation.
    pub fn validate(&self, options: &DataSourceOptions) -> Result<(), ConnectorError> {
        let schema = self.to_json_schema();
        let validator = jsonschema::validator_for(&schema)
            .map_err(|e| ConnectorError::invalid(format!("schema did not compile: {e}")))?;
        let instance = Value::Object(options.clone());
        let reasons: Vec<String> = validator
            .iter_errors(&instance)
            .map(|e| e.to_string())
            .collect();
        if reasons.is_empty() {
            Ok(())
        } else {
            Err(ConnectorError::InvalidConfiguration { reasons })
        }
    }

    /// Copy of `options` with secret values masked, for logging.
    #[must_use]
    pub fn redact(&self, options: &DataSourceOptions) -> DataSourceOptions {
        options
            .iter()
            .map(|(key, value)| {
                let masked = self.get(key).is_some_and(|p| p.secret);
                let value = if masked {
                    Value::from("--------")
                } else {
                    value.clone()
                };
                (key.clone(), value)
            })
            .collect()
    }
}
