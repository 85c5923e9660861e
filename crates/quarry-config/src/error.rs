use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider could not be read or a value did not deserialize.
    #[error("cannot load configuration: {0}")]
    Figment(#[from] figment::Error),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
