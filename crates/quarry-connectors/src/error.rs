use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("the type \"{requested}\" is not supported (supported types: {}).", supported.join(", "))]
    UnknownType {
        requested: String,
        supported: Vec<String>,
    },

    #[error("invalid configuration: {}", reasons.join("; "))]
    InvalidConfiguration { reasons: Vec<String> },

    #[error("{0}")]
    Connection(String),
}

impl ConnectorError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reasons: vec![reason.into()],
        }
    }
}
