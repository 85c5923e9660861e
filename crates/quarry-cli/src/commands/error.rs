use quarry_db::error::DatabaseError;
use thiserror::Error;

pub type CommandResult<T = ()> = Result<T, CommandError>;

/// Outcome of a failed command.
///
/// The first three variants are expected outcomes whose message is the
/// report; the rest are unexpected failures.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Failed {action}: {source}")]
    Persistence {
        action: &'static str,
        #[source]
        source: DatabaseError,
    },

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CommandError {
    pub const fn persistence(action: &'static str, source: DatabaseError) -> Self {
        Self::Persistence { action, source }
    }

    /// Whether the message is printed as a report on stdout.
    pub const fn is_reported(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::Validation(_) | Self::Persistence { .. }
        )
    }
}
