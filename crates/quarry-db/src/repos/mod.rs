//! Repository modules implementing CRUD operations for all Quarry entities.
//!
//! Each module adds methods to `QuarryService` via `impl QuarryService` blocks.

pub mod data_source;
pub mod group;
pub mod organization;
pub mod user;

/// Run `body` inside a transaction, committing on success and rolling back
/// on error.
macro_rules! in_transaction {
    ($conn:expr, |$tx:ident| $body:expr) => {{
        let $tx = $conn.transaction().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(error) => {
                if let Err(rollback_error) = $tx.rollback().await {
                    tracing::warn!(%rollback_error, "transaction rollback failed");
                }
                Err(error)
            }
        }
    }};
}

pub(crate) use in_transaction;
