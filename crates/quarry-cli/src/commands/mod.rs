pub mod dispatch;
pub mod ds;
mod error;
pub mod groups;
pub mod org;
pub mod shared;
pub mod users;

pub use error::{CommandError, CommandResult};
