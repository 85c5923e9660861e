use crate::cli::root_commands::Commands;
use crate::commands::{self, CommandResult};
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &mut AppContext) -> CommandResult {
    match command {
        Commands::Users { action } => commands::users::handle(&action, ctx).await,
        Commands::Groups { action } => commands::groups::handle(&action, ctx).await,
        Commands::Org { action } => commands::org::handle(&action, ctx).await,
        Commands::Ds { action } => commands::ds::handle(&action, ctx).await,
    }
}
