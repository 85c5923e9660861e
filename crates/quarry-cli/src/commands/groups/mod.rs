mod change_permissions;
mod create;
mod list;

use crate::cli::subcommands::GroupCommands;
use crate::commands::CommandResult;
use crate::context::AppContext;

/// Handle `quarry groups`.
pub async fn handle(action: &GroupCommands, ctx: &mut AppContext) -> CommandResult {
    match action {
        GroupCommands::Create {
            name,
            permissions,
            org,
        } => create::run(name, permissions.as_deref(), org.as_deref(), ctx).await,
        GroupCommands::ChangePermissions {
            group_id,
            permissions,
        } => change_permissions::run(*group_id, permissions.as_deref(), ctx).await,
        GroupCommands::List { org } => list::run(org.as_deref(), ctx).await,
    }
}
