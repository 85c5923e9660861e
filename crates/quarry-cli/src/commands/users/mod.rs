mod create;
mod delete;
mod grant_admin;
mod groups;
mod invite;
mod list;
mod password;

use crate::cli::subcommands::UserCommands;
use crate::commands::CommandResult;
use crate::context::AppContext;

/// Handle `quarry users`.
pub async fn handle(action: &UserCommands, ctx: &mut AppContext) -> CommandResult {
    match action {
        UserCommands::Create {
            email,
            name,
            org,
            admin,
            google,
            password,
            groups,
        } => {
            create::run(
                email,
                name,
                create::Flags {
                    org: org.as_deref(),
                    admin: *admin,
                    google: *google,
                    password: password.as_deref(),
                    groups: groups.as_deref(),
                },
                ctx,
            )
            .await
        }
        UserCommands::Delete { email, org } => delete::run(email, org.as_deref(), ctx).await,
        UserCommands::Password {
            email,
            password,
            org,
        } => password::run(email, password, org.as_deref(), ctx).await,
        UserCommands::GrantAdmin { email, org } => {
            grant_admin::run(email, org.as_deref(), ctx).await
        }
        UserCommands::Invite {
            email,
            name,
            inviter_email,
            org,
            admin,
            groups,
        } => {
            invite::run(
                email,
                name,
                inviter_email,
                invite::Flags {
                    org: org.as_deref(),
                    admin: *admin,
                    groups: groups.as_deref(),
                },
                ctx,
            )
            .await
        }
        UserCommands::List { org } => list::run(org.as_deref(), ctx).await,
    }
}
