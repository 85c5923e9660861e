mod create;
mod google_apps_domains;
mod list;

use crate::cli::subcommands::OrgCommands;
use crate::commands::CommandResult;
use crate::context::AppContext;

/// Handle `quarry org`.
pub async fn handle(action: &OrgCommands, ctx: &mut AppContext) -> CommandResult {
    match action {
        OrgCommands::List => list::run(ctx).await,
        OrgCommands::Create { name, slug } => create::run(name, slug.as_deref(), ctx).await,
        OrgCommands::SetGoogleAppsDomains { domains, org } => {
            google_apps_domains::set(domains, org.as_deref(), ctx).await
        }
        OrgCommands::ShowGoogleAppsDomains { org } => {
            google_apps_domains::show(org.as_deref(), ctx).await
        }
    }
}
