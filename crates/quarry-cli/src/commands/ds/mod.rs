mod delete;
mod edit;
mod list;
mod new;
mod test_connection;

use crate::cli::subcommands::DataSourceCommands;
use crate::commands::CommandResult;
use crate::context::AppContext;

/// Handle `quarry ds`.
pub async fn handle(action: &DataSourceCommands, ctx: &mut AppContext) -> CommandResult {
    match action {
        DataSourceCommands::New {
            name,
            connector_type,
            options,
            org,
        } => {
            new::run(
                name.as_deref(),
                connector_type.as_deref(),
                options.as_deref(),
                org.as_deref(),
                ctx,
            )
            .await
        }
        DataSourceCommands::Edit {
            name,
            new_name,
            connector_type,
            options,
            org,
        } => {
            edit::run(
                name,
                edit::Changes {
                    name: new_name.as_deref(),
                    connector_type: connector_type.as_deref(),
                    options: options.as_deref(),
                },
                org.as_deref(),
                ctx,
            )
            .await
        }
        DataSourceCommands::Delete { name, org } => delete::run(name, org.as_deref(), ctx).await,
        DataSourceCommands::Test { name, org } => {
            test_connection::run(name, org.as_deref(), ctx).await
        }
        DataSourceCommands::List { org } => list::run(org.as_deref(), ctx).await,
    }
}
