use crate::commands::CommandResult;
use crate::commands::shared::lookup::{require_data_source, require_organization};
use crate::commands::shared::options::connector_error;
use crate::context::AppContext;

pub async fn run(name: &str, org: Option<&str>, ctx: &mut AppContext) -> CommandResult {
    let org = require_organization(ctx, org).await?;
    let data_source = require_data_source(ctx, &org, name).await?;
    ctx.console.line(format_args!(
        "Testing connection to data source: {} (id={})",
        data_source.name, data_source.id
    ))?;

    let connector = ctx
        .connectors
        .get(&data_source.connector_type)
        .map_err(connector_error)?;
    connector
        .test_connection(&data_source.options)
        .await
        .map_err(connector_error)?;
    ctx.console.line("Success")?;
    Ok(())
}
