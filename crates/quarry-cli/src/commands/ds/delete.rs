use crate::commands::CommandResult;
use crate::commands::shared::lookup::{require_data_source, require_organization};
use crate::context::AppContext;

pub async fn run(name: &str, org: Option<&str>, ctx: &mut AppContext) -> CommandResult {
    let org = require_organization(ctx, org).await?;
    let data_source = require_data_source(ctx, &org, name).await?;
    ctx.console.line(format_args!(
        "Deleting data source: {} (id={})",
        data_source.name, data_source.id
    ))?;
    ctx.service.delete_data_source(data_source.id).await?;
    Ok(())
}
