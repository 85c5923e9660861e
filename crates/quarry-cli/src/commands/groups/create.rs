use quarry_core::lists::parse_permissions;

use crate::commands::shared::lookup::require_organization;
use crate::commands::{CommandError, CommandResult};
use crate::context::AppContext;

pub async fn run(
    name: &str,
    permissions: Option<&str>,
    org: Option<&str>,
    ctx: &mut AppContext,
) -> CommandResult {
    ctx.console.line(format_args!("Creating group ({name})..."))?;
    let org = require_organization(ctx, org).await?;
    let permissions = parse_permissions(permissions, ctx.service.default_permissions());
    ctx.console
        .line(format_args!("permissions: [{}]", permissions.join(",")))?;

    ctx.service
        .create_group(org.id, name, &permissions)
        .await
        .map_err(|e| CommandError::persistence("create group", e))?;
    Ok(())
}
