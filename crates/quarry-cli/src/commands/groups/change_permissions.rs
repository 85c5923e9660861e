use quarry_core::lists::parse_permissions;

use crate::commands::{CommandError, CommandResult};
use crate::context::AppContext;

pub async fn run(group_id: i64, permissions: Option<&str>, ctx: &mut AppContext) -> CommandResult {
    ctx.console
        .line(format_args!("Change permissions of group {group_id} ..."))?;
    let group = ctx
        .service
        .get_group(group_id)
        .await?
        .ok_or_else(|| CommandError::NotFound(format!("Group [{group_id}] not found.")))?;

    let permissions = parse_permissions(permissions, ctx.service.default_permissions());
    ctx.console.line(format_args!(
        "current permissions [{}] will be modify to [{}]",
        group.permissions.join(","),
        permissions.join(",")
    ))?;

    ctx.service
        .update_group_permissions(group.id, &permissions)
        .await
        .map_err(|e| CommandError::persistence("change permission", e))?;
    Ok(())
}
