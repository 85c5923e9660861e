use crate::commands::CommandResult;
use crate::commands::shared::lookup::{require_organization, require_user};
use crate::context::AppContext;

pub async fn run(email: &str, org: Option<&str>, ctx: &mut AppContext) -> CommandResult {
    let org = require_organization(ctx, org).await?;
    let user = require_user(ctx, email, Some(org.id)).await?;
    let admin = ctx.service.admin_group(org.id).await?;

    if user.is_member_of(admin.id) {
        ctx.console.line("User is already an admin.")?;
        return Ok(());
    }

    let mut groups = user.groups.clone();
    groups.push(admin.id);
    ctx.service.set_user_groups(user.id, &groups).await?;
    ctx.console.line("User updated.")?;
    Ok(())
}
