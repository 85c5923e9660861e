use quarry_db::repos::user::NewUser;

use crate::commands::shared::lookup::require_organization;
use crate::commands::users::groups::initial_groups;
use crate::commands::{CommandError, CommandResult};
use crate::context::AppContext;

pub struct Flags<'a> {
    pub org: Option<&'a str>,
    pub admin: bool,
    pub groups: Option<&'a str>,
}

pub async fn run(
    email: &str,
    name: &str,
    inviter_email: &str,
    flags: Flags<'_>,
    ctx: &mut AppContext,
) -> CommandResult {
    let org = require_organization(ctx, flags.org).await?;
    let inviter = ctx
        .service
        .get_user_by_email(inviter_email, Some(org.id))
        .await?
        .ok_or_else(|| {
            CommandError::NotFound(format!("The inviter [{inviter_email}] was not found."))
        })?;

    let groups = initial_groups(ctx, &org, flags.groups, flags.admin).await?;
    let token = ctx.service.db().generate_token().await?;

    let invited = ctx
        .service
        .create_user(NewUser {
            org_id: org.id,
            name: name.to_string(),
            email: email.to_string(),
            password_hash: None,
            groups,
            invite_token: Some(token),
        })
        .await
        .map_err(|e| {
            if e.is_unique_violation() {
                CommandError::Validation(format!("Cannot invite. User already exists [{email}]"))
            } else {
                CommandError::persistence("inviting user", e)
            }
        })?;

    let link = match ctx.inviter.send_invite(&org, &inviter, &invited) {
        Ok(link) => link,
        Err(error) => {
            tracing::warn!(user_id = invited.id, %error, "invitation failed, removing invited user");
            if let Err(cleanup) = ctx.service.delete_user(invited.id).await {
                tracing::warn!(user_id = invited.id, %cleanup, "could not remove invited user");
            }
            return Err(error.into());
        }
    };
    ctx.console.line(format_args!(
        "An invitation was sent to [{name}] at [{email}]."
    ))?;
    ctx.console.line(format_args!("Invite link: {link}"))?;
    Ok(())
}
