use quarry_db::repos::user::NewUser;

use crate::commands::shared::lookup::require_organization;
use crate::commands::users::groups::initial_groups;
use crate::commands::{CommandError, CommandResult};
use crate::context::AppContext;

pub struct Flags<'a> {
    pub org: Option<&'a str>,
    pub admin: bool,
    pub google: bool,
    pub password: Option<&'a str>,
    pub groups: Option<&'a str>,
}

/// Ask for a password twice until both answers match.
fn prompt_password(ctx: &mut AppContext) -> CommandResult<String> {
    loop {
        let first = ctx.console.prompt_secret("Password")?;
        let second = ctx.console.prompt_secret("Repeat for confirmation")?;
        if first == second {
            return Ok(first);
        }
        ctx.console
            .line("Error: the two entered values do not match.")?;
    }
}

pub async fn run(email: &str, name: &str, flags: Flags<'_>, ctx: &mut AppContext) -> CommandResult {
    let org = require_organization(ctx, flags.org).await?;
    ctx.console.line(format_args!(
        "Creating user ({email}, {name}) in organization {}...",
        org.slug
    ))?;
    ctx.console.line(format_args!("Admin: {}", flags.admin))?;
    ctx.console
        .line(format_args!("Login with Google Auth: {}", flags.google))?;

    let groups = initial_groups(ctx, &org, flags.groups, flags.admin).await?;

    let password_hash = if flags.google {
        None
    } else {
        let plain = match flags.password {
            Some(password) => password.to_string(),
            None => prompt_password(ctx)?,
        };
        Some(ctx.service.hash_password(&plain)?)
    };

    let user = ctx
        .service
        .create_user(NewUser {
            org_id: org.id,
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            groups,
            invite_token: None,
        })
        .await
        .map_err(|e| CommandError::persistence("creating user", e))?;
    tracing::debug!(user_id = user.id, "user created from command line");
    Ok(())
}
