use quarry_core::lists::split_list;

use crate::commands::CommandResult;
use crate::commands::shared::lookup::require_organization;
use crate::context::AppContext;

pub async fn set(domains: &str, org: Option<&str>, ctx: &mut AppContext) -> CommandResult {
    let mut org = require_organization(ctx, org).await?;
    org.set_google_apps_domains(split_list(domains));
    ctx.service
        .update_organization_settings(org.id, &org.settings)
        .await?;

    ctx.console.line(format_args!(
        "Updated list of allowed domains to: {}",
        org.google_apps_domains().join(", ")
    ))?;
    Ok(())
}

pub async fn show(org: Option<&str>, ctx: &mut AppContext) -> CommandResult {
    let org = require_organization(ctx, org).await?;
    let domains = org.google_apps_domains();
    let listed = if domains.is_empty() {
        "(none)".to_string()
    } else {
        domains.join(", ")
    };
    ctx.console
        .line(format_args!("Current list of Google Apps domains: {listed}"))?;
    Ok(())
}
