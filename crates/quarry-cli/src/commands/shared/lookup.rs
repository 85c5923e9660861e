//! Entity lookups that end a command when nothing matches.

use quarry_core::entities::{DataSource, Organization, User};

use crate::commands::{CommandError, CommandResult};
use crate::context::AppContext;

/// Organization by slug, falling back to the configured default slug.
pub async fn require_organization(
    ctx: &AppContext,
    requested: Option<&str>,
) -> CommandResult<Organization> {
    let slug = ctx.org_slug(requested);
    tracing::debug!(slug, "looking up organization");
    ctx.service
        .get_organization_by_slug(slug)
        .await?
        .ok_or_else(|| CommandError::NotFound(format!("Organization [{slug}] not found.")))
}

/// Organization filter for list commands. `None` means every organization.
pub async fn optional_organization(
    ctx: &AppContext,
    requested: Option<&str>,
) -> CommandResult<Option<Organization>> {
    match requested {
        Some(slug) => require_organization(ctx, Some(slug)).await.map(Some),
        None => Ok(None),
    }
}

pub async fn require_user(
    ctx: &AppContext,
    email: &str,
    org_id: Option<i64>,
) -> CommandResult<User> {
    ctx.service
        .get_user_by_email(email, org_id)
        .await?
        .ok_or_else(|| CommandError::NotFound(format!("User [{email}] not found.")))
}

pub async fn require_data_source(
    ctx: &AppContext,
    org: &Organization,
    name: &str,
) -> CommandResult<DataSource> {
    ctx.service
        .get_data_source_by_name(org.id, name)
        .await?
        .ok_or_else(|| CommandError::NotFound(format!("Couldn't find data source named: {name}")))
}
