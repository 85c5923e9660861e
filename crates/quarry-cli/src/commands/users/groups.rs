use quarry_core::entities::Organization;
use quarry_core::lists::parse_id_list;

use crate::commands::{CommandError, CommandResult};
use crate::context::AppContext;

/// Group ids for a new user.
///
/// `--groups` replaces the default group; `--admin` adds the admin group.
pub async fn initial_groups(
    ctx: &AppContext,
    org: &Organization,
    groups: Option<&str>,
    admin: bool,
) -> CommandResult<Vec<i64>> {
    let mut ids = match groups {
        Some(raw) => {
            parse_id_list(raw).map_err(|e| CommandError::Validation(format!("Error: {e}")))?
        }
        None => vec![ctx.service.default_group(org.id).await?.id],
    };
    if admin {
        let admin_id = ctx.service.admin_group(org.id).await?.id;
        if !ids.contains(&admin_id) {
            ids.push(admin_id);
        }
    }
    Ok(ids)
}
