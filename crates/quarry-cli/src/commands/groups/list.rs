use std::collections::HashMap;

use crate::commands::CommandResult;
use crate::commands::shared::lookup::optional_organization;
use crate::context::AppContext;
use crate::output::{Block, print_blocks};

pub async fn run(org: Option<&str>, ctx: &mut AppContext) -> CommandResult {
    let org = optional_organization(ctx, org).await?;
    let groups = ctx.service.list_groups(org.as_ref().map(|o| o.id)).await?;
    let slugs: HashMap<i64, String> = ctx
        .service
        .list_organizations()
        .await?
        .into_iter()
        .map(|o| (o.id, o.slug))
        .collect();

    let blocks: Vec<Block> = groups
        .iter()
        .map(|group| {
            Block::new()
                .field("Id", group.id)
                .field("Name", &group.name)
                .field("Type", group.group_type)
                .field("Organization", slugs.get(&group.org_id).map_or("", String::as_str))
        })
        .collect();
    print_blocks(&mut ctx.console, &blocks)?;
    Ok(())
}
