use crate::commands::CommandResult;
use crate::context::AppContext;
use crate::output::{Block, print_blocks};

pub async fn run(ctx: &mut AppContext) -> CommandResult {
    let blocks: Vec<Block> = ctx
        .service
        .list_organizations()
        .await?
        .into_iter()
        .map(|org| {
            Block::new()
                .field("Id", org.id)
                .field("Name", org.name)
                .field("Slug", org.slug)
        })
        .collect();
    print_blocks(&mut ctx.console, &blocks)?;
    Ok(())
}
