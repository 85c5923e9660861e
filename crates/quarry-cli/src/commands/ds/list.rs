use crate::commands::CommandResult;
use crate::commands::shared::lookup::optional_organization;
use crate::context::AppContext;
use crate::output::{Block, options_json, print_blocks};

pub async fn run(org: Option<&str>, ctx: &mut AppContext) -> CommandResult {
    let org = optional_organization(ctx, org).await?;
    let sources = ctx.service.list_data_sources(org.map(|o| o.id)).await?;

    let mut blocks = Vec::with_capacity(sources.len());
    for source in &sources {
        blocks.push(
            Block::new()
                .field("Id", source.id)
                .field("Name", &source.name)
                .field("Type", &source.connector_type)
                .field(
                    "Options",
                    options_json(&source.options).map_err(anyhow::Error::from)?,
                ),
        );
    }
    print_blocks(&mut ctx.console, &blocks)?;
    Ok(())
}
