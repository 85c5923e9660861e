use crate::commands::{CommandError, CommandResult};
use crate::context::AppContext;

/// Lower-cased name with whitespace runs replaced by `-`.
fn slug_from_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

pub async fn run(name: &str, slug: Option<&str>, ctx: &mut AppContext) -> CommandResult {
    let slug = slug.map_or_else(|| slug_from_name(name), String::from);
    if slug.is_empty() {
        return Err(CommandError::Validation(
            "Organization slug must not be empty.".to_string(),
        ));
    }

    ctx.console
        .line(format_args!("Creating organization ({name}, {slug})..."))?;
    let org = ctx
        .service
        .create_organization(name, &slug)
        .await
        .map_err(|e| CommandError::persistence("creating organization", e))?;
    ctx.console.line(format_args!("Id: {}", org.id))?;
    Ok(())
}
