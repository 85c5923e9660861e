use quarry_connectors::ConfigurationSchema;
use quarry_core::entities::DataSourceOptions;

use crate::commands::shared::lookup::require_organization;
use crate::commands::shared::options::{connector_error, parse_options};
use crate::commands::{CommandError, CommandResult};
use crate::context::AppContext;
use crate::output::options_json;

fn prompt_name(ctx: &mut AppContext) -> CommandResult<String> {
    loop {
        let name = ctx.console.prompt("Name")?;
        let name = name.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
    }
}

/// Numbered menu of registered connector types.
fn select_type(ctx: &mut AppContext) -> CommandResult<String> {
    let types = ctx.connectors.types();
    ctx.console.line("Select type:")?;
    for (index, connector_type) in types.iter().enumerate() {
        let connector = ctx.connectors.get(connector_type).map_err(connector_error)?;
        ctx.console
            .line(format_args!("{}. {}", index + 1, connector.name()))?;
    }

    let label = format!("[1-{}]", types.len());
    loop {
        let answer = ctx.console.prompt(&label)?;
        if let Ok(choice) = answer.trim().parse::<usize>()
            && (1..=types.len()).contains(&choice)
        {
            return Ok(types[choice - 1].to_string());
        }
    }
}

/// Ask for every schema property in declaration order.
fn prompt_options(
    ctx: &mut AppContext,
    schema: &ConfigurationSchema,
) -> CommandResult<DataSourceOptions> {
    let mut options = DataSourceOptions::new();
    for property in schema.properties() {
        let label = format!(
            "{} ({})",
            property.display_title(),
            if property.required { "required" } else { "optional" }
        );
        loop {
            let answer = if property.secret {
                ctx.console.prompt_secret(&label)?
            } else {
                ctx.console.prompt(&label)?
            };
            if answer.trim().is_empty() {
                if property.required {
                    continue;
                }
                break;
            }
            if let Some(value) = property.kind.parse(&answer) {
                options.insert(property.name.clone(), value);
                break;
            }
            ctx.console.line(format_args!(
                "Error: '{}' is not a valid {}.",
                answer.trim(),
                property.kind.as_str()
            ))?;
        }
    }
    Ok(options)
}

pub async fn run(
    name: Option<&str>,
    connector_type: Option<&str>,
    options: Option<&str>,
    org: Option<&str>,
    ctx: &mut AppContext,
) -> CommandResult {
    let org = require_organization(ctx, org).await?;
    let name = match name {
        Some(name) => name.to_string(),
        None => prompt_name(ctx)?,
    };
    let connector_type = match connector_type {
        Some(connector_type) => {
            ctx.connectors.get(connector_type).map_err(connector_error)?;
            connector_type.to_string()
        }
        None => select_type(ctx)?,
    };

    let schema = ctx
        .connectors
        .get(&connector_type)
        .map_err(connector_error)?
        .configuration_schema();
    let options = match options {
        Some(raw) => parse_options(raw)?,
        None => prompt_options(ctx, &schema)?,
    };
    schema.validate(&options).map_err(connector_error)?;

    ctx.console.line(format_args!(
        "Creating {connector_type} data source ({name}) with options:"
    ))?;
    ctx.console.line(options_json(&options).map_err(anyhow::Error::from)?)?;

    let default_group = ctx.service.default_group(org.id).await?;
    let data_source = ctx
        .service
        .create_data_source(org.id, &name, &connector_type, &options, default_group.id)
        .await
        .map_err(|e| CommandError::persistence("creating data source", e))?;
    tracing::debug!(options = ?schema.redact(&options), "data source options stored");

    ctx.console.line(format_args!("Id: {}", data_source.id))?;
    Ok(())
}
