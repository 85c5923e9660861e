use quarry_core::entities::DataSourceOptions;
use quarry_db::updates::data_source::DataSourceUpdateBuilder;

use crate::commands::shared::lookup::{require_data_source, require_organization};
use crate::commands::shared::options::{connector_error, parse_options};
use crate::commands::{CommandError, CommandResult};
use crate::context::AppContext;
use crate::output::options_json;

/// Attributes supplied on the command line.
pub struct Changes<'a> {
    pub name: Option<&'a str>,
    pub connector_type: Option<&'a str>,
    pub options: Option<&'a str>,
}

pub async fn run(
    name: &str,
    changes: Changes<'_>,
    org: Option<&str>,
    ctx: &mut AppContext,
) -> CommandResult {
    if let Some(connector_type) = changes.connector_type {
        ctx.connectors.get(connector_type).map_err(connector_error)?;
    }

    let org = require_organization(ctx, org).await?;
    let data_source = require_data_source(ctx, &org, name).await?;

    let target_type = changes
        .connector_type
        .unwrap_or(&data_source.connector_type)
        .to_string();
    let type_changed = target_type != data_source.connector_type;

    let options = match changes.options {
        Some(raw) => {
            let supplied = parse_options(raw)?;
            if type_changed {
                supplied
            } else {
                let mut merged = data_source.options.clone();
                merged.extend(supplied);
                merged
            }
        }
        None => data_source.options.clone(),
    };
    if type_changed || changes.options.is_some() {
        ctx.connectors
            .validate(&target_type, &options)
            .map_err(connector_error)?;
    }

    let mut update = DataSourceUpdateBuilder::new();
    if let Some(new_name) = changes.name
        && new_name != data_source.name
    {
        ctx.console.line(format_args!(
            "Updating name: {} -> {new_name}",
            data_source.name
        ))?;
        update = update.name(new_name);
    }
    if type_changed {
        ctx.console.line(format_args!(
            "Updating type: {} -> {target_type}",
            data_source.connector_type
        ))?;
        update = update.connector_type(target_type.clone());
    }
    if options != data_source.options {
        let before = redacted(ctx, &data_source.connector_type, &data_source.options);
        let after = redacted(ctx, &target_type, &options);
        ctx.console.line(format_args!(
            "Updating options: {} -> {}",
            options_json(&before).map_err(anyhow::Error::from)?,
            options_json(&after).map_err(anyhow::Error::from)?
        ))?;
        update = update.options(options);
    }

    let update = update.build();
    if update.is_empty() {
        tracing::debug!(data_source_id = data_source.id, "nothing to update");
        return Ok(());
    }
    ctx.service
        .update_data_source(data_source.id, &update)
        .await
        .map_err(|e| CommandError::persistence("updating data source", e))?;
    Ok(())
}

/// Options with the secret properties of `connector_type` masked.
fn redacted(
    ctx: &AppContext,
    connector_type: &str,
    options: &DataSourceOptions,
) -> DataSourceOptions {
    ctx.connectors.get(connector_type).map_or_else(
        |_| options.clone(),
        |connector| connector.configuration_schema().redact(options),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::{Changes, run};
    use crate::test_support::{TestApp, test_app};

    const NO_CHANGES: Changes<'static> = Changes {
        name: None,
        connector_type: None,
        options: None,
    };

    async fn app_with_sqlite_source() -> TestApp {
        let app = test_app(&[]).await;
        let group = app.ctx.service.default_group(app.org.id).await.unwrap();
        app.ctx
            .service
            .create_data_source(
                app.org.id,
                "test1",
                "sqlite",
                json!({"dbpath": "/tmp/test.db"}).as_object().unwrap(),
                group.id,
            )
            .await
            .unwrap();
        app
    }

    async fn options_of(app: &TestApp, name: &str) -> Value {
        let ds = app
            .ctx
            .service
            .get_data_source_by_name(app.org.id, name)
            .await
            .unwrap()
            .unwrap();
        Value::Object(ds.options)
    }

    #[tokio::test]
    async fn change_type_and_options() {
        let mut app = app_with_sqlite_source().await;
        let changes = Changes {
            name: Some("test2"),
            connector_type: Some("pg"),
            options: Some(r#"{"host":"example.com","dbname":"testdb"}"#),
        };
        run("test1", changes, None, &mut app.ctx).await.unwrap();

        let ds = app
            .ctx
            .service
            .get_data_source_by_name(app.org.id, "test2")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(ds.connector_type, "pg");
        assert_eq!(
            options_of(&app, "test2").await,
            json!({"host": "example.com", "dbname": "testdb"})
        );
        let out = app.out.contents();
        assert!(out.contains("Updating name: test1 -> test2\n"));
        assert!(out.contains("Updating type: sqlite -> pg\n"));
    }

    #[tokio::test]
    async fn same_type_merges_options() {
        let mut app = test_app(&[]).await;
        let group = app.ctx.service.default_group(app.org.id).await.unwrap();
        app.ctx
            .service
            .create_data_source(
                app.org.id,
                "test1",
                "pg",
                json!({"host": "example.com", "dbname": "testdb"})
                    .as_object()
                    .unwrap(),
                group.id,
            )
            .await
            .unwrap();

        let changes = Changes {
            options: Some(r#"{"port":5433}"#),
            ..NO_CHANGES
        };
        run("test1", changes, None, &mut app.ctx).await.unwrap();
        assert_eq!(
            options_of(&app, "test1").await,
            json!({"host": "example.com", "dbname": "testdb", "port": 5433})
        );
    }

    #[tokio::test]
    async fn unsupported_type_leaves_row_unchanged() {
        let mut app = app_with_sqlite_source().await;
        let changes = Changes {
            connector_type: Some("wrong"),
            options: Some(r#"{"host":"example.com","dbname":"testdb"}"#),
            ..NO_CHANGES
        };
        let err = run("test1", changes, None, &mut app.ctx).await.unwrap_err();
        assert!(err.to_string().starts_with("Error: the type \"wrong\""));
        assert_eq!(
            options_of(&app, "test1").await,
            json!({"dbpath": "/tmp/test.db"})
        );
    }

    #[tokio::test]
    async fn invalid_options_leave_row_unchanged() {
        let mut app = app_with_sqlite_source().await;
        let changes = Changes {
            connector_type: Some("pg"),
            options: Some(r#"{"host":12345,"dbname":"testdb"}"#),
            ..NO_CHANGES
        };
        let err = run("test1", changes, None, &mut app.ctx).await.unwrap_err();
        assert_eq!(err.to_string(), "Error: invalid configuration.");

        let ds = app
            .ctx
            .service
            .get_data_source_by_name(app.org.id, "test1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(ds.connector_type, "sqlite");
    }

    #[tokio::test]
    async fn type_change_without_options_is_validated() {
        let mut app = app_with_sqlite_source().await;
        let changes = Changes {
            connector_type: Some("pg"),
            ..NO_CHANGES
        };
        let err = run("test1", changes, None, &mut app.ctx).await.unwrap_err();
        assert_eq!(err.to_string(), "Error: invalid configuration.");
    }

    #[tokio::test]
    async fn missing_data_source_is_not_found() {
        let mut app = test_app(&[]).await;
        let changes = Changes {
            name: Some("test2"),
            ..NO_CHANGES
        };
        let err = run("test1", changes, None, &mut app.ctx).await.unwrap_err();
        assert_eq!(err.to_string(), "Couldn't find data source named: test1");
    }

    #[tokio::test]
    async fn no_changes_prints_nothing() {
        let mut app = app_with_sqlite_source().await;
        run("test1", NO_CHANGES, None, &mut app.ctx).await.unwrap();
        assert_eq!(app.out.contents(), "");
    }

    #[tokio::test]
    async fn options_change_masks_passwords() {
        let mut app = test_app(&[]).await;
        let group = app.ctx.service.default_group(app.org.id).await.unwrap();
        app.ctx
            .service
            .create_data_source(
                app.org.id,
                "test",
                "pg",
                json!({"dbname": "testdb", "password": "hunter2"})
                    .as_object()
                    .unwrap(),
                group.id,
            )
            .await
            .unwrap();

        let changes = Changes {
            options: Some(r#"{"password":"s3cret"}"#),
            ..NO_CHANGES
        };
        run("test", changes, None, &mut app.ctx).await.unwrap();

        let out = app.out.contents();
        assert_eq!(
            out,
            "Updating options: {\"dbname\": \"testdb\", \"password\": \"--------\"} -> \
             {\"dbname\": \"testdb\", \"password\": \"--------\"}\n"
        );
        assert!(!out.contains("hunter2"));
        assert!(!out.contains("s3cret"));
        assert_eq!(
            options_of(&app, "test").await,
            json!({"dbname": "testdb", "password": "s3cret"})
        );
    }
}
