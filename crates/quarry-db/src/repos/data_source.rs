//! Data source repository — CRUD + default group attachment.

use chrono::Utc;

use quarry_core::entities::{DataSource, DataSourceOptions};

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_json_object, to_json_text};
use crate::repos::in_transaction;
use crate::service::QuarryService;
use crate::updates::data_source::DataSourceUpdate;

const SELECT_COLS: &str = "id, org_id, name, type, options, created_at";

fn row_to_data_source(row: &libsql::Row) -> Result<DataSource, DatabaseError> {
    Ok(DataSource {
        id: row.get(0)?,
        org_id: row.get(1)?,
        name: row.get(2)?,
        connector_type: row.get(3)?,
        options: parse_json_object(&row.get::<String>(4)?)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl QuarryService {
    /// Insert a data source and attach it to `group_id` with full access.
    ///
    /// Options must already be validated against the connector schema.
    pub async fn create_data_source(
        &self,
        org_id: i64,
        name: &str,
        connector_type: &str,
        options: &DataSourceOptions,
        group_id: i64,
    ) -> Result<DataSource, DatabaseError> {
        let now = Utc::now();
        let options_json = to_json_text(options)?;

        let id = in_transaction!(self.db().conn(), |tx| {
            async {
                tx.execute(
                    "INSERT INTO data_sources (org_id, name, type, options, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    libsql::params![
                        org_id,
                        name,
                        connector_type,
                        options_json.as_str(),
                        now.to_rfc3339()
                    ],
                )
                .await?;
                let id = tx.last_insert_rowid();
                tx.execute(
                    "INSERT INTO data_source_groups (data_source_id, group_id, view_only)
                     VALUES (?1, ?2, 0)",
                    libsql::params![id, group_id],
                )
                .await?;
                Ok::<_, DatabaseError>(id)
            }
            .await
        })?;

        tracing::info!(data_source_id = id, org_id, connector_type, "created data source");
        Ok(DataSource {
            id,
            org_id,
            name: name.to_string(),
            connector_type: connector_type.to_string(),
            options: options.clone(),
            created_at: now,
        })
    }

    pub async fn get_data_source(&self, id: i64) -> Result<Option<DataSource>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM data_sources WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_data_source(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn get_data_source_by_name(
        &self,
        org_id: i64,
        name: &str,
    ) -> Result<Option<DataSource>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM data_sources WHERE org_id = ?1 AND name = ?2"),
                libsql::params![org_id, name],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_data_source(&row)?)),
            None => Ok(None),
        }
    }

    /// List data sources ordered by id, optionally restricted to one organization.
    pub async fn list_data_sources(
        &self,
        org_id: Option<i64>,
    ) -> Result<Vec<DataSource>, DatabaseError> {
        let mut rows = match org_id {
            Some(org_id) => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {SELECT_COLS} FROM data_sources WHERE org_id = ?1 ORDER BY id"
                        ),
                        [org_id],
                    )
                    .await?
            }
            None => {
                self.db()
                    .conn()
                    .query(&format!("SELECT {SELECT_COLS} FROM data_sources ORDER BY id"), ())
                    .await?
            }
        };
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_data_source(&row)?);
        }
        Ok(results)
    }

    /// Apply the `Some` fields of `update` and return the updated row.
    pub async fn update_data_source(
        &self,
        id: i64,
        update: &DataSourceUpdate,
    ) -> Result<DataSource, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref name) = update.name {
            sets.push(format!("name = ?{idx}"));
            params.push(name.clone().into());
            idx += 1;
        }
        if let Some(ref connector_type) = update.connector_type {
            sets.push(format!("type = ?{idx}"));
            params.push(connector_type.clone().into());
            idx += 1;
        }
        if let Some(ref options) = update.options {
            sets.push(format!("options = ?{idx}"));
            params.push(to_json_text(options)?.into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_data_source(id).await?.ok_or(DatabaseError::NoResult);
        }

        params.push(id.into());
        let sql = format!("UPDATE data_sources SET {} WHERE id = ?{idx}", sets.join(", "));
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }

        tracing::info!(
            data_source_id = id,
            fields = ?update.changed_fields(),
            "updated data source"
        );
        self.get_data_source(id).await?.ok_or(DatabaseError::NoResult)
    }

    /// Delete a data source and its group attachments.
    pub async fn delete_data_source(&self, id: i64) -> Result<(), DatabaseError> {
        in_transaction!(self.db().conn(), |tx| {
            async {
                tx.execute(
                    "DELETE FROM data_source_groups WHERE data_source_id = ?1",
                    [id],
                )
                .await?;
                let deleted = tx
                    .execute("DELETE FROM data_sources WHERE id = ?1", [id])
                    .await?;
                if deleted == 0 {
                    return Err(DatabaseError::NoResult);
                }
                Ok(())
            }
            .await
        })?;
        tracing::info!(data_source_id = id, "deleted data source");
        Ok(())
    }

    /// Group attachments of a data source as `(group_id, view_only)` pairs.
    pub async fn data_source_groups(&self, id: i64) -> Result<Vec<(i64, bool)>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT group_id, view_only FROM data_source_groups
                 WHERE data_source_id = ?1 ORDER BY group_id",
                [id],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push((row.get::<i64>(0)?, row.get::<i64>(1)? != 0));
        }
        Ok(results)
    }
}
