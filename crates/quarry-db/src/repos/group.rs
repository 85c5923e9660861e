//! Group repository — CRUD + builtin group lookup.

use chrono::Utc;

use quarry_core::entities::{ADMIN_GROUP_NAME, DEFAULT_GROUP_NAME, Group};
use quarry_core::enums::GroupType;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum, parse_json_list, to_json_text};
use crate::service::QuarryService;

const SELECT_COLS: &str = "id, org_id, name, type, permissions, created_at";

fn row_to_group(row: &libsql::Row) -> Result<Group, DatabaseError> {
    Ok(Group {
        id: row.get(0)?,
        org_id: row.get(1)?,
        name: row.get(2)?,
        group_type: parse_enum(&row.get::<String>(3)?)?,
        permissions: parse_json_list(&row.get::<String>(4)?)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl QuarryService {
    /// Create a regular group. Permissions are stored in the given order.
    pub async fn create_group(
        &self,
        org_id: i64,
        name: &str,
        permissions: &[String],
    ) -> Result<Group, DatabaseError> {
        let now = Utc::now();
        let conn = self.db().conn();
        conn.execute(
            "INSERT INTO org_groups (org_id, name, type, permissions, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            libsql::params![
                org_id,
                name,
                GroupType::Regular.as_str(),
                to_json_text(permissions)?,
                now.to_rfc3339()
            ],
        )
        .await?;
        let id = conn.last_insert_rowid();
        tracing::info!(group_id = id, org_id, name, "created group");

        Ok(Group {
            id,
            org_id,
            name: name.to_string(),
            group_type: GroupType::Regular,
            permissions: permissions.to_vec(),
            created_at: now,
        })
    }

    pub async fn get_group(&self, id: i64) -> Result<Option<Group>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM org_groups WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_group(&row)?)),
            None => Ok(None),
        }
    }

    /// List groups ordered by id, optionally restricted to one organization.
    pub async fn list_groups(&self, org_id: Option<i64>) -> Result<Vec<Group>, DatabaseError> {
        let mut rows = match org_id {
            Some(org_id) => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {SELECT_COLS} FROM org_groups WHERE org_id = ?1 ORDER BY id"
                        ),
                        [org_id],
                    )
                    .await?
            }
            None => {
                self.db()
                    .conn()
                    .query(&format!("SELECT {SELECT_COLS} FROM org_groups ORDER BY id"), ())
                    .await?
            }
        };
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_group(&row)?);
        }
        Ok(results)
    }

    /// Replace the permission list of a group and return the updated row.
    pub async fn update_group_permissions(
        &self,
        id: i64,
        permissions: &[String],
    ) -> Result<Group, DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE org_groups SET permissions = ?1 WHERE id = ?2",
                libsql::params![to_json_text(permissions)?, id],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::info!(group_id = id, "updated group permissions");
        self.get_group(id).await?.ok_or(DatabaseError::NoResult)
    }

    /// The builtin `admin` group of an organization.
    pub async fn admin_group(&self, org_id: i64) -> Result<Group, DatabaseError> {
        self.builtin_group(org_id, ADMIN_GROUP_NAME).await
    }

    /// The builtin `default` group of an organization.
    pub async fn default_group(&self, org_id: i64) -> Result<Group, DatabaseError> {
        self.builtin_group(org_id, DEFAULT_GROUP_NAME).await
    }

    async fn builtin_group(&self, org_id: i64, name: &str) -> Result<Group, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM org_groups
                     WHERE org_id = ?1 AND name = ?2 AND type = ?3
                     ORDER BY id LIMIT 1"
                ),
                libsql::params![org_id, name, GroupType::Builtin.as_str()],
            )
            .await?;
        match rows.next().await? {
            Some(row) => row_to_group(&row),
            None => Err(DatabaseError::InvalidState(format!(
                "organization {org_id} has no builtin '{name}' group"
            ))),
        }
    }
}
