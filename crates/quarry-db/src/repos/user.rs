//! User repository — CRUD, password and group membership updates.

use chrono::Utc;

use quarry_core::entities::User;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_json_list, to_json_text};
use crate::service::QuarryService;

const SELECT_COLS: &str =
    "id, org_id, name, email, password_hash, group_ids, invite_token, created_at";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get(0)?,
        org_id: row.get(1)?,
        name: row.get(2)?,
        email: row.get(3)?,
        password_hash: row.get::<Option<String>>(4)?,
        groups: parse_json_list(&row.get::<String>(5)?)?,
        invite_token: row.get::<Option<String>>(6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

/// Fields for a user insert.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub org_id: i64,
    pub name: String,
    pub email: String,
    /// Already hashed. `None` for external login.
    pub password_hash: Option<String>,
    pub groups: Vec<i64>,
    pub invite_token: Option<String>,
}

impl QuarryService {
    /// Insert a user. Fails on a duplicate email inside the organization.
    pub async fn create_user(&self, new: NewUser) -> Result<User, DatabaseError> {
        let now = Utc::now();
        let conn = self.db().conn();
        conn.execute(
            "INSERT INTO users (org_id, name, email, password_hash, group_ids, invite_token, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            libsql::params![
                new.org_id,
                new.name.as_str(),
                new.email.as_str(),
                new.password_hash.as_deref(),
                to_json_text(&new.groups)?,
                new.invite_token.as_deref(),
                now.to_rfc3339()
            ],
        )
        .await?;
        let id = conn.last_insert_rowid();
        tracing::info!(user_id = id, org_id = new.org_id, "created user");

        Ok(User {
            id,
            org_id: new.org_id,
            name: new.name,
            email: new.email,
            password_hash: new.password_hash,
            groups: new.groups,
            invite_token: new.invite_token,
            created_at: now,
        })
    }

    /// First user (lowest id) with the email, optionally inside one organization.
    pub async fn get_user_by_email(
        &self,
        email: &str,
        org_id: Option<i64>,
    ) -> Result<Option<User>, DatabaseError> {
        let mut rows = match org_id {
            Some(org_id) => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {SELECT_COLS} FROM users
                             WHERE email = ?1 AND org_id = ?2 ORDER BY id LIMIT 1"
                        ),
                        libsql::params![email, org_id],
                    )
                    .await?
            }
            None => {
                self.db()
                    .conn()
                    .query(
                        &format!(
                            "SELECT {SELECT_COLS} FROM users WHERE email = ?1 ORDER BY id LIMIT 1"
                        ),
                        [email],
                    )
                    .await?
            }
        };
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<User>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM users WHERE id = ?1"), [id])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    /// List users ordered by id, optionally restricted to one organization.
    pub async fn list_users(&self, org_id: Option<i64>) -> Result<Vec<User>, DatabaseError> {
        let mut rows = match org_id {
            Some(org_id) => {
                self.db()
                    .conn()
                    .query(
                        &format!("SELECT {SELECT_COLS} FROM users WHERE org_id = ?1 ORDER BY id"),
                        [org_id],
                    )
                    .await?
            }
            None => {
                self.db()
                    .conn()
                    .query(&format!("SELECT {SELECT_COLS} FROM users ORDER BY id"), ())
                    .await?
            }
        };
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_user(&row)?);
        }
        Ok(results)
    }

    /// Delete every user with the email. Returns the number of rows removed.
    pub async fn delete_users_by_email(
        &self,
        email: &str,
        org_id: Option<i64>,
    ) -> Result<u64, DatabaseError> {
        let deleted = match org_id {
            Some(org_id) => {
                self.db()
                    .conn()
                    .execute(
                        "DELETE FROM users WHERE email = ?1 AND org_id = ?2",
                        libsql::params![email, org_id],
                    )
                    .await?
            }
            None => {
                self.db()
                    .conn()
                    .execute("DELETE FROM users WHERE email = ?1", [email])
                    .await?
            }
        };
        tracing::info!(email, deleted, "deleted users");
        Ok(deleted)
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<(), DatabaseError> {
        let deleted = self
            .db()
            .conn()
            .execute("DELETE FROM users WHERE id = ?1", [user_id])
            .await?;
        if deleted == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::info!(user_id, "deleted user");
        Ok(())
    }

    /// Hash and store a new password for the user.
    pub async fn set_user_password(&self, user_id: i64, plain: &str) -> Result<(), DatabaseError> {
        let hash = self.hash_password(plain)?;
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE users SET password_hash = ?1 WHERE id = ?2",
                libsql::params![hash, user_id],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::info!(user_id, "updated user password");
        Ok(())
    }

    /// Replace the group id list of the user.
    pub async fn set_user_groups(&self, user_id: i64, groups: &[i64]) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE users SET group_ids = ?1 WHERE id = ?2",
                libsql::params![to_json_text(groups)?, user_id],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::info!(user_id, ?groups, "updated user groups");
        Ok(())
    }
}
