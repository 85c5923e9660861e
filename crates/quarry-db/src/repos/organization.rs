//! Organization repository — CRUD, settings, builtin group bootstrap.

use chrono::Utc;
use serde_json::{Map, Value};

use quarry_core::entities::{ADMIN_GROUP_NAME, DEFAULT_GROUP_NAME, Organization};
use quarry_core::enums::GroupType;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_json_object, to_json_text};
use crate::repos::in_transaction;
use crate::service::QuarryService;

const SELECT_COLS: &str = "id, name, slug, settings, created_at";

fn row_to_organization(row: &libsql::Row) -> Result<Organization, DatabaseError> {
    Ok(Organization {
        id: row.get(0)?,
        name: row.get(1)?,
        slug: row.get(2)?,
        settings: parse_json_object(&row.get::<String>(3)?)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

async fn insert_builtin_group(
    conn: &libsql::Connection,
    org_id: i64,
    name: &str,
    permissions: &[String],
    now: &str,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO org_groups (org_id, name, type, permissions, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        libsql::params![
            org_id,
            name,
            GroupType::Builtin.as_str(),
            to_json_text(permissions)?,
            now
        ],
    )
    .await?;
    Ok(())
}

impl QuarryService {
    /// Create an organization together with its `admin` and `default` groups.
    ///
    /// The three inserts share one transaction.
    pub async fn create_organization(
        &self,
        name: &str,
        slug: &str,
    ) -> Result<Organization, DatabaseError> {
        let now = Utc::now();
        let now_str = now.to_rfc3339();
        let settings = self.settings();

        let id = in_transaction!(self.db().conn(), |tx| {
            async {
                tx.execute(
                    "INSERT INTO organizations (name, slug, settings, created_at)
                     VALUES (?1, ?2, '{}', ?3)",
                    libsql::params![name, slug, now_str.as_str()],
                )
                .await?;
                let org_id = tx.last_insert_rowid();
                insert_builtin_group(
                    &tx,
                    org_id,
                    ADMIN_GROUP_NAME,
                    &settings.admin_permissions,
                    &now_str,
                )
                .await?;
                insert_builtin_group(
                    &tx,
                    org_id,
                    DEFAULT_GROUP_NAME,
                    &settings.default_permissions,
                    &now_str,
                )
                .await?;
                Ok::<_, DatabaseError>(org_id)
            }
            .await
        })?;

        tracing::info!(org_id = id, slug, "created organization");
        Ok(Organization {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
            settings: Map::new(),
            created_at: now,
        })
    }

    /// Create the given organization if the database holds none.
    ///
    /// Returns the new organization, or `None` when one already existed.
    pub async fn bootstrap_organization(
        &self,
        name: &str,
        slug: &str,
    ) -> Result<Option<Organization>, DatabaseError> {
        if self.db().count_rows("organizations").await? > 0 {
            return Ok(None);
        }
        self.create_organization(name, slug).await.map(Some)
    }

    pub async fn get_organization(&self, id: i64) -> Result<Option<Organization>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM organizations WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_organization(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn get_organization_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Organization>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM organizations WHERE slug = ?1"),
                [slug],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_organization(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn list_organizations(&self) -> Result<Vec<Organization>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM organizations ORDER BY id"),
                (),
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_organization(&row)?);
        }
        Ok(results)
    }

    /// Overwrite the settings map of an organization.
    pub async fn update_organization_settings(
        &self,
        org_id: i64,
        settings: &Map<String, Value>,
    ) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE organizations SET settings = ?1 WHERE id = ?2",
                libsql::params![to_json_text(settings)?, org_id],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::info!(org_id, "updated organization settings");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quarry_core::entities::SETTING_GOOGLE_APPS_DOMAINS;

    use crate::test_support::{test_service, test_service_with_org};

    #[tokio::test]
    async fn create_organization_adds_builtin_groups() {
        let (svc, org) = test_service_with_org().await;
        assert_eq!(org.slug, "default");

        let groups = svc.list_groups(Some(org.id)).await.unwrap();
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["admin", "default"]);
        assert!(groups.iter().all(|g| g.group_type.as_str() == "builtin"));
        assert_eq!(groups[0].permissions, vec!["admin", "super_admin"]);
        assert_eq!(groups[1].permissions, svc.default_permissions());
    }

    #[tokio::test]
    async fn duplicate_slug_is_rejected_without_orphan_groups() {
        let (svc, _) = test_service_with_org().await;
        let err = svc.create_organization("Other", "default").await.unwrap_err();
        assert!(err.is_unique_violation(), "unexpected error: {err}");
        assert_eq!(svc.db().count_rows("organizations").await.unwrap(), 1);
        assert_eq!(svc.db().count_rows("org_groups").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn bootstrap_only_runs_on_empty_database() {
        let svc = test_service().await;
        let created = svc.bootstrap_organization("Default", "default").await.unwrap();
        assert!(created.is_some());
        let again = svc.bootstrap_organization("Default", "default").await.unwrap();
        assert!(again.is_none());
        assert_eq!(svc.list_organizations().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn lookup_by_slug_and_id() {
        let (svc, org) = test_service_with_org().await;
        let by_slug = svc.get_organization_by_slug("default").await.unwrap().unwrap();
        let by_id = svc.get_organization(org.id).await.unwrap().unwrap();
        assert_eq!(by_slug.id, by_id.id);
        assert!(svc.get_organization_by_slug("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_orders_by_id() {
        let (svc, _) = test_service_with_org().await;
        svc.create_organization("test", "test_org").await.unwrap();
        let orgs = svc.list_organizations().await.unwrap();
        let slugs: Vec<&str> = orgs.iter().map(|o| o.slug.as_str()).collect();
        assert_eq!(slugs, vec!["default", "test_org"]);
    }

    #[tokio::test]
    async fn settings_roundtrip() {
        let (svc, mut org) = test_service_with_org().await;
        org.set_google_apps_domains(vec!["example.org".into(), "example.com".into()]);
        svc.update_organization_settings(org.id, &org.settings)
            .await
            .unwrap();

        let reloaded = svc.get_organization(org.id).await.unwrap().unwrap();
        assert_eq!(
            reloaded.google_apps_domains(),
            vec!["example.org", "example.com"]
        );
        assert!(reloaded.settings.contains_key(SETTING_GOOGLE_APPS_DOMAINS));
    }

    #[tokio::test]
    async fn settings_update_for_missing_org_fails() {
        let svc = test_service().await;
        let result = svc
            .update_organization_settings(42, &serde_json::Map::new())
            .await;
        assert!(result.is_err());
    }
}
