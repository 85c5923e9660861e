//! Admin flow integration tests
//!
//! Exercises the repositories the way the CLI chains them:
//! - Organization bootstrap and multi-tenant isolation
//! - User onboarding into builtin groups, admin promotion
//! - Data source lifecycle against a file-backed database

use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

use quarry_db::repos::user::NewUser;
use quarry_db::service::{QuarryService, ServiceSettings};
use quarry_db::updates::data_source::DataSourceUpdateBuilder;

fn settings() -> ServiceSettings {
    ServiceSettings {
        password_cost: quarry_core::password::MIN_COST,
        ..ServiceSettings::default()
    }
}

async fn test_service() -> QuarryService {
    QuarryService::new_local(":memory:", settings()).await.unwrap()
}

// ---------------------------------------------------------------------------
// Organizations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bootstrap_runs_once() {
    let svc = test_service().await;
    let first = svc.bootstrap_organization("Default", "default").await.unwrap();
    assert!(first.is_some());
    let second = svc.bootstrap_organization("Other", "other").await.unwrap();
    assert!(second.is_none());
    assert_eq!(svc.list_organizations().await.unwrap().len(), 1);
}

#[tokio::test]
async fn groups_are_scoped_per_organization() {
    let svc = test_service().await;
    let default = svc.create_organization("Default", "default").await.unwrap();
    let other = svc.create_organization("Other", "other").await.unwrap();

    svc.create_group(other.id, "analysts", &["view_query".to_string()])
        .await
        .unwrap();

    assert_eq!(svc.list_groups(Some(default.id)).await.unwrap().len(), 2);
    assert_eq!(svc.list_groups(Some(other.id)).await.unwrap().len(), 3);
    assert_eq!(svc.list_groups(None).await.unwrap().len(), 5);
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn onboard_then_promote_user() {
    let svc = test_service().await;
    let org = svc.create_organization("Default", "default").await.unwrap();
    let default = svc.default_group(org.id).await.unwrap();
    let admin = svc.admin_group(org.id).await.unwrap();

    let user = svc
        .create_user(NewUser {
            org_id: org.id,
            name: "Fred Foobar".into(),
            email: "foobar@example.com".into(),
            password_hash: Some(svc.hash_password("secret").unwrap()),
            groups: vec![default.id],
            invite_token: None,
        })
        .await
        .unwrap();
    assert!(user.verify_password("secret"));

    let mut groups = user.groups.clone();
    groups.push(admin.id);
    svc.set_user_groups(user.id, &groups).await.unwrap();

    let reloaded = svc
        .get_user_by_email("foobar@example.com", Some(org.id))
        .await
        .unwrap()
        .unwrap();
    assert!(reloaded.is_member_of(admin.id));
    assert!(reloaded.is_member_of(default.id));
}

#[tokio::test]
async fn same_email_allowed_in_different_organizations() {
    let svc = test_service().await;
    let first = svc.create_organization("Default", "default").await.unwrap();
    let second = svc.create_organization("Other", "other").await.unwrap();

    for org_id in [first.id, second.id] {
        svc.create_user(NewUser {
            org_id,
            name: "Fred Foobar".into(),
            email: "foobar@example.com".into(),
            ..NewUser::default()
        })
        .await
        .unwrap();
    }

    let deleted = svc
        .delete_users_by_email("foobar@example.com", Some(second.id))
        .await
        .unwrap();
    assert_eq!(deleted, 1);
    assert_eq!(svc.list_users(None).await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Data sources
// ---------------------------------------------------------------------------

#[tokio::test]
async fn data_source_lifecycle_persists_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quarry.db");
    let path = path.to_string_lossy();

    let ds_id = {
        let svc = QuarryService::new_local(&path, settings()).await.unwrap();
        let org = svc.create_organization("Default", "default").await.unwrap();
        let group = svc.default_group(org.id).await.unwrap();
        let options = json!({"dbpath": "/tmp/test.db"}).as_object().cloned().unwrap();
        svc.create_data_source(org.id, "test1", "sqlite", &options, group.id)
            .await
            .unwrap()
            .id
    };

    let svc = QuarryService::new_local(&path, settings()).await.unwrap();
    let update = DataSourceUpdateBuilder::new().name("test2").build();
    let updated = svc.update_data_source(ds_id, &update).await.unwrap();
    assert_eq!(updated.name, "test2");
    assert_eq!(updated.options["dbpath"], "/tmp/test.db");

    svc.delete_data_source(ds_id).await.unwrap();
    assert!(svc.list_data_sources(None).await.unwrap().is_empty());
    assert_eq!(svc.db().count_rows("data_source_groups").await.unwrap(), 0);
}
