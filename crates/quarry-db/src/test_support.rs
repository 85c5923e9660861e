//! Shared test utilities for quarry-db unit tests.

use quarry_core::entities::Organization;
use quarry_core::password::MIN_COST;

use crate::QuarryDb;
use crate::service::{QuarryService, ServiceSettings};

/// Settings with the cheapest bcrypt cost so tests stay fast.
pub fn fast_settings() -> ServiceSettings {
    ServiceSettings {
        password_cost: MIN_COST,
        ..ServiceSettings::default()
    }
}

/// In-memory service with no rows.
pub async fn test_service() -> QuarryService {
    let db = QuarryDb::open_local(":memory:").await.unwrap();
    QuarryService::from_db(db, fast_settings())
}

/// In-memory service holding the `default` organization and its builtin groups.
pub async fn test_service_with_org() -> (QuarryService, Organization) {
    let svc = test_service().await;
    let org = svc
        .create_organization("Default", "default")
        .await
        .unwrap();
    (svc, org)
}
