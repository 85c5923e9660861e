//! Service layer holding the database handle and the settings repositories
//! need at mutation time.
//!
//! All repo methods are implemented as `impl QuarryService` blocks in
//! [`crate::repos`].

use quarry_config::QuarryConfig;

use crate::QuarryDb;
use crate::error::DatabaseError;

/// Values injected from configuration at startup.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// Permissions for the builtin `default` group and for new groups
    /// created without an explicit list.
    pub default_permissions: Vec<String>,
    /// Permissions for the builtin `admin` group.
    pub admin_permissions: Vec<String>,
    /// bcrypt cost for new password hashes.
    pub password_cost: u32,
}

impl ServiceSettings {
    #[must_use]
    pub fn from_config(config: &QuarryConfig) -> Self {
        Self {
            default_permissions: config.permissions.default.clone(),
            admin_permissions: config.permissions.admin.clone(),
            password_cost: config.security.password_cost,
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self::from_config(&QuarryConfig::default())
    }
}

/// Repository entry point for every Quarry entity.
pub struct QuarryService {
    db: QuarryDb,
    settings: ServiceSettings,
}

impl QuarryService {
    /// Open a local database and wrap it.
    ///
    /// # Arguments
    ///
    /// * `db_path` — Path to the libSQL database file, or `":memory:"` for tests.
    /// * `settings` — Permission sets and password cost.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str, settings: ServiceSettings) -> Result<Self, DatabaseError> {
        let db = QuarryDb::open_local(db_path).await?;
        Ok(Self { db, settings })
    }

    /// Create from an existing `QuarryDb` (for testing).
    #[must_use]
    pub const fn from_db(db: QuarryDb, settings: ServiceSettings) -> Self {
        Self { db, settings }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &QuarryDb {
        &self.db
    }

    #[must_use]
    pub const fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    /// The permission set used when none is supplied.
    #[must_use]
    pub fn default_permissions(&self) -> &[String] {
        &self.settings.default_permissions
    }

    /// Hash a plaintext password with the configured cost.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Core` if hashing fails.
    pub fn hash_password(&self, plain: &str) -> Result<String, DatabaseError> {
        Ok(quarry_core::password::hash_password(
            plain,
            self.settings.password_cost,
        )?)
    }
}
