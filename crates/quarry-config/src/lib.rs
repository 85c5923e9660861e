//! # quarry-config
//!
//! Layered configuration loading for Quarry using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`QUARRY_*` prefix, `__` as separator)
//! 2. Working-directory `quarry.toml`
//! 3. User-level `~/.config/quarry/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `QUARRY_DATABASE__PATH` -> `database.path`,
//! `QUARRY_SECURITY__PASSWORD_COST` -> `security.password_cost`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use quarry_config::QuarryConfig;
//!
//! let config = QuarryConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.database.path);
//! ```

mod database;
mod error;
mod invitations;
mod organization;
mod permissions;
mod security;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use invitations::InvitationsConfig;
pub use organization::OrganizationConfig;
pub use permissions::{ADMIN_PERMISSIONS, DEFAULT_PERMISSIONS, PermissionsConfig};
pub use security::SecurityConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuarryConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub organization: OrganizationConfig,
    #[serde(default)]
    pub permissions: PermissionsConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    #[serde(default)]
    pub invitations: InvitationsConfig,
}

impl QuarryConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT read `.env` -- use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can extract from it directly or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Working-directory config
        let local_path = PathBuf::from("quarry.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("QUARRY_").split("__"))
    }

    /// Check values the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.security.validate()?;
        if self.organization.default_slug.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "organization.default_slug".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("quarry").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = QuarryConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.database.path, "quarry.db");
        assert_eq!(config.organization.default_slug, "default");
        assert_eq!(config.organization.default_name, "Default");
        assert_eq!(config.invitations.base_url, "http://localhost:5000");
    }

    #[test]
    fn empty_default_slug_is_rejected() {
        let mut config = QuarryConfig::default();
        config.organization.default_slug = "  ".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("organization.default_slug"));
    }
}
