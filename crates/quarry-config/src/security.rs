//! Password hashing settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_password_cost() -> u32 {
    12
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SecurityConfig {
    /// bcrypt cost factor for new password hashes.
    #[serde(default = "default_password_cost")]
    pub password_cost: u32,
}

impl SecurityConfig {
    /// Reject costs bcrypt would refuse at hash time.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when the cost is outside `4..=31`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (4..=31).contains(&self.password_cost) {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "security.password_cost".into(),
                reason: format!("{} is outside 4..=31", self.password_cost),
            })
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            password_cost: default_password_cost(),
        }
    }
}
