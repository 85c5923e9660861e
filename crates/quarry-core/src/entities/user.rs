use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::password::verify_password;

/// An account inside one organization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub org_id: i64,
    pub name: String,
    /// Unique per organization.
    pub email: String,
    /// `None` means the user signs in through an external provider only.
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    /// Group ids in membership order.
    pub groups: Vec<i64>,
    #[serde(skip_serializing)]
    pub invite_token: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    #[must_use]
    pub fn verify_password(&self, plain: &str) -> bool {
        self.password_hash
            .as_deref()
            .is_some_and(|hash| verify_password(plain, hash))
    }

    #[must_use]
    pub fn is_member_of(&self, group_id: i64) -> bool {
        self.groups.contains(&group_id)
    }
}
