use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::GroupType;

/// Name of the builtin group holding administrators.
pub const ADMIN_GROUP_NAME: &str = "admin";

/// Name of the builtin group every new user joins.
pub const DEFAULT_GROUP_NAME: &str = "default";

/// A named permission set inside one organization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    pub id: i64,
    pub org_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub group_type: GroupType,
    /// Kept in the order it was supplied.
    pub permissions: Vec<String>,
    pub created_at: DateTime<Utc>,
}
