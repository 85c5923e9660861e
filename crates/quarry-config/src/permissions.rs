//! Permission sets given to builtin and new groups.

use serde::{Deserialize, Serialize};

/// Permissions granted to the builtin `default` group and to new groups
/// created without `--permissions`.
pub const DEFAULT_PERMISSIONS: &[&str] = &[
    "create_dashboard",
    "create_query",
    "edit_dashboard",
    "edit_query",
    "view_query",
    "view_source",
    "execute_query",
    "list_users",
    "schedule_query",
    "list_dashboards",
    "list_alerts",
    "list_data_sources",
];

/// Permissions granted to the builtin `admin` group.
pub const ADMIN_PERMISSIONS: &[&str] = &["admin", "super_admin"];

fn to_owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|p| (*p).to_string()).collect()
}

fn default_permissions() -> Vec<String> {
    to_owned(DEFAULT_PERMISSIONS)
}

fn admin_permissions() -> Vec<String> {
    to_owned(ADMIN_PERMISSIONS)
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PermissionsConfig {
    #[serde(default = "default_permissions")]
    pub default: Vec<String>,

    #[serde(default = "admin_permissions")]
    pub admin: Vec<String>,
}

impl Default for PermissionsConfig {
    fn default() -> Self {
        Self {
            default: default_permissions(),
            admin: admin_permissions(),
        }
    }
}
