//! Default organization used when a command gets no `--org`.

use serde::{Deserialize, Serialize};

fn default_slug() -> String {
    "default".to_string()
}

fn default_name() -> String {
    "Default".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrganizationConfig {
    /// Slug resolved when `--org` is omitted.
    #[serde(default = "default_slug")]
    pub default_slug: String,

    /// Display name given to the default organization when it is bootstrapped.
    #[serde(default = "default_name")]
    pub default_name: String,
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            default_slug: default_slug(),
            default_name: default_name(),
        }
    }
}
