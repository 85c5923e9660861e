//! Invitation link settings.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InvitationsConfig {
    /// Public URL of the web application, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for InvitationsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}
