use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Settings key holding the Google Apps domain allow-list.
pub const SETTING_GOOGLE_APPS_DOMAINS: &str = "google_apps_domains";

/// A tenant owning groups, users, and data sources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    /// Unique across all organizations.
    pub slug: String,
    pub settings: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

impl Organization {
    /// Email domains allowed to self-register. Empty when unset.
    #[must_use]
    pub fn google_apps_domains(&self) -> Vec<String> {
        self.settings
            .get(SETTING_GOOGLE_APPS_DOMAINS)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Replace the allow-list wholesale.
    pub fn set_google_apps_domains(&mut self, domains: Vec<String>) {
        self.settings
            .insert(SETTING_GOOGLE_APPS_DOMAINS.to_string(), Value::from(domains));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org() -> Organization {
        Organization {
            id: 1,
            name: "Default".into(),
            slug: "default".into(),
            settings: Map::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn domains_default_to_empty() {
        assert!(org().google_apps_domains().is_empty());
    }

    #[test]
    fn set_replaces_domains() {
        let mut org = org();
        org.set_google_apps_domains(vec!["a.org".into(), "b.org".into()]);
        org.set_google_apps_domains(vec!["example.com".into()]);
        assert_eq!(org.google_apps_domains(), vec!["example.com".to_string()]);
    }

    #[test]
    fn non_string_entries_are_skipped() {
        let mut org = org();
        org.settings.insert(
            SETTING_GOOGLE_APPS_DOMAINS.into(),
            serde_json::json!(["example.org", 7, null]),
        );
        assert_eq!(org.google_apps_domains(), vec!["example.org".to_string()]);
    }
}
