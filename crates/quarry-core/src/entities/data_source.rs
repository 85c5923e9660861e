use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Connector options as a JSON object. Keys iterate in sorted order.
pub type DataSourceOptions = Map<String, Value>;

/// A configured connection to an external data store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataSource {
    pub id: i64,
    pub org_id: i64,
    /// Unique per organization.
    pub name: String,
    /// Registered connector type, e.g. `pg` or `sqlite`.
    #[serde(rename = "type")]
    pub connector_type: String,
    pub options: DataSourceOptions,
    pub created_at: DateTime<Utc>,
}
