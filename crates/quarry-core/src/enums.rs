//! Enums stored as text columns.
//!
//! All enums use `snake_case` serialization so the SQL value and the JSON
//! value are the same string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a group was created with its organization or by an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupType {
    /// `admin` and `default`, created together with the organization.
    Builtin,
    Regular,
}

impl GroupType {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Builtin => "builtin",
            Self::Regular => "regular",
        }
    }
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
