//! Sort key types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DirectoryError;

/// Ordering applied to the filtered records.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Ascending by name.
    #[default]
    NameAsc,
    /// Descending by name.
    NameDesc,
}

impl SortKey {
    /// All sort keys in presentation order.
    pub const ALL: [SortKey; 2] = [SortKey::NameAsc, SortKey::NameDesc];

    /// Stable identifier, e.g. `name-asc`.
    pub fn id(self) -> &'static str {
        match self {
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
        }
    }

    /// Human-readable label for the sort control.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::NameAsc => "Name (A–Z)",
            SortKey::NameDesc => "Name (Z–A)",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SortKey {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.id() == s)
            .ok_or_else(|| DirectoryError::InvalidArgument(format!("unknown sort key '{}'", s)))
    }
}
