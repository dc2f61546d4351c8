//! Filter state types.

use serde::{Deserialize, Serialize};

/// Text query plus the two facet constraints.
///
/// `None` on a facet means "no constraint". Empty strings are normalized to
/// `None` by the setters, since the empty option stands for "All".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text name query, matched case-insensitively after trimming.
    #[serde(default)]
    pub query: String,

    /// Required location, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Required industry, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

impl FilterState {
    /// Filter state with only a query set.
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Set the location facet. Empty means unset.
    pub fn set_location(&mut self, location: Option<String>) {
        self.location = normalize_facet(location);
    }

    /// Set the industry facet. Empty means unset.
    pub fn set_industry(&mut self, industry: Option<String>) {
        self.industry = normalize_facet(industry);
    }
}

fn normalize_facet(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
