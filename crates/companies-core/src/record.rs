//! Record type for directory entries.

use serde::{Deserialize, Serialize};

/// A single organization in the directory.
///
/// Records are immutable once loaded. Attributes beyond the three the
/// pipeline reads are kept in `extra` and passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Display name, searched and sorted on.
    pub name: String,

    /// Location facet value.
    pub location: String,

    /// Industry facet value.
    pub industry: String,

    /// Any other attributes from the source payload.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    /// Create a new record with no extra attributes.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        industry: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            industry: industry.into(),
            extra: serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_keeps_extra_attributes() {
        let value = json!({
            "name": "Acme",
            "location": "Berlin",
            "industry": "Finance",
            "employees": 120
        });

        let record: Record = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(record.name, "Acme");
        assert_eq!(record.extra.get("employees"), Some(&json!(120)));
        assert_eq!(serde_json::to_value(&record).unwrap(), value);
    }

    #[test]
    fn test_record_requires_string_name() {
        let value = json!({ "name": 7, "location": "Paris", "industry": "Finance" });
        assert!(serde_json::from_value::<Record>(value).is_err());

        let value = json!({ "location": "Paris", "industry": "Finance" });
        assert!(serde_json::from_value::<Record>(value).is_err());
    }

    #[test]
    fn test_record_allows_empty_fields() {
        let record = Record::new("", "", "");
        assert!(record.name.is_empty());
        assert!(record.extra.is_empty());
    }
}
