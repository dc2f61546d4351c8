//! Presentation options.
//!
//! The facet lists are fixed configuration, not derived from the loaded data.

use serde::{Deserialize, Serialize};

use crate::sort::SortKey;

/// Location facet choices.
pub const DEFAULT_LOCATIONS: [&str; 5] = ["New York", "London", "Berlin", "Paris", "Tokyo"];

/// Industry facet choices.
pub const DEFAULT_INDUSTRIES: [&str; 5] = [
    "Technology",
    "Finance",
    "Healthcare",
    "Education",
    "Manufacturing",
];

/// Page size choices.
pub const DEFAULT_PAGE_SIZES: [usize; 3] = [6, 9, 12];

/// Page size at session start.
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Option lists offered to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    pub locations: Vec<String>,
    pub industries: Vec<String>,
    pub sort_keys: Vec<SortKey>,
    pub page_sizes: Vec<usize>,
    pub default_page_size: usize,
}

impl ViewOptions {
    /// Check whether a page size is one of the offered choices.
    pub fn allows_page_size(&self, size: usize) -> bool {
        size > 0 && self.page_sizes.contains(&size)
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            locations: DEFAULT_LOCATIONS.iter().map(|s| s.to_string()).collect(),
            industries: DEFAULT_INDUSTRIES.iter().map(|s| s.to_string()).collect(),
            sort_keys: SortKey::ALL.to_vec(),
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ViewOptions::default();
        assert_eq!(options.locations.len(), 5);
        assert_eq!(options.industries[0], "Technology");
        assert_eq!(options.page_sizes, vec![6, 9, 12]);
        assert!(options.allows_page_size(options.default_page_size));
    }

    #[test]
    fn test_allows_page_size() {
        let options = ViewOptions::default();
        assert!(options.allows_page_size(12));
        assert!(!options.allows_page_size(0));
        assert!(!options.allows_page_size(10));
    }
}
