//! Page state types.

use serde::{Deserialize, Serialize};

use crate::options::DEFAULT_PAGE_SIZE;

/// Requested page size and page number, both 1-based and positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub page_size: usize,
    pub page_number: usize,
}

impl PageState {
    /// First page at the given size.
    pub fn first(page_size: usize) -> Self {
        Self {
            page_size,
            page_number: 1,
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}
