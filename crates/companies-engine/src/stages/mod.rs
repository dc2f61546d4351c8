//! Pure derivation stages.
//!
//! Records flow one way through these functions:
//!
//! ```text
//! RecordStore ──▶ filter ──▶ sort ──▶ paginate ──▶ ViewSnapshot
//! ```
//!
//! None of them hold state or mutate their input. The coordinator decides
//! when each one runs.

mod collate;
mod filter;
mod paginate;
mod sort;

pub use collate::compare_names;
pub use filter::filter;
pub use paginate::{paginate, total_pages, Page};
pub use sort::sort;
