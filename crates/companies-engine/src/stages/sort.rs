//! Sort stage.

use companies_core::{Record, SortKey};

use super::collate::compare_names;

/// A new sequence ordered by `key`. The input is left untouched.
///
/// Both directions use a stable sort, and descending is the reversed
/// ascending comparator, so equal names keep their input order either way.
pub fn sort(subset: &[Record], key: SortKey) -> Vec<Record> {
    let mut ordered = subset.to_vec();
    match key {
        SortKey::NameAsc => ordered.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::NameDesc => ordered.sort_by(|a, b| compare_names(&a.name, &b.name).reverse()),
    }
    ordered
}
