//! Filter stage.

use companies_core::{FilterState, Record};

/// Records matching every active constraint, in their original order.
///
/// The name query is trimmed and matched as a case-insensitive substring.
/// Facets match by exact, case-sensitive equality.
pub fn filter(records: &[Record], state: &FilterState) -> Vec<Record> {
    let needle = needle(state);
    records
        .iter()
        .filter(|record| matches_with(record, &needle, state))
        .cloned()
        .collect()
}

fn needle(state: &FilterState) -> String {
    state.query.trim().to_lowercase()
}

fn matches_with(record: &Record, needle: &str, state: &FilterState) -> bool {
    let name_ok = needle.is_empty() || record.name.to_lowercase().contains(needle);
    let location_ok = facet_matches(state.location.as_deref(), &record.location);
    let industry_ok = facet_matches(state.industry.as_deref(), &record.industry);
    name_ok && location_ok && industry_ok
}

fn facet_matches(wanted: Option<&str>, actual: &str) -> bool {
    wanted.map_or(true, |w| w == actual)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Record> {
        vec![
            Record::new("Acme Corp", "Berlin", "Technology"),
            Record::new("Globex", "London", "Finance"),
            Record::new("acme labs", "London", "Healthcare"),
            Record::new("Initech", "Berlin", "Technology"),
        ]
    }

    fn names(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_identity_filter() {
        let all = records();
        assert_eq!(filter(&all, &FilterState::default()), all);
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let state = FilterState::with_query("  ACME ");
        assert_eq!(names(&filter(&records(), &state)), vec!["Acme Corp", "acme labs"]);
    }

    #[test]
    fn test_facets_are_exact() {
        let mut state = FilterState::default();
        state.set_location(Some("London".to_string()));
        assert_eq!(names(&filter(&records(), &state)), vec!["Globex", "acme labs"]);

        state.set_location(Some("london".to_string()));
        assert!(filter(&records(), &state).is_empty());
    }

    #[test]
    fn test_all_constraints_combine() {
        let mut state = FilterState::with_query("acme");
        state.set_location(Some("Berlin".to_string()));
        state.set_industry(Some("Technology".to_string()));
        assert_eq!(names(&filter(&records(), &state)), vec!["Acme Corp"]);

        state.set_industry(Some("Finance".to_string()));
        assert!(filter(&records(), &state).is_empty());
    }

    #[test]
    fn test_unknown_facet_yields_empty() {
        let mut state = FilterState::default();
        state.set_industry(Some("Aerospace".to_string()));
        assert!(filter(&records(), &state).is_empty());
    }

    #[test]
    fn test_degenerate_records() {
        let input = vec![Record::new("", "", ""), Record::new("", "", "")];
        assert_eq!(filter(&input, &FilterState::default()).len(), 2);
        assert!(filter(&input, &FilterState::with_query("x")).is_empty());
        assert!(filter(&[], &FilterState::with_query("x")).is_empty());
    }
}
