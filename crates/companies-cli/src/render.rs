//! Text rendering of view snapshots.

use unicode_segmentation::UnicodeSegmentation;

use companies_core::ViewOptions;
use companies_engine::ViewSnapshot;

/// Widest name shown on a card, in graphemes.
pub const CARD_WIDTH: usize = 40;

const ALL_LOCATIONS: &str = "All Locations";
const ALL_INDUSTRIES: &str = "All Industries";

/// Render one frame: controls, result count, cards and pager.
pub fn render_snapshot(snapshot: &ViewSnapshot) -> String {
    if snapshot.loading {
        return "Loading companies...\n".to_string();
    }

    let filter = &snapshot.filter;
    let mut out = format!(
        "Search: \"{}\" | Location: {} | Industry: {}\n",
        filter.query,
        filter.location.as_deref().unwrap_or(ALL_LOCATIONS),
        filter.industry.as_deref().unwrap_or(ALL_INDUSTRIES),
    );
    out.push_str(&format!(
        "Sort: {} | Per page: {}\n",
        snapshot.sort.label(),
        snapshot.page_size
    ));
    out.push_str(&format!(
        "Showing {} of {} results\n\n",
        snapshot.page_items.len(),
        snapshot.match_count
    ));

    if let Some(error) = &snapshot.error {
        out.push_str(&format!("Error: {}\n", error));
        return out;
    }

    if snapshot.is_empty() {
        out.push_str("No companies found.\n");
    }
    for record in &snapshot.page_items {
        out.push_str(&format!(
            "  {}\n    Location: {}\n    Industry: {}\n",
            truncate(&record.name, CARD_WIDTH),
            record.location,
            record.industry
        ));
    }

    out.push_str(&format!(
        "\n{}  Page {} of {}  {}\n",
        if snapshot.has_prev { "[Prev]" } else { " Prev " },
        snapshot.current_page,
        snapshot.total_pages,
        if snapshot.has_next { "[Next]" } else { " Next " },
    ));
    out
}

/// Render the option lists offered by the session.
pub fn render_options(options: &ViewOptions) -> String {
    let sort_keys: Vec<String> = options
        .sort_keys
        .iter()
        .map(|k| format!("{} ({})", k.id(), k.label()))
        .collect();
    let page_sizes: Vec<String> = options.page_sizes.iter().map(|s| s.to_string()).collect();

    [
        format!("Locations:  {}", options.locations.join(", ")),
        format!("Industries: {}", options.industries.join(", ")),
        format!("Sort keys:  {}", sort_keys.join(", ")),
        format!(
            "Page sizes: {} (default {})",
            page_sizes.join(", "),
            options.default_page_size
        ),
    ]
    .iter()
    .map(|line| format!("{}\n", line))
    .collect()
}

/// Cut `text` to at most `width` graphemes, marking the cut with an ellipsis.
fn truncate(text: &str, width: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= width {
        return text.to_string();
    }
    let mut cut: String = graphemes[..width.saturating_sub(1)].concat();
    cut.push('…');
    cut
}
