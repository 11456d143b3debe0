//! Client-side table search.
//!
//! The backend honors no query parameters, so the search box filters the
//! rows already fetched: case-insensitive substring over the text a page
//! chooses to expose per row.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Rows whose searchable text contains `query`, original order preserved.
/// An empty or whitespace query keeps everything.
pub fn filter_rows<Row: Clone>(
    rows: &[Row],
    query: &str,
    text: impl Fn(&Row) -> String,
) -> Vec<Row> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter().filter(|row| text(row).to_lowercase().contains(&needle)).cloned().collect()
}
