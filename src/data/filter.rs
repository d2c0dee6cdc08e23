use super::{Filter, StockEntry};

/// Entries passing both the chip filter and the search text, in source order
///
/// Search is a case-insensitive substring match on symbol or company name;
/// blank or whitespace-only text places no constraint.
pub fn apply<'a, I>(entries: I, filter: Filter, search: &str) -> Vec<&'a StockEntry>
where
    I: IntoIterator<Item = &'a StockEntry>,
{
    let needle = search.trim().to_lowercase();
    entries
        .into_iter()
        .filter(|e| filter.matches(e.classification))
        .filter(|e| needle.is_empty() || e.matches_search(&needle))
        .collect()
}
