//! Text filtering over collection items.
//!
//! Matching is a case-insensitive substring check across the fields the
//! table shows: title, artist, media-type display name, and the year
//! rendered as a decimal string.

use waxcrate_model::Item;

/// Whether `item` matches the raw search text.
///
/// An empty or whitespace-only query matches everything (clearing the
/// search box restores the full table).
pub fn matches_query(item: &Item, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    matches_lowercase(item, &needle)
}

/// Substring check against an already-lowercased, non-empty needle.
/// Split out so iterators can lowercase the query once, not per item.
pub(crate) fn matches_lowercase(item: &Item, needle: &str) -> bool {
    item.title().to_lowercase().contains(needle)
        || item.artist().to_lowercase().contains(needle)
        || item.media_type().to_lowercase().contains(needle)
        || item.year().to_string().contains(needle)
}
