//! Swappable total orders over collection items.
//!
//! Each [`SortKind`] is a named comparison strategy; the comparison
//! itself is a single three-way function dispatched by enum, so adding
//! a strategy extends one `match` instead of a class hierarchy.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use waxcrate_model::Item;

/// Fields available for sorting, with their display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKind {
    /// Case-insensitive by artist name.
    Artist,
    /// Case-insensitive by title.
    Title,
    /// Numeric by release year, oldest first.
    Year,
    /// By Goldmine grade rank, best first.
    Condition,
    /// Case-insensitive by media-type display name.
    Format,
}

/// Sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortKind {
    /// Every strategy, in the order the UI picker lists them.
    pub fn all() -> &'static [SortKind] {
        use SortKind::*;
        &[Artist, Title, Year, Condition, Format]
    }

    /// Name shown in the sort picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKind::Artist => "Artist",
            SortKind::Title => "Title",
            SortKind::Year => "Year",
            SortKind::Condition => "Condition",
            SortKind::Format => "Format",
        }
    }
}

impl Default for SortKind {
    fn default() -> Self {
        // The GUI's strategy list starts at Artist.
        SortKind::Artist
    }
}

impl std::fmt::Display for SortKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Compare two items using the provided sort field and order.
///
/// Every field yields a total order; ties are left to the caller's
/// stable sort, which preserves the original relative order.
pub fn compare_items(
    a: &Item,
    b: &Item,
    sort_by: SortKind,
    sort_order: SortOrder,
) -> Ordering {
    let ord = match sort_by {
        SortKind::Artist => {
            let a_artist = a.artist().to_lowercase();
            let b_artist = b.artist().to_lowercase();
            a_artist.cmp(&b_artist)
        }
        SortKind::Title => {
            let a_title = a.title().to_lowercase();
            let b_title = b.title().to_lowercase();
            a_title.cmp(&b_title)
        }
        SortKind::Year => a.year().cmp(&b.year()),
        SortKind::Condition => {
            a.condition().rank().cmp(&b.condition().rank())
        }
        SortKind::Format => {
            let a_format = a.media_type().to_lowercase();
            let b_format = b.media_type().to_lowercase();
            a_format.cmp(&b_format)
        }
    };

    if sort_order == SortOrder::Descending {
        ord.reverse()
    } else {
        ord
    }
}

/// Sort the item slice in place, ascending, with the given strategy.
///
/// Stable: items that compare equal keep their relative order. Empty
/// and single-element slices are valid fixed points.
pub fn sort_items(items: &mut [Item], sort_by: SortKind) {
    items.sort_by(|a, b| {
        compare_items(a, b, sort_by, SortOrder::Ascending)
    });
}

/// Sort the item slice in place with an explicit order.
pub fn sort_items_ordered(
    items: &mut [Item],
    sort_by: SortKind,
    sort_order: SortOrder,
) {
    items.sort_by(|a, b| compare_items(a, b, sort_by, sort_order));
}
