//! Query layer for the in-memory collection: sort strategies and
//! text search over item fields.

pub mod search;
pub mod sorting;

#[cfg(test)]
mod tests;

pub use search::matches_query;
pub use sorting::{SortKind, SortOrder, compare_items, sort_items};
