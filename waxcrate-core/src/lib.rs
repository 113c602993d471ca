//! # Waxcrate Core
//!
//! Core library for the Waxcrate collection manager: an in-memory
//! catalogue of a personal music media collection (vinyl records, CDs,
//! cassettes) with swappable sort strategies and text search.
//!
//! ## Overview
//!
//! - **Collection Store**: sole owner of the item sequence, always held
//!   in sorted order; add, remove, edit-in-place, and search
//! - **Sort Strategies**: five named total orders (artist, title, year,
//!   condition, format), swappable at runtime
//! - **Search**: lazy case-insensitive substring filtering across the
//!   fields the table shows
//!
//! The data model itself lives in `waxcrate-model`; the GUI shell and
//! its dialogs are external collaborators that drive this crate from
//! the event-handling thread. Nothing here persists across runs, blocks
//! on I/O, or needs synchronization.
//!
//! ## Examples
//!
//! ```
//! use waxcrate_core::{CollectionStore, SortKind};
//! use waxcrate_model::{Condition, Item, ItemFactory, RecordSize, RecordSpeed};
//!
//! let mut store = CollectionStore::new();
//! store.add(Item::Record(ItemFactory::record(
//!     "Abbey Road",
//!     "The Beatles",
//!     1969,
//!     Condition::Excellent,
//!     RecordSize::Twelve,
//!     RecordSpeed::Rpm33,
//! )));
//!
//! store.set_strategy(SortKind::Year);
//! let hits: Vec<_> = store.find("beatles").collect();
//! assert_eq!(hits.len(), 1);
//! ```
#![allow(missing_docs)]

pub mod demo;
pub mod error;
pub mod query;
pub mod store;

pub use error::{Result, StoreError};
pub use query::search::matches_query;
pub use query::sorting::{
    SortKind, SortOrder, compare_items, sort_items, sort_items_ordered,
};
pub use store::CollectionStore;
