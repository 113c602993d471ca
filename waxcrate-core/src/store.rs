//! The in-memory collection store.
//!
//! The store is the sole owner of the item sequence and of the active
//! sort strategy. The sequence is always held in sorted order, never
//! insertion order; every mutation either re-sorts or provably leaves
//! the order intact. All operations run synchronously on the caller's
//! thread — there is no internal locking.

use tracing::debug;
use waxcrate_model::{Item, ItemID};

use crate::error::{Result, StoreError};
use crate::query::search;
use crate::query::sorting::{self, SortKind};

/// Owns the working set of items and the currently active strategy.
#[derive(Debug, Clone, Default)]
pub struct CollectionStore {
    items: Vec<Item>,
    strategy: SortKind,
}

impl CollectionStore {
    /// Empty store sorted by artist (the default strategy).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing items; sorts them immediately so the
    /// invariant holds from the start.
    pub fn with_items(items: Vec<Item>, strategy: SortKind) -> Self {
        let mut store = Self { items, strategy };
        store.resort();
        store
    }

    /// Append an item and re-sort with the active strategy.
    /// Returns the new item's ID so the UI can re-select its row.
    pub fn add(&mut self, item: Item) -> ItemID {
        let id = item.id();
        debug!(item = %item, strategy = %self.strategy, "adding item");
        self.items.push(item);
        self.resort();
        id
    }

    /// Remove the item at `index`.
    ///
    /// Fails with [`StoreError::IndexOutOfRange`] and leaves the
    /// sequence untouched when `index` is not a valid position. No
    /// re-sort happens: order among the survivors is unaffected.
    pub fn remove(&mut self, index: usize) -> Result<Item> {
        if index >= self.items.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let item = self.items.remove(index);
        debug!(item = %item, "removed item");
        Ok(item)
    }

    /// Edit the item at `index` in place, then re-sort.
    ///
    /// The edit is identity-preserving: the closure mutates the existing
    /// item (same [`ItemID`], same variant) and only its fields change.
    pub fn update<F>(&mut self, index: usize, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Item),
    {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;
        edit(item);
        debug!(item = %item, "updated item");
        self.resort();
        Ok(())
    }

    /// Swap the active strategy and immediately re-sort the sequence.
    pub fn set_strategy(&mut self, strategy: SortKind) {
        debug!(strategy = %strategy, "switching sort strategy");
        self.strategy = strategy;
        self.resort();
    }

    pub fn strategy(&self) -> SortKind {
        self.strategy
    }

    /// Lazy, restartable iterator over items matching the search text,
    /// in current sort order. Does not mutate the store; an empty query
    /// yields every item.
    pub fn find<'a>(
        &'a self,
        query: &str,
    ) -> impl Iterator<Item = &'a Item> + 'a {
        let needle = query.trim().to_lowercase();
        self.items.iter().filter(move |item| {
            needle.is_empty() || search::matches_lowercase(item, &needle)
        })
    }

    /// Items in current sort order, for table rendering.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Position of the item with the given ID in the current order.
    pub fn position_of(&self, id: ItemID) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn resort(&mut self) {
        sorting::sort_items(&mut self.items, self.strategy);
    }
}
