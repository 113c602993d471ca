//! Seeded demo collection for manual smoke runs and doc examples.

use waxcrate_model::{
    Condition, Item, ItemFactory, RecordSize, RecordSpeed, TapeType,
};

use crate::store::CollectionStore;

/// A small collection spanning all three formats, matching the sample
/// data the manual test harness used.
pub fn sample_collection() -> CollectionStore {
    let items = vec![
        Item::Record(ItemFactory::record(
            "Abbey Road",
            "The Beatles",
            1969,
            Condition::Excellent,
            RecordSize::Twelve,
            RecordSpeed::Rpm33,
        )),
        Item::Cd(ItemFactory::cd(
            "Thriller",
            "Michael Jackson",
            1982,
            Condition::Mint,
            9,
            true,
        )),
        Item::Cassette(ItemFactory::cassette(
            "Nevermind",
            "Nirvana",
            1991,
            Condition::Good,
            TapeType::Chrome,
            60,
        )),
        Item::Record(ItemFactory::record(
            "Pet Sounds",
            "The Beach Boys",
            1966,
            Condition::VeryGoodPlus,
            RecordSize::Twelve,
            RecordSpeed::Rpm33,
        )),
        Item::Cd(ItemFactory::cd(
            "OK Computer",
            "Radiohead",
            1997,
            Condition::NearMint,
            12,
            false,
        )),
    ];
    CollectionStore::with_items(items, Default::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_collection_is_sorted_by_artist() {
        let store = sample_collection();
        assert_eq!(store.len(), 5);
        let artists: Vec<&str> =
            store.items().iter().map(|i| i.artist()).collect();
        assert_eq!(
            artists,
            vec![
                "Michael Jackson",
                "Nirvana",
                "Radiohead",
                "The Beach Boys",
                "The Beatles",
            ]
        );
    }
}
