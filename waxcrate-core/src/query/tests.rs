//! Tests for sort strategy and search implementations

use crate::query::search::matches_query;
use crate::query::sorting::{
    SortKind, SortOrder, compare_items, sort_items, sort_items_ordered,
};
use waxcrate_model::{Condition, Item, ItemFactory, RecordSize, RecordSpeed, TapeType};

fn record(title: &str, artist: &str, year: u16, condition: Condition) -> Item {
    Item::Record(ItemFactory::record(
        title,
        artist,
        year,
        condition,
        RecordSize::Twelve,
        RecordSpeed::Rpm33,
    ))
}

fn cd(title: &str, artist: &str, year: u16) -> Item {
    Item::Cd(ItemFactory::cd(title, artist, year, Condition::NearMint, 10, false))
}

fn cassette(title: &str, artist: &str, year: u16) -> Item {
    Item::Cassette(ItemFactory::cassette(
        title,
        artist,
        year,
        Condition::VeryGood,
        TapeType::Normal,
        90,
    ))
}

#[test]
fn artist_sort_is_case_insensitive() {
    let mut items = vec![
        record("A", "Zappa", 1974, Condition::Excellent),
        record("B", "abba", 1976, Condition::Excellent),
        record("C", "Queen", 1975, Condition::Excellent),
    ];
    sort_items(&mut items, SortKind::Artist);
    let artists: Vec<&str> = items.iter().map(|i| i.artist()).collect();
    assert_eq!(artists, vec!["abba", "Queen", "Zappa"]);
}

#[test]
fn title_sort_is_case_insensitive() {
    let mut items = vec![
        record("zen Arcade", "X", 1984, Condition::Good),
        record("Aja", "Y", 1977, Condition::Good),
        record("Marquee Moon", "Z", 1977, Condition::Good),
    ];
    sort_items(&mut items, SortKind::Title);
    let titles: Vec<&str> = items.iter().map(|i| i.title()).collect();
    assert_eq!(titles, vec!["Aja", "Marquee Moon", "zen Arcade"]);
}

#[test]
fn year_sort_is_ascending() {
    let mut items = vec![
        record("A", "A", 1991, Condition::Good),
        record("B", "B", 1969, Condition::Good),
        record("C", "C", 1982, Condition::Good),
    ];
    sort_items(&mut items, SortKind::Year);
    let years: Vec<u16> = items.iter().map(|i| i.year()).collect();
    assert_eq!(years, vec![1969, 1982, 1991]);
}

#[test]
fn condition_sort_ranks_best_first() {
    let mut items = vec![
        record("A", "A", 1970, Condition::Good),
        record("B", "B", 1970, Condition::Mint),
        record("C", "C", 1970, Condition::Poor),
        record("D", "D", 1970, Condition::VeryGoodPlus),
    ];
    sort_items(&mut items, SortKind::Condition);
    let grades: Vec<&str> =
        items.iter().map(|i| i.condition().label()).collect();
    assert_eq!(grades, vec!["M", "VG+", "G", "P"]);
}

#[test]
fn format_sort_groups_by_display_name() {
    let mut items = vec![
        record("Vinyl", "A", 1970, Condition::Good),
        cassette("Tape", "B", 1985),
        cd("Disc", "C", 1999),
    ];
    sort_items(&mut items, SortKind::Format);
    let formats: Vec<&str> = items.iter().map(|i| i.media_type()).collect();
    // Case-insensitive lexical: cassette < cd < vinyl record.
    assert_eq!(formats, vec!["Cassette", "CD", "Vinyl Record"]);
}

#[test]
fn sorting_is_idempotent() {
    let mut items = vec![
        record("B", "B", 1982, Condition::Good),
        record("A", "A", 1969, Condition::Mint),
        record("C", "C", 1991, Condition::Poor),
    ];
    for kind in SortKind::all() {
        sort_items(&mut items, *kind);
        let once = items.clone();
        sort_items(&mut items, *kind);
        assert_eq!(items, once, "{kind} sort is not idempotent");
    }
}

#[test]
fn trivial_sequences_are_fixed_points() {
    let mut empty: Vec<Item> = vec![];
    sort_items(&mut empty, SortKind::Artist);
    assert!(empty.is_empty());

    let single = record("Solo", "Solo", 2001, Condition::Mint);
    let mut one = vec![single.clone()];
    sort_items(&mut one, SortKind::Year);
    assert_eq!(one, vec![single]);
}

#[test]
fn ties_keep_original_relative_order() {
    let first = record("First", "Same Artist", 1980, Condition::Good);
    let second = record("Second", "same artist", 1981, Condition::Good);
    let mut items = vec![first.clone(), second.clone()];
    sort_items(&mut items, SortKind::Artist);
    assert_eq!(items[0].id(), first.id());
    assert_eq!(items[1].id(), second.id());
}

#[test]
fn descending_order_reverses_the_comparison() {
    let older = record("A", "A", 1969, Condition::Good);
    let newer = record("B", "B", 1991, Condition::Good);
    assert_eq!(
        compare_items(&older, &newer, SortKind::Year, SortOrder::Ascending),
        std::cmp::Ordering::Less
    );
    assert_eq!(
        compare_items(&older, &newer, SortKind::Year, SortOrder::Descending),
        std::cmp::Ordering::Greater
    );

    let mut items = vec![older, newer];
    sort_items_ordered(&mut items, SortKind::Year, SortOrder::Descending);
    assert_eq!(items[0].year(), 1991);
}

#[test]
fn sort_kind_serializes_to_snake_case() {
    assert_eq!(
        serde_json::to_string(&SortKind::Condition).unwrap(),
        "\"condition\""
    );
    assert_eq!(
        serde_json::from_str::<SortKind>("\"format\"").unwrap(),
        SortKind::Format
    );
}

#[test]
fn search_matches_across_fields() {
    let item = record("Abbey Road", "The Beatles", 1969, Condition::Excellent);
    assert!(matches_query(&item, "beatles"));
    assert!(matches_query(&item, "ABBEY"));
    assert!(matches_query(&item, "vinyl"));
    assert!(matches_query(&item, "1969"));
    assert!(!matches_query(&item, "thriller"));
}

#[test]
fn empty_query_matches_everything() {
    let item = cd("Thriller", "Michael Jackson", 1982);
    assert!(matches_query(&item, ""));
    assert!(matches_query(&item, "   "));
}
