use std::fmt;

use crate::condition::Condition;
use crate::format::{RecordSize, RecordSpeed, TapeType};
use crate::ids::ItemID;
use crate::media_kind::MediaKind;

/// A single entry in the collection, one variant per media format.
///
/// The variant is fixed at construction; edits mutate fields of the
/// existing payload and never change the discriminant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Item {
    /// Vinyl record entry
    Record(Record),
    /// Compact disc entry
    Cd(Cd),
    /// Cassette tape entry
    Cassette(Cassette),
}

/// Vinyl record payload.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    pub id: ItemID,
    pub title: String,
    pub artist: String,
    pub year: u16,
    pub condition: Condition,
    pub size: RecordSize,
    pub speed: RecordSpeed,
}

/// Compact disc payload.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cd {
    pub id: ItemID,
    pub title: String,
    pub artist: String,
    pub year: u16,
    pub condition: Condition,
    pub track_count: u32,
    pub has_booklet: bool,
}

/// Cassette tape payload.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cassette {
    pub id: ItemID,
    pub title: String,
    pub artist: String,
    pub year: u16,
    pub condition: Condition,
    pub tape_type: TapeType,
    pub length_minutes: u32,
}

impl Item {
    pub fn id(&self) -> ItemID {
        match self {
            Item::Record(record) => record.id,
            Item::Cd(cd) => cd.id,
            Item::Cassette(cassette) => cassette.id,
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            Item::Record(_) => MediaKind::Record,
            Item::Cd(_) => MediaKind::Cd,
            Item::Cassette(_) => MediaKind::Cassette,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Item::Record(record) => &record.title,
            Item::Cd(cd) => &cd.title,
            Item::Cassette(cassette) => &cassette.title,
        }
    }

    pub fn artist(&self) -> &str {
        match self {
            Item::Record(record) => &record.artist,
            Item::Cd(cd) => &cd.artist,
            Item::Cassette(cassette) => &cassette.artist,
        }
    }

    pub fn year(&self) -> u16 {
        match self {
            Item::Record(record) => record.year,
            Item::Cd(cd) => cd.year,
            Item::Cassette(cassette) => cassette.year,
        }
    }

    pub fn condition(&self) -> Condition {
        match self {
            Item::Record(record) => record.condition,
            Item::Cd(cd) => cd.condition,
            Item::Cassette(cassette) => cassette.condition,
        }
    }

    /// Human-readable format name ("Vinyl Record", "CD", "Cassette").
    pub fn media_type(&self) -> &'static str {
        self.kind().display_name()
    }

    /// Format-specific detail string for the table's details column.
    pub fn format_details(&self) -> String {
        match self {
            Item::Record(record) => {
                format!("{} @ {} RPM", record.size, record.speed)
            }
            Item::Cd(cd) => {
                if cd.has_booklet {
                    format!("{} tracks, includes booklet", cd.track_count)
                } else {
                    format!("{} tracks", cd.track_count)
                }
            }
            Item::Cassette(cassette) => {
                format!(
                    "{} tape, {} min",
                    cassette.tape_type, cassette.length_minutes
                )
            }
        }
    }

    pub fn set_title(&mut self, title: String) {
        match self {
            Item::Record(record) => record.title = title,
            Item::Cd(cd) => cd.title = title,
            Item::Cassette(cassette) => cassette.title = title,
        }
    }

    pub fn set_artist(&mut self, artist: String) {
        match self {
            Item::Record(record) => record.artist = artist,
            Item::Cd(cd) => cd.artist = artist,
            Item::Cassette(cassette) => cassette.artist = artist,
        }
    }

    pub fn set_year(&mut self, year: u16) {
        match self {
            Item::Record(record) => record.year = year,
            Item::Cd(cd) => cd.year = year,
            Item::Cassette(cassette) => cassette.year = year,
        }
    }

    pub fn set_condition(&mut self, condition: Condition) {
        match self {
            Item::Record(record) => record.condition = condition,
            Item::Cd(cd) => cd.condition = condition,
            Item::Cassette(cassette) => cassette.condition = condition,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Item::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_record_mut(&mut self) -> Option<&mut Record> {
        match self {
            Item::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_cd(&self) -> Option<&Cd> {
        match self {
            Item::Cd(cd) => Some(cd),
            _ => None,
        }
    }

    pub fn as_cd_mut(&mut self) -> Option<&mut Cd> {
        match self {
            Item::Cd(cd) => Some(cd),
            _ => None,
        }
    }

    pub fn as_cassette(&self) -> Option<&Cassette> {
        match self {
            Item::Cassette(cassette) => Some(cassette),
            _ => None,
        }
    }

    pub fn as_cassette_mut(&mut self) -> Option<&mut Cassette> {
        match self {
            Item::Cassette(cassette) => Some(cassette),
            _ => None,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({}) [{}] - {}",
            self.artist(),
            self.title(),
            self.year(),
            self.condition(),
            self.media_type()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Item {
        Item::Record(Record {
            id: ItemID::new(),
            title: "Abbey Road".to_string(),
            artist: "The Beatles".to_string(),
            year: 1969,
            condition: Condition::Excellent,
            size: RecordSize::Twelve,
            speed: RecordSpeed::Rpm33,
        })
    }

    #[test]
    fn record_format_details() {
        assert_eq!(record().format_details(), "12\" @ 33 RPM");
    }

    #[test]
    fn cd_format_details_mentions_booklet_only_when_present() {
        let mut cd = Cd {
            id: ItemID::new(),
            title: "Thriller".to_string(),
            artist: "Michael Jackson".to_string(),
            year: 1982,
            condition: Condition::Mint,
            track_count: 9,
            has_booklet: true,
        };
        assert_eq!(
            Item::Cd(cd.clone()).format_details(),
            "9 tracks, includes booklet"
        );
        cd.has_booklet = false;
        assert_eq!(Item::Cd(cd).format_details(), "9 tracks");
    }

    #[test]
    fn cassette_format_details() {
        let cassette = Item::Cassette(Cassette {
            id: ItemID::new(),
            title: "Nevermind".to_string(),
            artist: "Nirvana".to_string(),
            year: 1991,
            condition: Condition::Good,
            tape_type: TapeType::Chrome,
            length_minutes: 60,
        });
        assert_eq!(cassette.format_details(), "Chrome tape, 60 min");
    }

    #[test]
    fn display_renders_the_table_row_summary() {
        assert_eq!(
            record().to_string(),
            "The Beatles - Abbey Road (1969) [EX] - Vinyl Record"
        );
    }

    #[test]
    fn edits_keep_the_item_id() {
        let mut item = record();
        let id = item.id();
        item.set_title("Let It Be".to_string());
        item.set_year(1970);
        assert_eq!(item.id(), id);
        assert_eq!(item.title(), "Let It Be");
    }
}
