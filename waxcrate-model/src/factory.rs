//! Item factory: all construction of collection items goes through here.
//!
//! Each variant has its own strongly-typed constructor; the dynamic
//! entry points exist for call sites that only know the variant at
//! runtime (the add-item dialog). No field-level validation happens in
//! the factory itself — [`validate_required_text`] is the explicit
//! boundary check the UI runs before submitting.

use crate::condition::Condition;
use crate::error::{ModelError, Result};
use crate::format::{RecordSize, RecordSpeed, TapeType};
use crate::ids::ItemID;
use crate::item::{Cassette, Cd, Item, Record};
use crate::media_kind::MediaKind;

/// Attributes every item shares, bundled for the dynamic entry points.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonFields {
    pub title: String,
    pub artist: String,
    pub year: u16,
    pub condition: Condition,
}

/// The variant-specific attribute pair, as a discriminated union so a
/// kind/extras mismatch is a single well-defined error instead of a
/// downcast failure.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatExtras {
    Record {
        size: RecordSize,
        speed: RecordSpeed,
    },
    Cd {
        track_count: u32,
        has_booklet: bool,
    },
    Cassette {
        tape_type: TapeType,
        length_minutes: u32,
    },
}

impl FormatExtras {
    pub fn kind(&self) -> MediaKind {
        match self {
            FormatExtras::Record { .. } => MediaKind::Record,
            FormatExtras::Cd { .. } => MediaKind::Cd,
            FormatExtras::Cassette { .. } => MediaKind::Cassette,
        }
    }
}

/// Factory for collection items.
#[derive(Debug)]
pub struct ItemFactory;

impl ItemFactory {
    /// Build a vinyl record entry.
    pub fn record(
        title: impl Into<String>,
        artist: impl Into<String>,
        year: u16,
        condition: Condition,
        size: RecordSize,
        speed: RecordSpeed,
    ) -> Record {
        Record {
            id: ItemID::new(),
            title: title.into(),
            artist: artist.into(),
            year,
            condition,
            size,
            speed,
        }
    }

    /// Build a compact disc entry.
    pub fn cd(
        title: impl Into<String>,
        artist: impl Into<String>,
        year: u16,
        condition: Condition,
        track_count: u32,
        has_booklet: bool,
    ) -> Cd {
        Cd {
            id: ItemID::new(),
            title: title.into(),
            artist: artist.into(),
            year,
            condition,
            track_count,
            has_booklet,
        }
    }

    /// Build a cassette entry.
    pub fn cassette(
        title: impl Into<String>,
        artist: impl Into<String>,
        year: u16,
        condition: Condition,
        tape_type: TapeType,
        length_minutes: u32,
    ) -> Cassette {
        Cassette {
            id: ItemID::new(),
            title: title.into(),
            artist: artist.into(),
            year,
            condition,
            tape_type,
            length_minutes,
        }
    }

    /// Dynamic entry point over typed attributes.
    ///
    /// Fails with [`ModelError::MalformedAttributes`] when `kind` and
    /// the discriminant of `extras` disagree.
    pub fn item(
        kind: MediaKind,
        common: CommonFields,
        extras: FormatExtras,
    ) -> Result<Item> {
        if extras.kind() != kind {
            return Err(ModelError::MalformedAttributes(format!(
                "{} attributes supplied for a {} item",
                extras.kind(),
                kind
            )));
        }

        let CommonFields {
            title,
            artist,
            year,
            condition,
        } = common;

        Ok(match extras {
            FormatExtras::Record { size, speed } => Item::Record(
                Self::record(title, artist, year, condition, size, speed),
            ),
            FormatExtras::Cd {
                track_count,
                has_booklet,
            } => Item::Cd(Self::cd(
                title,
                artist,
                year,
                condition,
                track_count,
                has_booklet,
            )),
            FormatExtras::Cassette {
                tape_type,
                length_minutes,
            } => Item::Cassette(Self::cassette(
                title,
                artist,
                year,
                condition,
                tape_type,
                length_minutes,
            )),
        })
    }

    /// Dynamic entry point over raw form text, for the UI boundary.
    ///
    /// `extras` must hold exactly the ordered pair of variant-specific
    /// values: size + speed, track count + booklet flag, or tape type +
    /// length in minutes. An unknown `tag` fails with
    /// [`ModelError::InvalidVariant`]; wrong arity or unparsable values
    /// fail with [`ModelError::MalformedAttributes`].
    pub fn item_from_strings(
        tag: &str,
        title: impl Into<String>,
        artist: impl Into<String>,
        year: u16,
        condition: Condition,
        extras: &[&str],
    ) -> Result<Item> {
        let kind: MediaKind = tag.parse()?;

        let &[first, second] = extras else {
            return Err(ModelError::MalformedAttributes(format!(
                "{} expects exactly 2 extra attributes, got {}",
                kind,
                extras.len()
            )));
        };

        let extras = match kind {
            MediaKind::Record => FormatExtras::Record {
                size: first.parse()?,
                speed: second.parse()?,
            },
            MediaKind::Cd => FormatExtras::Cd {
                track_count: parse_count(first, "track count")?,
                has_booklet: parse_flag(second, "booklet flag")?,
            },
            MediaKind::Cassette => FormatExtras::Cassette {
                tape_type: first.parse()?,
                length_minutes: parse_count(second, "length in minutes")?,
            },
        };

        let common = CommonFields {
            title: title.into(),
            artist: artist.into(),
            year,
            condition,
        };
        Self::item(kind, common, extras)
    }
}

fn parse_count(raw: &str, what: &str) -> Result<u32> {
    raw.trim().parse::<u32>().map_err(|_| {
        ModelError::MalformedAttributes(format!("invalid {what}: {raw}"))
    })
}

fn parse_flag(raw: &str, what: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" => Ok(true),
        "false" | "no" => Ok(false),
        other => Err(ModelError::MalformedAttributes(format!(
            "invalid {what}: {other}"
        ))),
    }
}

/// UI-boundary check for required text fields (title, artist).
///
/// The model itself permits empty values; dialogs call this before
/// handing input to the factory.
pub fn validate_required_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ModelError::ValidationFailed(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}
