//! UI-focused snapshot of the model surface.
//! Prefer importing from this module instead of individual tree nodes
//! when working in presentation layers.

pub use super::condition::{Condition, UNKNOWN_CONDITION_RANK};
pub use super::error::{ModelError, Result as ModelResult};
pub use super::factory::{
    CommonFields, FormatExtras, ItemFactory, validate_required_text,
};
pub use super::format::{RecordSize, RecordSpeed, TapeType};
pub use super::ids::ItemID;
pub use super::item::{Cassette, Cd, Item, Record};
pub use super::media_kind::MediaKind;
