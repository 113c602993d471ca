//! Core data model definitions shared across Waxcrate crates.
#![allow(missing_docs)]

pub mod condition;
pub mod error;
pub mod factory;
pub mod format;
pub mod ids;
pub mod item;
pub mod media_kind;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use condition::{Condition, UNKNOWN_CONDITION_RANK};
pub use error::{ModelError, Result as ModelResult};
pub use factory::{
    CommonFields, FormatExtras, ItemFactory, validate_required_text,
};
pub use format::{RecordSize, RecordSpeed, TapeType};
pub use ids::ItemID;
pub use item::{Cassette, Cd, Item, Record};
pub use media_kind::MediaKind;
