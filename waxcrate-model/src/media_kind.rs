use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Simple enum for the supported media formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MediaKind {
    /// Vinyl record
    Record = 0,
    /// Compact disc
    Cd = 1,
    /// Cassette tape
    Cassette = 2,
}

impl MediaKind {
    pub fn all() -> &'static [MediaKind] {
        use MediaKind::*;
        &[Record, Cd, Cassette]
    }

    /// Human-readable format name shown in the table and used by the
    /// format sort.
    pub fn display_name(&self) -> &'static str {
        match self {
            MediaKind::Record => "Vinyl Record",
            MediaKind::Cd => "CD",
            MediaKind::Cassette => "Cassette",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for MediaKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "record" | "vinyl" | "vinyl record" => Ok(MediaKind::Record),
            "cd" | "compact disc" => Ok(MediaKind::Cd),
            "cassette" | "tape" => Ok(MediaKind::Cassette),
            other => Err(ModelError::InvalidVariant(other.to_string())),
        }
    }
}
