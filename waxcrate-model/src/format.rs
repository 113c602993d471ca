//! Per-format attribute enums: vinyl sizes and speeds, cassette tape types.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Vinyl record diameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordSize {
    /// 12" LP
    Twelve,
    /// 10"
    Ten,
    /// 7" single
    Seven,
}

impl RecordSize {
    pub fn all() -> &'static [RecordSize] {
        use RecordSize::*;
        &[Twelve, Ten, Seven]
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordSize::Twelve => "12\"",
            RecordSize::Ten => "10\"",
            RecordSize::Seven => "7\"",
        }
    }
}

impl fmt::Display for RecordSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for RecordSize {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches('"') {
            "12" => Ok(RecordSize::Twelve),
            "10" => Ok(RecordSize::Ten),
            "7" => Ok(RecordSize::Seven),
            other => Err(ModelError::MalformedAttributes(format!(
                "unknown record size: {other}"
            ))),
        }
    }
}

/// Turntable speed in RPM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordSpeed {
    Rpm33,
    Rpm45,
    Rpm78,
}

impl RecordSpeed {
    pub fn all() -> &'static [RecordSpeed] {
        use RecordSpeed::*;
        &[Rpm33, Rpm45, Rpm78]
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordSpeed::Rpm33 => "33",
            RecordSpeed::Rpm45 => "45",
            RecordSpeed::Rpm78 => "78",
        }
    }
}

impl fmt::Display for RecordSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for RecordSpeed {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "33" => Ok(RecordSpeed::Rpm33),
            "45" => Ok(RecordSpeed::Rpm45),
            "78" => Ok(RecordSpeed::Rpm78),
            other => Err(ModelError::MalformedAttributes(format!(
                "unknown record speed: {other}"
            ))),
        }
    }
}

/// Cassette tape formulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TapeType {
    Normal,
    Chrome,
    Metal,
}

impl TapeType {
    pub fn all() -> &'static [TapeType] {
        use TapeType::*;
        &[Normal, Chrome, Metal]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TapeType::Normal => "Normal",
            TapeType::Chrome => "Chrome",
            TapeType::Metal => "Metal",
        }
    }
}

impl fmt::Display for TapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TapeType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(TapeType::Normal),
            "chrome" => Ok(TapeType::Chrome),
            "metal" => Ok(TapeType::Metal),
            other => Err(ModelError::MalformedAttributes(format!(
                "unknown tape type: {other}"
            ))),
        }
    }
}
