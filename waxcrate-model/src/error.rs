use std::fmt::{self, Display};

/// Errors produced by the item factory and boundary validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The media-type tag passed to the generic factory entry point is
    /// not one of the known variants.
    InvalidVariant(String),
    /// The extra attributes do not match the chosen variant in arity,
    /// type, or discriminant.
    MalformedAttributes(String),
    /// A required text field was empty at the submission boundary.
    ValidationFailed(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidVariant(tag) => {
                write!(f, "unknown media type: {tag}")
            }
            ModelError::MalformedAttributes(msg) => {
                write!(f, "malformed attributes: {msg}")
            }
            ModelError::ValidationFailed(msg) => {
                write!(f, "validation failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
