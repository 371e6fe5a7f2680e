//! Error type shared across Quill crates.
//!
//! Scanning never fails: a document without matches is simply returned
//! unchanged. The variants here cover the only failures a caller can see,
//! which are lookups of names outside the fixed tables and arguments that
//! cannot form a pattern.

use thiserror::Error;

/// A caller passed an argument the engine cannot work with.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// The name is not in the known HTML tag set.
    #[error("unknown HTML tag `{0}`")]
    UnknownTag(String),

    /// A tag name must be non-empty ASCII letters or digits.
    #[error("invalid tag name `{0}`: expected ASCII letters or digits")]
    InvalidTagName(String),

    /// The name is not the mnemonic of any record in the entity table.
    #[error("unknown character entity `{0}`")]
    UnknownEntity(String),

    /// The text does not name an entity encoding.
    #[error("unknown entity type `{0}`: expected name, numeric or unicode")]
    UnknownEntityType(String),

    /// The text does not name a tag shape.
    #[error("unknown tag type `{0}`: expected open, close or self-closing")]
    UnknownTagType(String),

    /// A specialized grammar failed to compile.
    #[error("grammar pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),
}
