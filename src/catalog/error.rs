//! Error types for catalog loading.

use thiserror::Error;

use super::data::BodyPartType;

/// Errors that can occur when loading the body-part catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// Two variants of one category share a tag.
    #[error("Duplicate {part_type} tag '{tag}'")]
    DuplicateTag { part_type: BodyPartType, tag: String },

    /// A variant of a left/right category has no mirrored sprite.
    #[error("{part_type} variant '{tag}' is missing its pair sprite")]
    MissingPairSprite { part_type: BodyPartType, tag: String },
}
