//! Error types for the scene editor core.

use thiserror::Error;

/// Result type alias for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// Errors that can occur during editor operations.
///
/// List-boundary conditions (merging above the first scene, deleting the last
/// remaining scene) and a split rejected at the scene cap are deliberately
/// NOT errors. They are no-ops reported through
/// [`crate::editor::EditOutcome`] instead.
#[derive(Error, Debug)]
pub enum EditorError {
    /// An action targeted a scene index that does not exist.
    #[error("Index {index} out of bounds for scene list of length {length}")]
    IndexOutOfBounds { index: usize, length: usize },

    /// Caret offset lies past the end of the text (measured in chars).
    #[error("Invalid caret: offset {offset} exceeds text length {length}")]
    InvalidCaret { offset: usize, length: usize },

    /// Serialization/deserialization error at the embedding boundary.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl EditorError {
    /// Creates an IndexOutOfBounds error.
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }

    /// Creates an InvalidCaret error.
    pub fn invalid_caret(offset: usize, length: usize) -> Self {
        Self::InvalidCaret { offset, length }
    }

    /// Creates a Serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}
