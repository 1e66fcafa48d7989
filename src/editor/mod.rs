//! Paragraph editor module.
//!
//! The state machine behind the multi-paragraph screenplay editor: caret
//! analysis, key interpretation, the scene-list reducer, and focus
//! coordination.

pub mod action;
pub mod caret;
pub mod focus;
pub mod state;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use action::{interpret_key, EditAction, Key, KeyOutcome};
pub use caret::{char_offset_from_utf16, CaretPosition, PlainCursor, TextCursor};
pub use focus::{FocusRegistry, FocusTarget};
pub use state::{EditOutcome, IdStrategy, Notice, SceneEditor};

#[cfg(feature = "wasm")]
pub use wasm::JsSceneEditor;
