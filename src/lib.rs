//! Scenedraft - Paragraph-based screenplay scene editor core.
//!
//! This crate implements the state machine behind the multi-paragraph
//! screenplay editor of an AI movie creation tool:
//!
//! - **Enter splits**: pressing Enter inside a paragraph cuts it into two
//!   scenes at the caret
//! - **Backspace merges**: Backspace at the start of a paragraph folds it
//!   into the scene above
//! - **Focus follows the edit**: every structural change names the scene
//!   that should receive keyboard focus next
//!
//! The core is headless and side-effect free. The owning form loads the
//! initial scene list, renders one textarea per scene, and autosaves the
//! list back on blur; the editor only rearranges it.
//!
//! Scenes created by a split get a fresh UUID id by default; build the
//! editor with [`IdStrategy::Positional`] to keep the legacy index-string
//! ids of older drafts.
//!
//! # Example
//!
//! ```rust
//! use scenedraft::{PlainCursor, Key, Scene, SceneEditor};
//!
//! let scenes = vec![Scene::new("0").with_desc("Hello world")];
//! let mut editor = SceneEditor::from_scenes(scenes);
//!
//! // User presses Enter with the caret after "Hello"
//! let cursor = PlainCursor::new("Hello world", 5);
//! let outcome = editor.handle_key(0, Key::Enter, &cursor).unwrap();
//!
//! assert_eq!(editor.scene_count(), 2);
//! assert_eq!(editor.scenes()[0].desc, "Hello");
//! assert_eq!(editor.scenes()[1].desc, "world");
//! assert_eq!(outcome.focus, Some(1));
//!
//! // The split-created scene carries a fresh UUID id
//! assert_eq!(editor.scenes()[1].id.len(), 36);
//! ```

pub mod config;
pub mod error;

// Scene records
pub mod scene;

// Editor state machine
pub mod editor;

// Re-exports for convenience
pub use config::{MAX_SCENES_COUNT, MIN_DESC_LENGTH, SCENE_LIMIT_MESSAGE};
pub use error::{EditorError, EditorResult};
pub use scene::{default_scene_list, scenes_from_json, scenes_to_json, Scene, Shot};

pub use editor::{
    char_offset_from_utf16, interpret_key, CaretPosition, EditAction, EditOutcome,
    FocusRegistry, FocusTarget, IdStrategy, Key, KeyOutcome, Notice, PlainCursor,
    SceneEditor, TextCursor,
};

#[cfg(feature = "wasm")]
pub use editor::JsSceneEditor;
