//! Edit actions and key interpretation.
//!
//! Every mutation of the scene list is expressed as a tagged [`EditAction`]
//! dispatched to the editor's reducer. Key events are mapped onto actions (or
//! pure focus moves) by [`interpret_key`], which keeps the transition table in
//! one place and testable without any rendering environment.
//!
//! The serde representation doubles as the edit-script format of the
//! `scenes-edit` CLI.

use serde::{Deserialize, Serialize};

use super::caret::CaretPosition;

// =============================================================================
// EDIT ACTIONS
// =============================================================================

/// A single mutation of the scene list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EditAction {
    /// Replace the description text of the scene at `index` (per-keystroke
    /// text edit).
    Edit { index: usize, text: String },

    /// Split the scene at `index` into two at the given caret offset (chars).
    Split { index: usize, caret: usize },

    /// Fold the scene at `index` into its predecessor. No-op at index 0.
    Merge { index: usize },

    /// Remove the scene at `index`. No-op when it is the only scene.
    Delete { index: usize },
}

// =============================================================================
// KEYS
// =============================================================================

/// The keys the editor reacts to. Everything else passes through to the
/// text input unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Delete,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl Key {
    /// Parses a DOM `KeyboardEvent.key` name. Returns None for keys the
    /// editor does not handle.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Enter" => Some(Self::Enter),
            "Backspace" => Some(Self::Backspace),
            "Delete" => Some(Self::Delete),
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            _ => None,
        }
    }
}

/// What a key event should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Dispatch this action to the reducer.
    Action(EditAction),
    /// Move focus to this scene index without mutating any text.
    Focus(usize),
    /// Let the key fall through to the underlying input.
    Pass,
}

/// Maps a key event on scene `index` to its outcome.
///
/// Caret gating happens here: Backspace only merges at caret-start, Delete
/// only removes at caret-end, and arrows only cross scene boundaries from the
/// matching edge. Enter always yields a split; the cap check is the
/// reducer's job.
pub fn interpret_key(
    key: Key,
    index: usize,
    caret: &CaretPosition,
    scene_count: usize,
) -> KeyOutcome {
    match key {
        Key::Enter => KeyOutcome::Action(EditAction::Split {
            index,
            caret: caret.offset,
        }),
        Key::Backspace if caret.is_at_start && index > 0 => {
            KeyOutcome::Action(EditAction::Merge { index })
        }
        Key::Delete if caret.is_at_end && scene_count > 1 => {
            KeyOutcome::Action(EditAction::Delete { index })
        }
        Key::ArrowUp | Key::ArrowLeft if caret.is_at_start && index > 0 => {
            KeyOutcome::Focus(index - 1)
        }
        Key::ArrowDown | Key::ArrowRight if caret.is_at_end && index + 1 < scene_count => {
            KeyOutcome::Focus(index + 1)
        }
        _ => KeyOutcome::Pass,
    }
}

// =============================================================================
// TESTS
// =============================================================================
