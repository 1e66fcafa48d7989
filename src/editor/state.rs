//! Core SceneEditor implementation.
//!
//! This module provides the main `SceneEditor` struct that owns the scene
//! list and implements the paragraph state machine:
//! - Enter splits a scene at the caret into two scenes
//! - Backspace at caret-start folds a scene into its predecessor
//! - Delete at caret-end removes a scene
//! - Arrow keys at caret boundaries move focus between scenes
//!
//! Every transition produces an [`EditOutcome`] telling the embedding layer
//! which scene should receive keyboard focus and whether a notice needs to be
//! shown. The editor never performs I/O; persistence belongs to the owning
//! form.

use uuid::Uuid;

use crate::config::{MAX_SCENES_COUNT, SCENE_LIMIT_MESSAGE};
use crate::error::{EditorError, EditorResult};
use crate::scene::model::{default_scene_list, Scene};

use super::action::{interpret_key, EditAction, Key, KeyOutcome};
use super::caret::{CaretPosition, TextCursor};

// =============================================================================
// OUTCOME TYPES
// =============================================================================

/// Transient, user-visible notification. Non-fatal and non-blocking; the
/// embedding layer renders it as a toast and moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A split was rejected because the scene cap was reached.
    SceneLimitReached,
}

impl Notice {
    /// The fixed message text for this notice.
    pub fn message(&self) -> &'static str {
        match self {
            Self::SceneLimitReached => SCENE_LIMIT_MESSAGE,
        }
    }
}

/// Result of applying one action or key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// Whether the scene list was mutated.
    pub changed: bool,
    /// Scene index that should receive keyboard focus, if it moved.
    pub focus: Option<usize>,
    /// Notice to surface to the user, if any.
    pub notice: Option<Notice>,
}

impl EditOutcome {
    fn unchanged() -> Self {
        Self {
            changed: false,
            focus: None,
            notice: None,
        }
    }

    fn changed_with_focus(index: usize) -> Self {
        Self {
            changed: true,
            focus: Some(index),
            notice: None,
        }
    }

    fn changed_in_place() -> Self {
        Self {
            changed: true,
            focus: None,
            notice: None,
        }
    }

    fn focus_only(index: usize) -> Self {
        Self {
            changed: false,
            focus: Some(index),
            notice: None,
        }
    }

    fn rejected(notice: Notice) -> Self {
        Self {
            changed: false,
            focus: None,
            notice: Some(notice),
        }
    }
}

// =============================================================================
// ID STRATEGY
// =============================================================================

/// How ids are assigned to scenes created by a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// Random v4 UUID per new scene. Stable over the scene's lifetime, safe
    /// to use as a persistence key.
    #[default]
    Uuid,

    /// String form of the insertion index. Matches drafts saved by older
    /// clients, but collides once scenes are inserted or removed afterwards;
    /// do not use where ids must stay unique.
    Positional,
}

impl IdStrategy {
    fn new_scene_id(&self, insert_index: usize) -> String {
        match self {
            Self::Uuid => Uuid::new_v4().to_string(),
            Self::Positional => insert_index.to_string(),
        }
    }
}

// =============================================================================
// SCENE EDITOR
// =============================================================================

/// The paragraph editor state container.
///
/// Owns the scene list plus the focus index, and applies [`EditAction`]s as a
/// reducer. The list length is kept between 1 and the configured cap at all
/// times. `revision` increments on every mutation so the owning form can tell
/// whether there is anything to autosave on blur.
#[derive(Debug, Clone)]
pub struct SceneEditor {
    scenes: Vec<Scene>,
    focused: usize,
    disabled: bool,
    max_scenes: usize,
    id_strategy: IdStrategy,
    revision: u64,
}

impl SceneEditor {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Creates an editor over the 1-scene empty default.
    pub fn new() -> Self {
        Self::from_scenes(default_scene_list())
    }

    /// Creates an editor over an existing scene list (e.g. a persisted
    /// draft). An empty input is replaced by the 1-scene default so the
    /// length invariant holds from the start.
    pub fn from_scenes(scenes: Vec<Scene>) -> Self {
        let scenes = if scenes.is_empty() {
            default_scene_list()
        } else {
            scenes
        };
        Self {
            scenes,
            focused: 0,
            disabled: false,
            max_scenes: MAX_SCENES_COUNT,
            id_strategy: IdStrategy::default(),
            revision: 0,
        }
    }

    /// Builder: Override the scene cap.
    pub fn with_max_scenes(mut self, max_scenes: usize) -> Self {
        self.max_scenes = max_scenes.max(1);
        self
    }

    /// Builder: Set the id strategy for scenes created by splits.
    pub fn with_id_strategy(mut self, id_strategy: IdStrategy) -> Self {
        self.id_strategy = id_strategy;
        self
    }

    /// Builder: Start disabled (read-only rendering of the same state).
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// The current scene list, in narrative order.
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Consumes the editor, returning the scene list.
    pub fn into_scenes(self) -> Vec<Scene> {
        self.scenes
    }

    /// Gets a scene by index.
    pub fn scene(&self, index: usize) -> Option<&Scene> {
        self.scenes.get(index)
    }

    /// Number of scenes. Always in `1..=max_scenes`.
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// The configured scene cap.
    pub fn max_scenes(&self) -> usize {
        self.max_scenes
    }

    /// Index of the scene whose input should hold keyboard focus.
    pub fn focused_index(&self) -> usize {
        self.focused
    }

    /// Moves focus explicitly (e.g. the user clicked into another input).
    /// Clamped to the valid range.
    pub fn set_focused_index(&mut self, index: usize) {
        self.focused = index.min(self.scenes.len() - 1);
    }

    /// Whether the editor ignores all mutations.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enables or disables the editor.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Mutation counter. Compare against a saved value to detect unsaved
    /// changes when a paragraph input blurs.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies a function to the scene list directly (bulk updates from the
    /// owning form, e.g. after a remote reload). The length invariant and
    /// focus index are re-established afterwards.
    pub fn update_scenes<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Vec<Scene>),
    {
        f(&mut self.scenes);
        if self.scenes.is_empty() {
            self.scenes = default_scene_list();
        }
        self.focused = self.focused.min(self.scenes.len() - 1);
        self.touch();
    }

    // =========================================================================
    // KEY EVENT HANDLING
    // =========================================================================

    /// Handles a key event on the scene at `index`.
    ///
    /// The caret is read from the cursor synchronously, before any mutation,
    /// because a live selection is only valid at dispatch time.
    pub fn handle_key<C: TextCursor>(
        &mut self,
        index: usize,
        key: Key,
        cursor: &C,
    ) -> EditorResult<EditOutcome> {
        if self.disabled {
            return Ok(EditOutcome::unchanged());
        }
        if index >= self.scenes.len() {
            return Err(EditorError::index_out_of_bounds(index, self.scenes.len()));
        }
        let caret = CaretPosition::from_cursor(cursor);
        match interpret_key(key, index, &caret, self.scenes.len()) {
            KeyOutcome::Action(action) => self.apply(action),
            KeyOutcome::Focus(target) => {
                self.focused = target;
                Ok(EditOutcome::focus_only(target))
            }
            KeyOutcome::Pass => Ok(EditOutcome::unchanged()),
        }
    }

    // =========================================================================
    // REDUCER
    // =========================================================================

    /// Dispatches one action.
    pub fn apply(&mut self, action: EditAction) -> EditorResult<EditOutcome> {
        match action {
            EditAction::Edit { index, text } => self.edit_scene(index, text),
            EditAction::Split { index, caret } => self.split_scene(index, caret),
            EditAction::Merge { index } => self.merge_scene(index),
            EditAction::Delete { index } => self.delete_scene(index),
        }
    }

    /// Replaces the description of the scene at `index`. The per-keystroke
    /// path; text is stored as typed, no trimming.
    pub fn edit_scene(&mut self, index: usize, text: String) -> EditorResult<EditOutcome> {
        if self.disabled {
            return Ok(EditOutcome::unchanged());
        }
        self.check_index(index)?;
        self.scenes[index].desc = text;
        self.touch();
        Ok(EditOutcome::changed_in_place())
    }

    /// Splits the scene at `index` at the given caret offset (chars).
    ///
    /// The new scene is inserted immediately after; the current scene keeps
    /// the text before the caret. Opaque fields (shots, music, metadata) stay
    /// with the original scene. At the cap, the split is rejected with a
    /// notice and nothing changes.
    pub fn split_scene(&mut self, index: usize, caret: usize) -> EditorResult<EditOutcome> {
        if self.disabled {
            return Ok(EditOutcome::unchanged());
        }
        self.check_index(index)?;
        if self.scenes.len() >= self.max_scenes {
            return Ok(EditOutcome::rejected(Notice::SceneLimitReached));
        }

        let text = &self.scenes[index].desc;
        let length = text.chars().count();
        if caret > length {
            return Err(EditorError::invalid_caret(caret, length));
        }

        let (before, after) = split_desc(text, caret);
        let new_index = index + 1;
        let new_scene =
            Scene::new(self.id_strategy.new_scene_id(new_index)).with_desc(after);

        self.scenes[index].desc = before;
        self.scenes.insert(new_index, new_scene);
        self.focused = new_index;
        self.touch();
        Ok(EditOutcome::changed_with_focus(new_index))
    }

    /// Folds the scene at `index` into its predecessor, joining the texts
    /// with a single space. Merging above the first scene is a no-op.
    pub fn merge_scene(&mut self, index: usize) -> EditorResult<EditOutcome> {
        if self.disabled {
            return Ok(EditOutcome::unchanged());
        }
        self.check_index(index)?;
        if index == 0 {
            return Ok(EditOutcome::unchanged());
        }

        let removed = self.scenes.remove(index);
        let prev = &mut self.scenes[index - 1];
        prev.desc = join_descs(&prev.desc, &removed.desc);
        self.focused = index - 1;
        self.touch();
        Ok(EditOutcome::changed_with_focus(index - 1))
    }

    /// Removes the scene at `index` (Delete-at-end key, or the explicit
    /// delete control). Removing the last remaining scene is a no-op.
    pub fn delete_scene(&mut self, index: usize) -> EditorResult<EditOutcome> {
        if self.disabled {
            return Ok(EditOutcome::unchanged());
        }
        self.check_index(index)?;
        if self.scenes.len() == 1 {
            return Ok(EditOutcome::unchanged());
        }

        self.scenes.remove(index);
        // At index 0 the successor slides into the removed slot
        let target = index.saturating_sub(1);
        self.focused = target;
        self.touch();
        Ok(EditOutcome::changed_with_focus(target))
    }

    // =========================================================================
    // INTERNAL HELPERS
    // =========================================================================

    fn check_index(&self, index: usize) -> EditorResult<()> {
        if index >= self.scenes.len() {
            return Err(EditorError::index_out_of_bounds(index, self.scenes.len()));
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

impl Default for SceneEditor {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TEXT POLICY
// =============================================================================

/// Splits a description at a char offset.
///
/// Caret at the absolute start moves the whole (trimmed) paragraph down to
/// the new slot; caret at the absolute end appends a fresh empty paragraph;
/// an interior caret cuts the text with both halves trimmed.
fn split_desc(text: &str, caret: usize) -> (String, String) {
    let length = text.chars().count();
    if caret == 0 {
        (String::new(), text.trim().to_string())
    } else if caret == length {
        (text.trim().to_string(), String::new())
    } else {
        let byte = text
            .char_indices()
            .nth(caret)
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        (
            text[..byte].trim().to_string(),
            text[byte..].trim().to_string(),
        )
    }
}

/// Joins two descriptions with a single space, each side trimmed at the
/// concatenation boundary. An empty side degenerates to the other side alone
/// so merges never leave a stray space.
fn join_descs(prev: &str, next: &str) -> String {
    let prev = prev.trim_end();
    let next = next.trim_start();
    if prev.is_empty() {
        next.to_string()
    } else if next.is_empty() {
        prev.to_string()
    } else {
        format!("{prev} {next}")
    }
}

// =============================================================================
// TESTS
// =============================================================================
