//! WASM bindings for the scene editor.
//!
//! This module provides JavaScript-friendly wrappers around the core
//! SceneEditor for use in browser environments. The web form reads the scene
//! list back after each call and owns persistence (autosave on blur).

use js_sys::Array;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

use crate::error::EditorError;
use crate::scene::model::Scene;

use super::caret::{char_offset_from_utf16, PlainCursor};
use super::state::{EditOutcome, IdStrategy, SceneEditor};
use super::action::Key;

/// Serialize a value to JsValue with maps as plain JS objects (not Map).
fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&Serializer::new().serialize_maps_as_objects(true))
}

// =============================================================================
// ERROR CONVERSION
// =============================================================================

impl From<EditorError> for JsValue {
    fn from(err: EditorError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// Helper macro for Result conversion
macro_rules! js_result {
    ($expr:expr) => {
        $expr.map_err(|e: EditorError| JsValue::from(e))
    };
}

// =============================================================================
// OUTCOME SHAPE
// =============================================================================

/// JS-facing shape of an edit outcome.
#[derive(Serialize)]
struct JsEditOutcome {
    changed: bool,
    focus: Option<usize>,
    notice: Option<&'static str>,
}

impl From<EditOutcome> for JsEditOutcome {
    fn from(outcome: EditOutcome) -> Self {
        Self {
            changed: outcome.changed,
            focus: outcome.focus,
            notice: outcome.notice.map(|n| n.message()),
        }
    }
}

fn outcome_to_js(outcome: EditOutcome) -> Result<JsValue, JsValue> {
    Ok(to_js_value(&JsEditOutcome::from(outcome))?)
}

// =============================================================================
// MAIN WRAPPER TYPE
// =============================================================================

/// JavaScript-friendly wrapper around SceneEditor.
///
/// Drives the multi-paragraph screenplay editor from the browser: key events
/// come in with the input's text and selection, edit outcomes go back out as
/// plain objects. Caret offsets cross this boundary in UTF-16 code units
/// (the unit of DOM `selectionStart`) and are converted internally.
///
/// Scenes created by splits get a fresh UUID id; call `usePositionalIds`
/// first when working with drafts saved under the legacy index-string
/// scheme.
#[wasm_bindgen]
pub struct JsSceneEditor {
    inner: SceneEditor,
}

#[wasm_bindgen]
impl JsSceneEditor {
    /// Creates an editor over the 1-scene empty default.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const editor = new JsSceneEditor();
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsSceneEditor {
        JsSceneEditor {
            inner: SceneEditor::new(),
        }
    }

    /// Creates an editor over an existing scene array (a persisted draft).
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const editor = JsSceneEditor.fromScenes([
    ///   { id: '0', scene_title: '', desc: 'Hello world', shots: [], metadata: '' }
    /// ]);
    /// ```
    #[wasm_bindgen(js_name = fromScenes)]
    pub fn from_scenes(scenes: JsValue) -> Result<JsSceneEditor, JsValue> {
        let scenes: Vec<Scene> = js_result!(
            from_value(scenes).map_err(|e| EditorError::serialization(e.to_string()))
        )?;
        Ok(JsSceneEditor {
            inner: SceneEditor::from_scenes(scenes),
        })
    }

    /// Switches new-scene id assignment to the legacy positional scheme used
    /// by drafts saved before stable ids.
    #[wasm_bindgen(js_name = usePositionalIds)]
    pub fn use_positional_ids(&mut self) {
        self.inner = self.inner.clone().with_id_strategy(IdStrategy::Positional);
    }

    /// Gets the current scene array.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const scenes = editor.getScenes();
    /// console.log(scenes[0].desc);
    /// ```
    #[wasm_bindgen(js_name = getScenes)]
    pub fn get_scenes(&self) -> Result<JsValue, JsValue> {
        Ok(to_js_value(&self.inner.scenes())?)
    }

    /// Gets the ordered scene ids.
    #[wasm_bindgen(js_name = getSceneIds)]
    pub fn get_scene_ids(&self) -> Array {
        let array = Array::new();
        for scene in self.inner.scenes() {
            array.push(&JsValue::from_str(&scene.id));
        }
        array
    }

    /// Number of scenes.
    #[wasm_bindgen(js_name = sceneCount)]
    pub fn scene_count(&self) -> usize {
        self.inner.scene_count()
    }

    /// Index of the scene whose textarea should hold keyboard focus.
    #[wasm_bindgen(js_name = focusedIndex)]
    pub fn focused_index(&self) -> usize {
        self.inner.focused_index()
    }

    /// Moves focus explicitly (the user clicked into another textarea).
    #[wasm_bindgen(js_name = setFocusedIndex)]
    pub fn set_focused_index(&mut self, index: usize) {
        self.inner.set_focused_index(index);
    }

    /// Mutation counter. Compare before/after blur to decide whether to
    /// autosave.
    pub fn revision(&self) -> f64 {
        self.inner.revision() as f64
    }

    /// Enables or disables editing.
    #[wasm_bindgen(js_name = setDisabled)]
    pub fn set_disabled(&mut self, disabled: bool) {
        self.inner.set_disabled(disabled);
    }
}

// =============================================================================
// EDIT METHODS
// =============================================================================

#[wasm_bindgen]
impl JsSceneEditor {
    /// Handles a key event on one scene's textarea.
    ///
    /// Call synchronously from the keydown handler with the input's current
    /// text and selectionStart (UTF-16 code units, passed through as the DOM
    /// reports it); a truthy `changed` in the returned object means the
    /// default input behavior should be prevented.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const outcome = editor.handleKey(0, event.key, input.value, input.selectionStart);
    /// if (outcome.changed) event.preventDefault();
    /// if (outcome.notice) toast(outcome.notice);
    /// if (outcome.focus !== null) focusParagraph(outcome.focus);
    /// ```
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(
        &mut self,
        index: usize,
        key: &str,
        text: &str,
        selection_start: usize,
    ) -> Result<JsValue, JsValue> {
        let Some(key) = Key::from_name(key) else {
            // Keys the editor does not handle fall through to the input
            return outcome_to_js(EditOutcome {
                changed: false,
                focus: None,
                notice: None,
            });
        };
        let caret = char_offset_from_utf16(text, selection_start);
        let cursor = PlainCursor::new(text, caret);
        let outcome = js_result!(self.inner.handle_key(index, key, &cursor))?;
        outcome_to_js(outcome)
    }

    /// Replaces the description text of one scene (per-keystroke edit path).
    #[wasm_bindgen(js_name = editScene)]
    pub fn edit_scene(&mut self, index: usize, text: &str) -> Result<JsValue, JsValue> {
        let outcome = js_result!(self.inner.edit_scene(index, text.to_string()))?;
        outcome_to_js(outcome)
    }

    /// Splits a scene at a caret offset (UTF-16 code units, i.e. a DOM
    /// `selectionStart` into the scene's current text).
    ///
    /// The new scene's id is a fresh UUID unless `usePositionalIds` was
    /// called.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// editor.splitScene(0, 5); // "Hello| world" -> ["Hello", "world"]
    /// ```
    #[wasm_bindgen(js_name = splitScene)]
    pub fn split_scene(&mut self, index: usize, caret: usize) -> Result<JsValue, JsValue> {
        let caret = match self.inner.scene(index) {
            Some(scene) => char_offset_from_utf16(&scene.desc, caret),
            // Out of range; let the core report the index error
            None => caret,
        };
        let outcome = js_result!(self.inner.split_scene(index, caret))?;
        outcome_to_js(outcome)
    }

    /// Folds a scene into its predecessor.
    #[wasm_bindgen(js_name = mergeScene)]
    pub fn merge_scene(&mut self, index: usize) -> Result<JsValue, JsValue> {
        let outcome = js_result!(self.inner.merge_scene(index))?;
        outcome_to_js(outcome)
    }

    /// Removes a scene (the hover delete control).
    #[wasm_bindgen(js_name = deleteScene)]
    pub fn delete_scene(&mut self, index: usize) -> Result<JsValue, JsValue> {
        let outcome = js_result!(self.inner.delete_scene(index))?;
        outcome_to_js(outcome)
    }
}

impl Default for JsSceneEditor {
    fn default() -> Self {
        Self::new()
    }
}
