//! Data model for screenplay scenes.
//!
//! These structs mirror the scene records of the AI movie creation form.
//! The editor touches `desc` (and assigns `id`/`scene_title` on newly created
//! scenes); every other field is opaque production metadata that must survive
//! split/merge/delete untouched.

use serde::{Deserialize, Serialize};

use crate::config::MIN_DESC_LENGTH;
use crate::error::{EditorError, EditorResult};

// =============================================================================
// SCENE
// =============================================================================

/// One paragraph-level unit of a screenplay outline.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Scene {
    /// Opaque identifier, assigned by the owning form (or the editor's id
    /// strategy for scenes created by a split).
    pub id: String,

    /// Free-text scene label. Preserved as-is across structural edits.
    pub scene_title: String,

    /// The editable plot paragraph. Never null while being edited; the empty
    /// string is valid.
    pub desc: String,

    /// Shots generated for this scene. Opaque to the editor.
    pub shots: Vec<Shot>,

    /// Background music reference. Opaque to the editor.
    pub music: Option<String>,

    /// Key frame / thumbnail URL. Opaque to the editor.
    pub image: Option<String>,

    /// Extensible metadata as JSON string (blob approach).
    pub metadata: String,
}

impl Scene {
    /// Creates a new empty Scene with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Builder: Set scene title.
    pub fn with_title(mut self, scene_title: impl Into<String>) -> Self {
        self.scene_title = scene_title.into();
        self
    }

    /// Builder: Set description.
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    /// Builder: Add a shot.
    pub fn with_shot(mut self, shot: Shot) -> Self {
        self.shots.push(shot);
        self
    }

    /// Builder: Set music reference.
    pub fn with_music(mut self, music: impl Into<String>) -> Self {
        self.music = Some(music.into());
        self
    }

    /// Builder: Set metadata as JSON string.
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = metadata.into();
        self
    }

    /// Gets the description as a string slice.
    pub fn desc_str(&self) -> &str {
        &self.desc
    }

    /// True if the description is non-empty but shorter than the advisory
    /// minimum. Drives the validation hint in the UI; never blocks anything.
    pub fn desc_below_minimum(&self) -> bool {
        let len = self.desc.trim().chars().count();
        len > 0 && len < MIN_DESC_LENGTH
    }
}

// =============================================================================
// SHOT
// =============================================================================

/// A generated shot inside a scene. Fully opaque to the editor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Shot {
    pub id: String,
    pub shot_number: i32,
    pub image_prompt: String,
    /// Rendered frame URL, if the shot has been generated.
    pub image: Option<String>,
}

impl Shot {
    /// Creates a new Shot with the given id and shot number.
    pub fn new(id: impl Into<String>, shot_number: i32) -> Self {
        Self {
            id: id.into(),
            shot_number,
            ..Default::default()
        }
    }

    /// Builder: Set image prompt.
    pub fn with_image_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.image_prompt = prompt.into();
        self
    }
}

// =============================================================================
// DEFAULTS
// =============================================================================

/// The scene list a creation form starts from when nothing is persisted yet:
/// a single empty scene. The sequence is never allowed to become empty.
pub fn default_scene_list() -> Vec<Scene> {
    vec![Scene::new("0")]
}

// =============================================================================
// JSON BOUNDARY
// =============================================================================

/// Parses a scene array from its persisted JSON form.
pub fn scenes_from_json(json: &str) -> EditorResult<Vec<Scene>> {
    serde_json::from_str(json).map_err(|e| EditorError::serialization(e.to_string()))
}

/// Serializes a scene array for persistence.
pub fn scenes_to_json(scenes: &[Scene]) -> EditorResult<String> {
    serde_json::to_string_pretty(scenes).map_err(|e| EditorError::serialization(e.to_string()))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_builder() {
        let scene = Scene::new("scene-1")
            .with_title("Opening")
            .with_desc("The hero wakes up in a strange place")
            .with_music("tense-strings")
            .with_shot(Shot::new("shot-1", 1).with_image_prompt("A dark room"));

        assert_eq!(scene.id, "scene-1");
        assert_eq!(scene.scene_title, "Opening");
        assert_eq!(scene.desc_str(), "The hero wakes up in a strange place");
        assert_eq!(scene.music, Some("tense-strings".to_string()));
        assert_eq!(scene.shots.len(), 1);
        assert_eq!(scene.shots[0].shot_number, 1);
    }

    #[test]
    fn test_desc_below_minimum() {
        assert!(!Scene::new("0").desc_below_minimum());
        assert!(Scene::new("0").with_desc("Too short").desc_below_minimum());
        assert!(!Scene::new("0")
            .with_desc("A description comfortably past the advisory minimum")
            .desc_below_minimum());
        // Whitespace-only counts as empty
        assert!(!Scene::new("0").with_desc("   ").desc_below_minimum());
    }

    #[test]
    fn test_default_scene_list() {
        let scenes = default_scene_list();
        assert_eq!(scenes.len(), 1);
        assert_eq!(scenes[0].id, "0");
        assert!(scenes[0].desc.is_empty());
    }

    #[test]
    fn test_scene_deserialize_with_missing_fields() {
        // Persisted drafts may predate newer fields; serde(default) fills them.
        let scene: Scene = serde_json::from_str(r#"{"id":"s1","desc":"Hello"}"#).unwrap();
        assert_eq!(scene.id, "s1");
        assert_eq!(scene.desc, "Hello");
        assert!(scene.shots.is_empty());
        assert!(scene.music.is_none());
    }

    #[test]
    fn test_scenes_json_round_trip() {
        let scenes = vec![
            Scene::new("s1").with_desc("A test paragraph"),
            Scene::new("s2").with_title("Finale"),
        ];
        let json = scenes_to_json(&scenes).unwrap();
        let parsed = scenes_from_json(&json).unwrap();
        assert_eq!(parsed, scenes);
    }

    #[test]
    fn test_scenes_from_invalid_json() {
        let err = scenes_from_json("{not json").unwrap_err();
        assert!(matches!(err, EditorError::Serialization(_)));
    }
}
