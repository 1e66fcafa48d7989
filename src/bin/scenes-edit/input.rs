//! Input structs for parsing the web app's scene export JSON.
//!
//! The web form serializes creations in camelCase with a few optional
//! fields; these structs accept that shape and are transformed into the Rust
//! model before editing.

use serde::Deserialize;

// =============================================================================
// CREATION
// =============================================================================

/// A creation export: the scene list plus identifying metadata.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputCreation {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub title: String,

    pub scenes: Vec<InputScene>,
}

// =============================================================================
// SCENE
// =============================================================================

/// Scene record as exported by the web form.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputScene {
    pub id: String,
    pub scene_title: String,
    pub desc: String,
    pub shots: Vec<InputShot>,
    pub music: Option<String>,
    pub image: Option<String>,
    /// Arbitrary metadata object; stored as a JSON string blob in the model.
    pub metadata: Option<serde_json::Value>,
}

/// Shot record as exported by the web form.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputShot {
    pub id: String,
    pub shot_number: i32,
    pub image_prompt: String,
    pub image: Option<String>,
}
