//! Scene data module.
//!
//! Holds the scene records the editor operates on. The records themselves are
//! owned by the external creation form; the editor only rearranges them.

pub mod model;

// Re-exports for convenience
pub use model::{default_scene_list, scenes_from_json, scenes_to_json, Scene, Shot};
