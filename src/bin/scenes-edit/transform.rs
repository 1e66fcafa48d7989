//! Transforms input structs into the Rust scene model.

use scenedraft::{Scene, Shot};

use crate::input::{InputScene, InputShot};

impl From<InputShot> for Shot {
    fn from(input: InputShot) -> Self {
        Self {
            id: input.id,
            shot_number: input.shot_number,
            image_prompt: input.image_prompt,
            image: input.image,
        }
    }
}

impl From<InputScene> for Scene {
    fn from(input: InputScene) -> Self {
        Self {
            id: input.id,
            scene_title: input.scene_title,
            desc: input.desc,
            shots: input.shots.into_iter().map(Shot::from).collect(),
            music: input.music,
            image: input.image,
            metadata: input
                .metadata
                .map(|v| v.to_string())
                .unwrap_or_default(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::input::InputCreation;
    use scenedraft::Scene;

    #[test]
    fn test_parse_and_transform_creation() {
        let json = r#"{
            "id": "creation-1",
            "title": "My Movie",
            "scenes": [
                {
                    "id": "s1",
                    "sceneTitle": "Opening",
                    "desc": "The hero wakes up",
                    "shots": [
                        { "id": "sh1", "shotNumber": 1, "imagePrompt": "A dark room" }
                    ],
                    "music": "strings",
                    "metadata": { "mood": "tense" }
                },
                { "id": "s2", "desc": "They leave the house" }
            ]
        }"#;

        let input: InputCreation = serde_json::from_str(json).unwrap();
        assert_eq!(input.id, "creation-1");

        let scenes: Vec<Scene> = input.scenes.into_iter().map(Scene::from).collect();
        assert_eq!(scenes.len(), 2);
        assert_eq!(scenes[0].scene_title, "Opening");
        assert_eq!(scenes[0].shots.len(), 1);
        assert_eq!(scenes[0].shots[0].image_prompt, "A dark room");
        assert_eq!(scenes[0].metadata, r#"{"mood":"tense"}"#);
        assert_eq!(scenes[1].desc, "They leave the house");
        assert!(scenes[1].metadata.is_empty());
    }
}
