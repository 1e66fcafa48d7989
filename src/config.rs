//! Shared configuration for the scene editor.
//!
//! These constants are owned here rather than by the editor so the embedding
//! form and the editor agree on the same limits.

/// Hard cap on the number of scenes in one creation.
///
/// A split that would exceed this is rejected with a user-visible notice and
/// the sequence is left unchanged.
pub const MAX_SCENES_COUNT: usize = 20;

/// Advisory minimum length (in chars) for a non-empty scene description.
///
/// Descriptions below this show a validation hint in the UI. This never
/// blocks editing or submission.
pub const MIN_DESC_LENGTH: usize = 20;

/// Fixed notice text emitted when a split is rejected at the scene cap.
pub const SCENE_LIMIT_MESSAGE: &str =
    "You have reached the maximum number of scenes for this creation";
