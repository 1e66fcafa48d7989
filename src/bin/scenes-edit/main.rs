//! CLI tool to replay a JSON edit script against an exported scene list.
//!
//! Usage:
//!   scenes-edit --input creation.json --script edits.json [--output scenes.json] [--validate] [--stats]
//!
//! The script is an array of tagged actions:
//!   [{"action": "split", "index": 0, "caret": 5}, {"action": "merge", "index": 1}]

mod input;
mod transform;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use scenedraft::{
    scenes_from_json, scenes_to_json, EditAction, IdStrategy, Scene, SceneEditor,
    MAX_SCENES_COUNT,
};

use input::InputCreation;

#[derive(Parser, Debug)]
#[command(
    name = "scenes-edit",
    about = "Replay a JSON edit script against an exported scene list",
    version
)]
struct Args {
    /// Input JSON file path (creation export with a `scenes` array, or a
    /// bare scene array such as a previous run's output)
    #[arg(short, long)]
    input: PathBuf,

    /// Edit script file path (JSON array of actions)
    #[arg(short, long)]
    script: PathBuf,

    /// Output file path (defaults to input path with .edited.json extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Scene cap to enforce while editing
    #[arg(long, default_value_t = MAX_SCENES_COUNT)]
    max_scenes: usize,

    /// Assign positional ids to split-created scenes (legacy draft format)
    #[arg(long, default_value = "false")]
    positional_ids: bool,

    /// Validate output invariants after replay
    #[arg(long, default_value = "false")]
    validate: bool,

    /// Print statistics about the replay
    #[arg(long, default_value = "false")]
    stats: bool,
}

/// Parses the input JSON as a creation export, falling back to a bare scene
/// array (the format this tool writes). Returns the scenes plus the creation
/// id/title when the input carried them.
fn load_scenes(json: &str) -> Result<(Vec<Scene>, Option<(String, String)>)> {
    if let Ok(creation) = serde_json::from_str::<InputCreation>(json) {
        let meta = (creation.id, creation.title);
        let scenes = creation.scenes.into_iter().map(Scene::from).collect();
        return Ok((scenes, Some(meta)));
    }
    let scenes = scenes_from_json(json)?;
    Ok((scenes, None))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Validate inputs exist
    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }
    if !args.script.exists() {
        anyhow::bail!("Script file does not exist: {}", args.script.display());
    }

    // 2. Read and parse the input
    let json_content =
        std::fs::read_to_string(&args.input).context("Failed to read input file")?;
    let (scenes, creation_meta) =
        load_scenes(&json_content).context("Failed to parse input JSON")?;
    let scenes_before = scenes.len();

    // 3. Read and parse the edit script
    let script_content =
        std::fs::read_to_string(&args.script).context("Failed to read script file")?;
    let actions: Vec<EditAction> =
        serde_json::from_str(&script_content).context("Failed to parse edit script")?;

    // 4. Build the editor
    let id_strategy = if args.positional_ids {
        IdStrategy::Positional
    } else {
        IdStrategy::Uuid
    };
    let mut editor = SceneEditor::from_scenes(scenes)
        .with_max_scenes(args.max_scenes)
        .with_id_strategy(id_strategy);

    // 5. Replay the script
    let total_actions = actions.len();
    let mut notices = 0usize;
    let mut noops = 0usize;
    for (step, action) in actions.into_iter().enumerate() {
        let outcome = editor
            .apply(action)
            .with_context(|| format!("Script step {} failed", step))?;
        if outcome.notice.is_some() {
            notices += 1;
            eprintln!(
                "  step {}: rejected - {}",
                step,
                outcome.notice.unwrap().message()
            );
        } else if !outcome.changed {
            noops += 1;
        }
    }

    // 6. Optional validation
    if args.validate {
        let count = editor.scene_count();
        if count == 0 || count > args.max_scenes {
            anyhow::bail!(
                "Validation failed: scene count {} outside 1..={}",
                count,
                args.max_scenes
            );
        }
        if !args.positional_ids {
            let mut ids: Vec<&str> =
                editor.scenes().iter().map(|s| s.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            if ids.len() != count {
                anyhow::bail!("Validation failed: duplicate scene ids after replay");
            }
        }
        println!("✓ Validation passed!");
    }

    // 7. Determine output path
    let output_path = args.output.unwrap_or_else(|| {
        let mut path = args.input.clone();
        path.set_extension("edited.json");
        path
    });

    // 8. Write output
    let output_json =
        scenes_to_json(editor.scenes()).context("Failed to serialize edited scenes")?;
    std::fs::write(&output_path, &output_json).context("Failed to write output file")?;

    // 9. Optional stats
    if args.stats {
        println!();
        println!("Replay statistics:");
        if let Some((id, title)) = &creation_meta {
            println!("  Creation ID: {}", id);
            println!("  Title:       {}", title);
        }
        println!();
        println!("  Actions:       {}", total_actions);
        println!("  No-ops:        {}", noops);
        println!("  Notices:       {}", notices);
        println!();
        println!("  Scenes before: {}", scenes_before);
        println!("  Scenes after:  {}", editor.scene_count());
        println!("  Revision:      {}", editor.revision());
    }

    println!();
    println!(
        "Successfully replayed {} → {}",
        args.input.display(),
        output_path.display()
    );

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_scenes_from_creation_export() {
        let json = r#"{
            "id": "creation-1",
            "title": "My Movie",
            "scenes": [{"id": "0", "desc": "Hello world"}]
        }"#;
        let (scenes, meta) = load_scenes(json).unwrap();
        assert_eq!(scenes.len(), 1);
        assert_eq!(scenes[0].desc, "Hello world");
        assert_eq!(
            meta,
            Some(("creation-1".to_string(), "My Movie".to_string()))
        );
    }

    #[test]
    fn test_load_scenes_from_bare_scene_array() {
        let json = r#"[
            {"id": "0", "scene_title": "", "desc": "Hello", "shots": [], "metadata": ""}
        ]"#;
        let (scenes, meta) = load_scenes(json).unwrap();
        assert_eq!(scenes.len(), 1);
        assert_eq!(scenes[0].desc, "Hello");
        assert!(meta.is_none());
    }

    #[test]
    fn test_load_scenes_rejects_garbage() {
        assert!(load_scenes("not json").is_err());
    }
}
