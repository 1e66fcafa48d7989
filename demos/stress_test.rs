//! Stress test suite for the scene editor.
//!
//! Covers: structural churn throughput and invariant preservation.
//!
//! Run with: cargo run --release --example stress_test

use scenedraft::{Scene, SceneEditor};
use std::time::Instant;

fn main() {
    println!("========================================");
    println!(" Scenedraft Stress Suite");
    println!("========================================\n");

    test_structural_churn(100_000);
    test_split_losslessness(5_000);
}

// -----------------------------------------------------------------------------
// 1. Structural churn (split/merge/delete throughput)
// -----------------------------------------------------------------------------
fn test_structural_churn(cycles: usize) {
    println!("Test: Structural churn ({} split/merge cycles)", cycles);

    let scenes = (0..50)
        .map(|i| {
            Scene::new(i.to_string())
                .with_desc("A long paragraph describing the scene in enough detail to split")
        })
        .collect();
    let mut editor = SceneEditor::from_scenes(scenes).with_max_scenes(200);

    let start = Instant::now();
    for i in 0..cycles {
        let index = i % 50;
        editor.split_scene(index, 6).unwrap();
        editor.merge_scene(index + 1).unwrap();
    }
    let duration = start.elapsed();

    println!("   Cycles:           {}", cycles);
    println!("   Total Time:       {:?}", duration);
    println!(
        "   Throughput:       {:.0} cycles/sec",
        cycles as f64 / duration.as_secs_f64()
    );
    println!(
        "   Scene Count:      {} (Expected: 50)",
        editor.scene_count()
    );
    println!(
        "   Revision:         {} (Expected: {})",
        editor.revision(),
        cycles * 2
    );
    println!("   [Analysis]: Every cycle must leave the list size unchanged.\n");
}

// -----------------------------------------------------------------------------
// 2. Split losslessness under churn
// -----------------------------------------------------------------------------
fn test_split_losslessness(rounds: usize) {
    println!("Test: Split/merge losslessness ({} rounds)", rounds);

    let original = "The hero crosses the ruined bridge under a red sky";
    let char_len = original.chars().count();
    let mut failures = 0usize;

    let start = Instant::now();
    for round in 0..rounds {
        let caret = round % (char_len + 1);
        let mut editor =
            SceneEditor::from_scenes(vec![Scene::new("0").with_desc(original)]);
        editor.split_scene(0, caret).unwrap();
        editor.merge_scene(1).unwrap();
        if editor.scenes()[0].desc != original {
            failures += 1;
        }
    }
    let duration = start.elapsed();

    println!("   Rounds:           {}", rounds);
    println!("   Total Time:       {:?}", duration);
    println!("   Failures:         {}", failures);
    println!("   [Analysis]: Split followed by merge must reconstruct the text.\n");
}
