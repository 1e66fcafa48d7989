//! Scripted editing session walkthrough.
//!
//! Run with: cargo run --example editing_session

use scenedraft::{Key, PlainCursor, Scene, SceneEditor};

fn print_scenes(label: &str, editor: &SceneEditor) {
    println!("{} (focus -> {}):", label, editor.focused_index());
    for (i, scene) in editor.scenes().iter().enumerate() {
        println!("  [{}] {:?}", i, scene.desc);
    }
    println!();
}

fn main() {
    println!("========================================");
    println!(" Scenedraft Editing Session");
    println!("========================================\n");

    let scenes = vec![Scene::new("0")
        .with_title("Opening")
        .with_desc("The hero wakes up in a strange place. They walk to the window.")];
    let mut editor = SceneEditor::from_scenes(scenes);
    print_scenes("Initial draft", &editor);

    // Enter with the caret after the first sentence
    let text = editor.scenes()[0].desc.clone();
    let caret = text.chars().position(|c| c == '.').map(|i| i + 1).unwrap_or(0);
    let cursor = PlainCursor::new(text, caret);
    editor.handle_key(0, Key::Enter, &cursor).unwrap();
    print_scenes("After Enter at the sentence break", &editor);

    // Type into the new scene
    editor
        .edit_scene(1, "They walk to the window and look outside.".to_string())
        .unwrap();
    print_scenes("After rewriting scene 1", &editor);

    // Arrow up from the start of scene 1
    let cursor = PlainCursor::at_start(editor.scenes()[1].desc.clone());
    editor.handle_key(1, Key::ArrowUp, &cursor).unwrap();
    print_scenes("After ArrowUp at caret-start", &editor);

    // Backspace at the start of scene 1 folds it back into scene 0
    let cursor = PlainCursor::at_start(editor.scenes()[1].desc.clone());
    editor.handle_key(1, Key::Backspace, &cursor).unwrap();
    print_scenes("After Backspace at caret-start of scene 1", &editor);

    // Drive the editor into the cap to show the rejection notice
    let max = editor.max_scenes();
    while editor.scene_count() < max {
        let index = editor.scene_count() - 1;
        let end = editor.scenes()[index].desc.chars().count();
        editor.split_scene(index, end).unwrap();
    }
    println!("Filled to the cap: {} scenes", editor.scene_count());

    let outcome = editor.split_scene(0, 0).unwrap();
    match outcome.notice {
        Some(notice) => println!("Split rejected with notice: {:?}", notice.message()),
        None => println!("Unexpected: split was not rejected"),
    }
    println!("Scene count unchanged: {}", editor.scene_count());
}
