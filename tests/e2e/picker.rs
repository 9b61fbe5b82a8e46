use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

#[test]
fn test_open_picker_lists_directory() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.create_file("alpha.txt", "a").unwrap();
    harness.create_file("beta.md", "b").unwrap();
    std::fs::create_dir(harness.project_dir().join("sub")).unwrap();

    harness
        .send_key(KeyCode::Char('o'), KeyModifiers::CONTROL)
        .unwrap();
    harness.assert_screen_contains("Open:");
    harness.assert_screen_contains("sub/");
    harness.assert_screen_contains("alpha.txt");
    harness.assert_screen_contains("beta.md");
}

#[test]
fn test_save_picker_cycles_filters() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.create_file("keep.txt", "").unwrap();
    harness.create_file("skip.md", "").unwrap();
    harness
        .send_key(KeyCode::Char('n'), KeyModifiers::CONTROL)
        .unwrap();
    harness
        .send_key(
            KeyCode::Char('s'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        )
        .unwrap();

    harness.assert_screen_contains("Filter: Text files (*.txt)");
    harness.assert_screen_contains("keep.txt");
    harness.assert_screen_not_contains("skip.md");

    harness
        .send_key(KeyCode::Char('f'), KeyModifiers::CONTROL)
        .unwrap();
    harness.assert_screen_contains("Filter: All files (*.*)");
    harness.assert_screen_contains("skip.md");
}

#[test]
fn test_tab_completion_and_prompt_editing() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.create_file("alpha.txt", "from alpha").unwrap();

    harness
        .send_key(KeyCode::Char('o'), KeyModifiers::CONTROL)
        .unwrap();
    harness.type_text("al").unwrap();
    harness.send_key(KeyCode::Tab, KeyModifiers::NONE).unwrap();
    harness.assert_screen_contains("Open: alpha.txt");

    harness
        .send_key(KeyCode::Backspace, KeyModifiers::NONE)
        .unwrap();
    harness.assert_screen_contains("Open: alpha.tx");
    harness.assert_screen_not_contains("Open: alpha.txt");
    harness.type_text("t").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    assert_eq!(harness.get_buffer_content().as_deref(), Some("from alpha"));
}

#[test]
fn test_picker_descends_into_directories() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    std::fs::create_dir(harness.project_dir().join("docs")).unwrap();
    std::fs::write(harness.project_dir().join("docs").join("plan.txt"), "plan").unwrap();

    harness
        .send_key(KeyCode::Char('o'), KeyModifiers::CONTROL)
        .unwrap();
    harness.type_text("docs").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert!(harness.editor().is_picking());
    harness.assert_screen_contains("plan.txt");

    // Pick with the arrow keys
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.get_buffer_content().as_deref(), Some("plan"));
}

#[test]
fn test_shortcuts_are_ignored_while_picking() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .send_key(KeyCode::Char('o'), KeyModifiers::CONTROL)
        .unwrap();
    harness
        .send_key(KeyCode::Char('n'), KeyModifiers::CONTROL)
        .unwrap();
    harness
        .send_key(KeyCode::Char('q'), KeyModifiers::CONTROL)
        .unwrap();
    assert!(harness.editor().is_picking());
    assert!(harness.editor().tabs().is_empty());
    assert!(!harness.should_quit());
}

/// A path longer than the popup scrolls so its end and the cursor stay visible
#[test]
fn test_long_input_shows_its_tail() {
    let mut harness = EditorTestHarness::new(40, 14).unwrap();
    harness
        .send_key(KeyCode::Char('o'), KeyModifiers::CONTROL)
        .unwrap();
    harness
        .type_text("deeply/nested/directory/structure/notes-final.txt")
        .unwrap();

    harness.assert_screen_contains("notes-final.txt");
    harness.assert_screen_not_contains("Open: deeply");
    assert_eq!(
        harness.editor().picker().unwrap().input(),
        "deeply/nested/directory/structure/notes-final.txt"
    );

    harness.send_key(KeyCode::Home, KeyModifiers::NONE).unwrap();
    harness.assert_screen_contains("Open: deeply");
}
