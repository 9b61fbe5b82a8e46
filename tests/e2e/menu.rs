use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

#[test]
fn test_file_menu_lists_commands_with_accelerators() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.assert_screen_contains("File");
    harness.assert_screen_not_contains("Ctrl+Shift+S");

    harness.send_key(KeyCode::F(10), KeyModifiers::NONE).unwrap();
    assert!(harness.editor().menu().is_open());
    for text in [
        "Open", "Ctrl+O", "Create", "Ctrl+N", "Save", "Ctrl+S", "Save As", "Ctrl+Shift+S",
        "Quit", "Ctrl+Q",
    ] {
        harness.assert_screen_contains(text);
    }

    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();
    assert!(!harness.editor().menu().is_open());
    harness.assert_screen_not_contains("Ctrl+Shift+S");
}

#[test]
fn test_menu_create_then_save_as() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();

    // File > Create
    harness
        .send_key(KeyCode::Char('f'), KeyModifiers::ALT)
        .unwrap();
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.editor().tabs().len(), 1);
    assert!(!harness.editor().menu().is_open());

    // File > Save As
    harness.send_key(KeyCode::F(10), KeyModifiers::NONE).unwrap();
    for _ in 0..3 {
        harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    }
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert!(harness.editor().is_picking());
    harness.assert_screen_contains("Save As");
}

#[test]
fn test_disabled_save_does_nothing() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.send_key(KeyCode::F(10), KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    assert!(harness.editor().menu().is_open());
    assert!(!harness.editor().is_picking());
}

#[test]
fn test_accelerator_works_with_menu_open() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.send_key(KeyCode::F(10), KeyModifiers::NONE).unwrap();
    harness
        .send_key(KeyCode::Char('o'), KeyModifiers::CONTROL)
        .unwrap();
    assert!(!harness.editor().menu().is_open());
    assert!(harness.editor().is_picking());
}

#[test]
fn test_menu_quit() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.send_key(KeyCode::F(10), KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Up, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert!(harness.should_quit());
}
