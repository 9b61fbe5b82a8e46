use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

fn save_as(harness: &mut EditorTestHarness) {
    harness
        .send_key(
            KeyCode::Char('s'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        )
        .unwrap();
}

#[test]
fn test_save_as_cancel_writes_nothing() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .send_key(KeyCode::Char('n'), KeyModifiers::CONTROL)
        .unwrap();
    harness.type_text("draft").unwrap();

    save_as(&mut harness);
    harness.assert_screen_contains("Save As");
    harness.type_text("x.txt").unwrap();
    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();

    assert!(!harness.project_dir().join("x.txt").exists());
    assert_eq!(harness.active_label().as_deref(), Some("Untitled"));
    assert_eq!(harness.get_buffer_content().as_deref(), Some("draft"));
    harness.assert_screen_contains("Canceled");
}

#[test]
fn test_save_as_renames_after_write() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    let original = harness.create_file("a.txt", "alpha").unwrap();
    harness.editor_mut().open_file(&original).unwrap();
    harness.render().unwrap();

    save_as(&mut harness);
    // The picker starts next to the file with its name filled in
    harness.assert_screen_contains("Save as: a.txt");
    for _ in 0.."a.txt".len() {
        harness
            .send_key(KeyCode::Backspace, KeyModifiers::NONE)
            .unwrap();
    }
    harness.type_text("b.txt").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    let copy = harness.project_dir().join("b.txt");
    assert_eq!(std::fs::read_to_string(&copy).unwrap(), "alpha");
    assert_eq!(std::fs::read_to_string(&original).unwrap(), "alpha");
    assert_eq!(harness.active_label(), Some(copy.display().to_string()));
    assert_eq!(harness.editor().tabs().len(), 1);
}

#[test]
fn test_failed_save_as_keeps_label_and_reports() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .send_key(KeyCode::Char('n'), KeyModifiers::CONTROL)
        .unwrap();
    harness.type_text("text").unwrap();

    save_as(&mut harness);
    harness.type_text("missing/out.txt").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    assert!(!harness.editor().is_picking());
    assert_eq!(harness.active_label().as_deref(), Some("Untitled"));
    assert!(harness.editor().status_is_error());
    harness.assert_screen_contains("Cannot save");

    // Still usable afterwards
    harness.type_text("!").unwrap();
    assert_eq!(harness.get_buffer_content().as_deref(), Some("text!"));
}

#[test]
fn test_shifted_letter_also_triggers_save_as() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .send_key(KeyCode::Char('n'), KeyModifiers::CONTROL)
        .unwrap();
    harness
        .send_key(KeyCode::Char('S'), KeyModifiers::CONTROL)
        .unwrap();
    assert!(harness.editor().is_picking());
    harness.assert_screen_contains("Save As");
}

#[test]
fn test_save_as_appends_default_extension() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .send_key(KeyCode::Char('n'), KeyModifiers::CONTROL)
        .unwrap();
    harness.type_text("quarterly").unwrap();

    save_as(&mut harness);
    harness.type_text("report").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    let saved = harness.project_dir().join("report.txt");
    assert_eq!(std::fs::read_to_string(&saved).unwrap(), "quarterly");
    assert!(!harness.project_dir().join("report").exists());
}

/// After the first Save As, plain Save writes to the chosen path directly
#[test]
fn test_save_after_save_as_skips_picker() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .send_key(KeyCode::Char('n'), KeyModifiers::CONTROL)
        .unwrap();
    harness.type_text("v1").unwrap();
    save_as(&mut harness);
    harness.type_text("doc.txt").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    harness.type_text(" v2").unwrap();
    harness
        .send_key(KeyCode::Char('s'), KeyModifiers::CONTROL)
        .unwrap();

    assert!(!harness.editor().is_picking());
    let saved = harness.project_dir().join("doc.txt");
    assert_eq!(std::fs::read_to_string(saved).unwrap(), "v1 v2");
}
