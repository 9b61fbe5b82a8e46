use crate::common::fixtures::TestFixture;
use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

#[test]
fn test_empty_editor_shows_hint() {
    let harness = EditorTestHarness::new(80, 24).unwrap();
    harness.assert_screen_contains("No document open");
    harness.assert_screen_contains("Ctrl+N to create");
    assert!(harness.editor().tabs().is_empty());
}

/// Create, type, Save, pick a path: the file holds the text and the tab is renamed
#[test]
fn test_create_type_save_picks_path() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();

    harness
        .send_key(KeyCode::Char('n'), KeyModifiers::CONTROL)
        .unwrap();
    harness.assert_screen_contains("Untitled");

    harness.type_text("hello").unwrap();
    harness.assert_screen_contains("hello");
    harness.assert_screen_contains("Ln 1, Col 6");

    // Untitled: Save asks for a path
    harness
        .send_key(KeyCode::Char('s'), KeyModifiers::CONTROL)
        .unwrap();
    assert!(harness.editor().is_picking());
    harness.assert_screen_contains("Save as:");

    harness.type_text("hello.txt").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    let saved = harness.project_dir().join("hello.txt");
    assert!(!harness.editor().is_picking());
    assert_eq!(std::fs::read_to_string(&saved).unwrap(), "hello");
    assert_eq!(harness.active_label(), Some(saved.display().to_string()));
    assert!(!harness.project_dir().join("Untitled").exists());
    harness.assert_screen_contains("hello.txt");
    harness.assert_screen_not_contains("Untitled");
}

#[test]
fn test_open_shows_content_in_new_active_tab() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    let content = "line one\nline two\n";
    harness.create_file("notes.txt", content).unwrap();

    harness
        .send_key(KeyCode::Char('o'), KeyModifiers::CONTROL)
        .unwrap();
    harness.assert_screen_contains("Open:");
    harness.type_text("notes.txt").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    assert_eq!(harness.editor().tabs().len(), 1);
    assert_eq!(harness.get_buffer_content().as_deref(), Some(content));
    harness.assert_screen_contains("line one");
    harness.assert_screen_contains("line two");
    harness.assert_screen_contains("notes.txt");
}

#[test]
fn test_open_cancel_adds_nothing() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .send_key(KeyCode::Char('o'), KeyModifiers::CONTROL)
        .unwrap();
    harness.type_text("whatever").unwrap();
    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();

    assert!(!harness.editor().is_picking());
    assert!(harness.editor().tabs().is_empty());
    harness.assert_screen_contains("Canceled");
    harness.assert_screen_not_contains("Open:");
}

#[test]
fn test_open_requires_existing_file() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .send_key(KeyCode::Char('o'), KeyModifiers::CONTROL)
        .unwrap();
    harness.type_text("nope.txt").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    assert!(harness.editor().is_picking());
    harness.assert_screen_contains("File not found");
    assert!(harness.editor().tabs().is_empty());
}

/// A read failure becomes a notification; the editor keeps working
#[test]
fn test_open_unreadable_file_reports_error() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    std::fs::write(harness.project_dir().join("blob.bin"), [0xff, 0xfe, 0xfd]).unwrap();

    harness
        .send_key(KeyCode::Char('o'), KeyModifiers::CONTROL)
        .unwrap();
    harness.type_text("blob.bin").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    assert!(harness.editor().tabs().is_empty());
    assert!(harness.editor().status_is_error());
    assert!(harness
        .editor()
        .status_text()
        .unwrap()
        .contains("not valid UTF-8"));
    harness.assert_screen_contains("Cannot open");

    harness
        .send_key(KeyCode::Char('n'), KeyModifiers::CONTROL)
        .unwrap();
    assert_eq!(harness.editor().tabs().len(), 1);
}

#[test]
fn test_save_without_document_is_noop() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness
        .send_key(KeyCode::Char('s'), KeyModifiers::CONTROL)
        .unwrap();

    assert!(!harness.editor().is_picking());
    harness.assert_screen_contains("No document to save");
    let entries = std::fs::read_dir(harness.project_dir()).unwrap().count();
    assert_eq!(entries, 0);
}

#[test]
fn test_save_bound_tab_writes_in_place() {
    let fixture = TestFixture::new("draft.txt", "original").unwrap();
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.editor_mut().open_file(&fixture.path).unwrap();

    harness.type_text("X").unwrap();
    harness
        .send_key(KeyCode::Char('s'), KeyModifiers::CONTROL)
        .unwrap();

    assert!(!harness.editor().is_picking());
    assert_eq!(fixture.read_content().unwrap(), "Xoriginal");
    assert_eq!(
        harness.active_label(),
        Some(fixture.path.display().to_string())
    );
    harness.assert_screen_contains("Saved");
}

#[test]
fn test_open_then_save_preserves_bytes() {
    let content = "first\r\nsecond\r\n\r\n";
    let fixture = TestFixture::new("dos.txt", content).unwrap();
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.editor_mut().open_file(&fixture.path).unwrap();
    harness.render().unwrap();

    harness
        .send_key(KeyCode::Char('s'), KeyModifiers::CONTROL)
        .unwrap();
    assert_eq!(fixture.read_content().unwrap(), content);
}

#[test]
fn test_quit_shortcut() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    assert!(!harness.should_quit());
    harness
        .send_key(KeyCode::Char('q'), KeyModifiers::CONTROL)
        .unwrap();
    assert!(harness.should_quit());
}
