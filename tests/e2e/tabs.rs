use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

fn new_tab(harness: &mut EditorTestHarness) {
    harness
        .send_key(KeyCode::Char('n'), KeyModifiers::CONTROL)
        .unwrap();
}

#[test]
fn test_two_tabs_keep_separate_content() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();

    new_tab(&mut harness);
    harness.type_text("first body").unwrap();
    new_tab(&mut harness);
    harness.type_text("second body").unwrap();

    let tab_row = harness.screen_row_text(1);
    assert_eq!(tab_row.matches("Untitled").count(), 2);
    harness.assert_screen_contains("second body");
    harness.assert_screen_not_contains("first body");

    harness
        .send_key(KeyCode::PageUp, KeyModifiers::CONTROL)
        .unwrap();
    harness.assert_screen_contains("first body");
    harness.assert_screen_not_contains("second body");

    let tabs = harness.editor().tabs();
    let contents: Vec<String> = tabs.iter().map(|t| t.buffer.content()).collect();
    assert_eq!(contents, vec!["first body", "second body"]);
}

#[test]
fn test_tab_cycling_wraps() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    new_tab(&mut harness);
    harness.type_text("one").unwrap();
    new_tab(&mut harness);
    harness.type_text("two").unwrap();

    harness
        .send_key(KeyCode::PageDown, KeyModifiers::CONTROL)
        .unwrap();
    assert_eq!(harness.get_buffer_content().as_deref(), Some("one"));
    harness
        .send_key(KeyCode::PageDown, KeyModifiers::CONTROL)
        .unwrap();
    assert_eq!(harness.get_buffer_content().as_deref(), Some("two"));
}

/// Saving one tab leaves every other tab untouched
#[test]
fn test_save_touches_only_active_tab() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    let a = harness.create_file("a.txt", "aaa").unwrap();
    let b = harness.create_file("b.txt", "bbb").unwrap();
    harness.editor_mut().open_file(&a).unwrap();
    harness.editor_mut().open_file(&b).unwrap();
    new_tab(&mut harness);
    harness.type_text("loose").unwrap();

    // Back to b.txt, edit, save
    harness
        .send_key(KeyCode::PageUp, KeyModifiers::CONTROL)
        .unwrap();
    harness.type_text("+").unwrap();
    harness
        .send_key(KeyCode::Char('s'), KeyModifiers::CONTROL)
        .unwrap();

    assert_eq!(std::fs::read_to_string(&a).unwrap(), "aaa");
    assert_eq!(std::fs::read_to_string(&b).unwrap(), "+bbb");

    let labels: Vec<String> = harness.editor().tabs().iter().map(|t| t.label()).collect();
    assert_eq!(
        labels,
        vec![
            a.display().to_string(),
            b.display().to_string(),
            "Untitled".to_string()
        ]
    );
}

#[test]
fn test_many_tabs_keep_active_visible() {
    let mut harness = EditorTestHarness::new(40, 12).unwrap();
    for _ in 0..8 {
        new_tab(&mut harness);
    }
    harness.type_text("last").unwrap();
    assert_eq!(harness.editor().tabs().len(), 8);
    harness.assert_screen_contains("Untitled");
    harness.assert_screen_contains("last");
}
