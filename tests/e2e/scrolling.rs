use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

/// Typing past the right edge scrolls the view so the new text stays visible
#[test]
fn test_long_line_scrolls_horizontally() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness
        .send_key(KeyCode::Char('n'), KeyModifiers::CONTROL)
        .unwrap();

    let text = format!("{}TAILMARK", "a".repeat(60));
    harness.type_text(&text).unwrap();
    harness.assert_screen_contains("TAILMARK");
    harness.assert_screen_contains("Ln 1, Col 69");

    // Back to the start of the line: the head is shown again
    harness.send_key(KeyCode::Home, KeyModifiers::NONE).unwrap();
    harness.assert_screen_not_contains("TAILMARK");
    assert!(harness.screen_row_text(2).starts_with("  1 aaaa"));

    harness.send_key(KeyCode::End, KeyModifiers::NONE).unwrap();
    harness.assert_screen_contains("TAILMARK");
}

/// Each tab keeps its own horizontal scroll
#[test]
fn test_horizontal_scroll_is_per_tab() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness
        .send_key(KeyCode::Char('n'), KeyModifiers::CONTROL)
        .unwrap();
    harness
        .type_text(&format!("{}END", "x".repeat(70)))
        .unwrap();
    harness
        .send_key(KeyCode::Char('n'), KeyModifiers::CONTROL)
        .unwrap();
    harness.type_text("short").unwrap();
    harness.assert_screen_contains("short");

    harness
        .send_key(KeyCode::PageUp, KeyModifiers::CONTROL)
        .unwrap();
    harness.assert_screen_contains("END");
}

#[test]
fn test_many_lines_scroll_vertically() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness
        .send_key(KeyCode::Char('n'), KeyModifiers::CONTROL)
        .unwrap();
    for i in 1..=30 {
        harness.type_text(&format!("row{i}\n")).unwrap();
    }
    harness.type_text("bottom").unwrap();
    harness.assert_screen_contains("bottom");
    harness.assert_screen_not_contains("row1 ");
}

/// Tab inserts a literal tab, drawn up to the next tab stop
#[test]
fn test_tab_key_inserts_tab_character() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness
        .send_key(KeyCode::Char('n'), KeyModifiers::CONTROL)
        .unwrap();
    harness.send_key(KeyCode::Tab, KeyModifiers::NONE).unwrap();
    harness.type_text("x").unwrap();

    assert_eq!(harness.get_buffer_content().as_deref(), Some("\tx"));
    assert!(harness.screen_row_text(2).starts_with("  1     x"));
    harness.assert_screen_contains("Ln 1, Col 6");
}
