//! Tests for help overlay widget

use super::*;
use crate::view::test_support::buffer_to_string;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn render(width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| render_help_overlay(frame, &PanelStyles::default()))
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

#[test]
fn render_help_overlay_shows_bordered_title() {
    let text = render(80, 40);
    assert!(text.contains("Keyboard Shortcuts"));
    assert!(text.contains('┌') && text.contains('┘'));
}

#[test]
fn render_help_overlay_lists_every_section() {
    let text = render(100, 50);
    for section in ["Navigation", "Value", "Conversion", "History", "Application"] {
        assert!(text.contains(section), "missing section {section}");
    }
}

#[test]
fn render_help_overlay_documents_conversion_keys() {
    let text = render(100, 50);
    assert!(text.contains("Swap source and first target"));
    assert!(text.contains("Toggle real-time conversion"));
    assert!(text.contains("conversion_history.txt"));
}

#[test]
fn render_help_overlay_shows_dismiss_hint() {
    let text = render(80, 40);
    assert!(text.contains("Press Esc or ? to close"));
}

#[test]
fn help_content_has_one_line_per_shortcut_plus_headers() {
    let lines = build_help_content(&PanelStyles::default());
    let shortcuts: usize = SHORTCUTS.iter().map(|(_, keys)| keys.len()).sum();
    let headers = SHORTCUTS.len();
    let separators = SHORTCUTS.len() - 1;
    assert_eq!(lines.len(), shortcuts + headers + separators);
}
