//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::{centered_rect, empty_line, key_value_line};
use super::styles::PanelStyles;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut table: (section, [(keys, description)]).
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("Tab", "Next panel"),
            ("Shift+Tab", "Previous panel"),
            ("j/↓", "Move down / next category"),
            ("k/↑", "Move up / previous category"),
            ("Space", "Select or deselect target unit"),
        ],
    ),
    (
        "Value",
        &[
            ("0-9 . - + e", "Edit value (Value panel)"),
            ("Backspace", "Delete character"),
            ("←/→", "Move cursor"),
        ],
    ),
    (
        "Conversion",
        &[
            ("Enter", "Convert now"),
            ("s", "Swap source and first target"),
            ("r", "Toggle real-time conversion"),
            ("1-5", "Apply preset"),
        ],
    ),
    (
        "History",
        &[
            ("x", "Clear history"),
            ("d", "Export to conversion_history.txt"),
        ],
    ),
    (
        "Application",
        &[
            ("u", "Toggle unit reference"),
            ("?", "Show help overlay"),
            ("Esc", "Close overlay"),
            ("q/Ctrl+c", "Quit"),
        ],
    ),
];

/// Render the help overlay centered on the screen.
///
/// The overlay is centered on the screen with a border and dismissal hint.
pub fn render_help_overlay(frame: &mut Frame, styles: &PanelStyles) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.focused_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        styles.muted.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Build the help content lines grouped by category.
fn build_help_content(styles: &PanelStyles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, (section, keys)) in SHORTCUTS.iter().enumerate() {
        if index > 0 {
            lines.push(empty_line());
        }
        lines.push(Line::from(Span::styled(*section, styles.section_header)));
        for (key, description) in keys.iter() {
            lines.push(key_value_line(key, description, styles.key, styles.muted));
        }
    }
    lines
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
