//! Converter screen layout rendering.
//!
//! Pure layout logic: header, preset bar, the four converter columns
//! (category + value, source units, target units, results), history and
//! status bar, with overlays drawn last.

use crate::model::{Category, PRESETS};
use crate::state::{AppState, FocusPane};
use crate::view::constants::{
    HEADER_HEIGHT, HISTORY_PANEL_MIN_HEIGHT, PRESET_BAR_HEIGHT, STATUS_BAR_HEIGHT,
    UNIT_COLUMN_PERCENT, VALUE_INPUT_HEIGHT,
};
use crate::view::helpers::pad_to_width;
use crate::view::{help, reference, PanelStyles};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render the full converter screen.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &PanelStyles) {
    let area = frame.area();
    let history_height = history_panel_height(state.history_limit, area.height);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(PRESET_BAR_HEIGHT),
            Constraint::Min(0), // Converter columns
            Constraint::Length(history_height),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    render_header(frame, rows[0], state, styles);
    render_preset_bar(frame, rows[1], styles);
    render_converter(frame, rows[2], state, styles);
    render_history(frame, rows[3], state, styles);
    render_status_bar(frame, rows[4], state, styles);

    if state.reference_visible {
        reference::render_reference_overlay(frame, state.session().category(), styles);
    }
    if state.help_visible {
        help::render_help_overlay(frame, styles);
    }
}

/// Height of the history panel: one row per displayed entry plus borders,
/// capped at a third of the screen.
fn history_panel_height(history_limit: usize, total_height: u16) -> u16 {
    u16::try_from(history_limit)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(total_height / 3)
        .max(HISTORY_PANEL_MIN_HEIGHT)
}

fn panel_block<'a>(title: &'a str, focused: bool, styles: &PanelStyles) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(styles.border_for(focused))
}

/// Header line: application name, category and trigger mode.
fn render_header(frame: &mut Frame, area: Rect, state: &AppState, styles: &PanelStyles) {
    let (mode, mode_style) = if state.session().realtime() {
        ("● Real-time", styles.realtime_on)
    } else {
        ("○ Manual (Enter to convert)", styles.realtime_off)
    };

    let line = Line::from(vec![
        Span::styled(" Unit Converter", styles.section_header),
        Span::raw(format!(" │ {} │ ", state.session().category())),
        Span::styled(mode, mode_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Preset buttons with their number keys.
fn render_preset_bar(frame: &mut Frame, area: Rect, styles: &PanelStyles) {
    let spans: Vec<Span> = PRESETS
        .iter()
        .enumerate()
        .flat_map(|(i, preset)| {
            [
                Span::styled(format!("[{}]", i + 1), styles.key),
                Span::raw(format!(" {}  ", preset.name)),
            ]
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .block(panel_block(" Presets ", false, styles))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_converter(frame: &mut Frame, area: Rect, state: &AppState, styles: &PanelStyles) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(UNIT_COLUMN_PERCENT),
            Constraint::Percentage(UNIT_COLUMN_PERCENT),
            Constraint::Percentage(UNIT_COLUMN_PERCENT),
            Constraint::Min(0), // Results
        ])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(VALUE_INPUT_HEIGHT)])
        .split(columns[0]);

    render_category_list(frame, left[0], state, styles);
    render_value_input(frame, left[1], state, styles);
    render_from_list(frame, columns[1], state, styles);
    render_to_list(frame, columns[2], state, styles);
    render_results(frame, columns[3], state, styles);
}

/// Render a list with the cursor row kept in view.
fn render_list(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    items: Vec<ListItem>,
    cursor: usize,
    focused: bool,
    styles: &PanelStyles,
) {
    let highlight = if focused { styles.cursor } else { Style::default() };
    let list = List::new(items).block(block).highlight_style(highlight);
    let mut list_state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Marker and style for a row depending on whether it is selected.
fn marked(label: &str, selected: bool, marker: (&str, &str), styles: &PanelStyles) -> ListItem<'static> {
    let (on, off) = marker;
    if selected {
        ListItem::new(format!("{on}{label}")).style(styles.selected)
    } else {
        ListItem::new(format!("{off}{label}"))
    }
}

fn render_category_list(frame: &mut Frame, area: Rect, state: &AppState, styles: &PanelStyles) {
    let current = state.session().category();
    let items = Category::ALL
        .iter()
        .map(|c| marked(c.as_str(), *c == current, ("● ", "  "), styles))
        .collect();
    let focused = state.focus == FocusPane::Category;
    render_list(
        frame,
        area,
        panel_block(" Category ", focused, styles),
        items,
        current.index(),
        focused,
        styles,
    );
}

fn render_value_input(frame: &mut Frame, area: Rect, state: &AppState, styles: &PanelStyles) {
    let focused = state.focus == FocusPane::Value;
    let text_style = if state.value_input.parse().is_some() {
        Style::default()
    } else {
        styles.error
    };

    let paragraph = Paragraph::new(Span::styled(state.value_input.text().to_string(), text_style))
        .block(panel_block(" Value ", focused, styles));
    frame.render_widget(paragraph, area);

    if focused && !state.help_visible && !state.reference_visible {
        let offset = state.value_input.text()[..state.value_input.cursor()].width() as u16;
        frame.set_cursor_position(Position::new(
            area.x.saturating_add(1).saturating_add(offset),
            area.y.saturating_add(1),
        ));
    }
}

fn render_from_list(frame: &mut Frame, area: Rect, state: &AppState, styles: &PanelStyles) {
    let from = state.session().from_unit();
    let items = state
        .units()
        .into_iter()
        .map(|u| marked(u, u == from, ("● ", "  "), styles))
        .collect();
    let focused = state.focus == FocusPane::From;
    render_list(
        frame,
        area,
        panel_block(" From ", focused, styles),
        items,
        state.from_cursor,
        focused,
        styles,
    );
}

fn render_to_list(frame: &mut Frame, area: Rect, state: &AppState, styles: &PanelStyles) {
    let targets = state.session().to_units();
    let items = state
        .units()
        .into_iter()
        .map(|u| {
            let checked = targets.iter().any(|t| t == u);
            marked(u, checked, ("[x] ", "[ ] "), styles)
        })
        .collect();
    let focused = state.focus == FocusPane::To;
    render_list(
        frame,
        area,
        panel_block(" To ", focused, styles),
        items,
        state.to_cursor,
        focused,
        styles,
    );
}

/// Results as `unit: value` rows with the values aligned, or the current
/// error or hint.
fn render_results(frame: &mut Frame, area: Rect, state: &AppState, styles: &PanelStyles) {
    let lines = if let Some(error) = &state.last_error {
        vec![Line::from(Span::styled(error.clone(), styles.error))]
    } else if state.results.is_empty() {
        vec![Line::from(Span::styled(results_hint(state), styles.muted))]
    } else {
        let label_width = state
            .results
            .iter()
            .map(|r| r.to_unit.width() + 2)
            .max()
            .unwrap_or(0);
        let mut lines: Vec<Line> = state
            .results
            .iter()
            .map(|r| {
                Line::from(vec![
                    Span::raw(pad_to_width(&format!("{}:", r.to_unit), label_width)),
                    Span::styled(format!("{:.4}", r.value), styles.result),
                ])
            })
            .collect();
        if state.dirty && !state.session().realtime() {
            lines.push(Line::from(Span::styled(
                "Inputs changed: press Enter",
                styles.muted,
            )));
        }
        lines
    };

    let paragraph = Paragraph::new(lines)
        .block(panel_block(" Results ", false, styles))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn results_hint(state: &AppState) -> &'static str {
    if state.session().to_units().is_empty() {
        "Select target units with Space"
    } else if !state.session().realtime() {
        "Press Enter to convert"
    } else {
        ""
    }
}

/// History panel: the last `history_limit` entries, newest first.
fn render_history(frame: &mut Frame, area: Rect, state: &AppState, styles: &PanelStyles) {
    let recent = state.session().history().recent(state.history_limit);
    let lines: Vec<Line> = if recent.is_empty() {
        vec![Line::from(Span::styled("No conversions yet", styles.muted))]
    } else {
        recent
            .into_iter()
            .rev()
            .map(|entry| Line::from(entry.to_string()))
            .collect()
    };

    let title = format!(" History (last {}, newest first) ", state.history_limit);
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(styles.border_for(state.focus == FocusPane::History)),
    );
    frame.render_widget(paragraph, area);
}

/// Context-sensitive keyboard hints for the focused panel.
fn build_keyboard_hints(focus: FocusPane) -> &'static str {
    match focus {
        FocusPane::Category => "↑/↓: category | Tab: next panel | 1-5: presets | ?: help | q: quit",
        FocusPane::Value => "Type a number | Enter: convert | Tab: next panel | ?: help",
        FocusPane::From => "↑/↓: source unit | s: swap | Tab: next panel | ?: help",
        FocusPane::To => "↑/↓: move | Space: select | Enter: convert | ?: help",
        FocusPane::History => "x: clear | d: export | Tab: next panel | ?: help",
    }
}

/// Status bar: the latest status message, otherwise keyboard hints.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &PanelStyles) {
    let line = match &state.status {
        Some(status) => Line::from(format!(" {status}")),
        None => Line::from(Span::styled(
            format!(" {}", build_keyboard_hints(state.focus)),
            styles.muted,
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
