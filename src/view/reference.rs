//! Unit reference overlay.
//!
//! Lists the common units of every category, with the current category
//! highlighted. Toggled by 'u', dismissed by 'Esc' or 'u'.

use super::constants::{REFERENCE_POPUP_HEIGHT_PERCENT, REFERENCE_POPUP_WIDTH_PERCENT};
use super::helpers::{centered_rect, pad_to_width};
use super::styles::PanelStyles;
use crate::model::{reference_units, Category};
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Width of the category name column.
const CATEGORY_COLUMN_WIDTH: usize = 13;

/// Render the unit reference overlay centered on the screen.
pub fn render_reference_overlay(frame: &mut Frame, current: Category, styles: &PanelStyles) {
    let popup_area = centered_rect(
        REFERENCE_POPUP_WIDTH_PERCENT,
        REFERENCE_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    frame.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(reference_lines(current, styles))
        .block(
            Block::default()
                .title(" Unit Reference ")
                .borders(Borders::ALL)
                .border_style(styles.focused_border),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}

/// One line per category: `Name  unit, unit, ...`.
fn reference_lines(current: Category, styles: &PanelStyles) -> Vec<Line<'static>> {
    Category::ALL
        .iter()
        .map(|&category| {
            let name_style = if category == current {
                styles.selected
            } else {
                styles.section_header
            };
            Line::from(vec![
                Span::styled(
                    format!(" {}", pad_to_width(category.as_str(), CATEGORY_COLUMN_WIDTH)),
                    name_style,
                ),
                Span::styled(reference_units(category).join(", "), styles.muted),
            ])
        })
        .collect()
}
