//! Small rendering helpers shared by the overlays and panels.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

/// Display width of the key column in overlays.
pub const KEY_COLUMN_WIDTH: usize = 14;

/// An empty line.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}

/// Pad `text` with spaces to `width` terminal columns.
///
/// Arrow glyphs and other wide symbols are measured by display width, not
/// by byte length. Text already wider than `width` gets one trailing space.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let used = text.width();
    let padding = width.saturating_sub(used).max(1);
    format!("{text}{}", " ".repeat(padding))
}

/// Indented `key  description` line with the key column aligned.
pub fn key_value_line(
    key: &str,
    description: &str,
    key_style: Style,
    desc_style: Style,
) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {}", pad_to_width(key, KEY_COLUMN_WIDTH)), key_style),
        Span::styled(description.to_string(), desc_style),
    ])
}

/// Calculate a rect centered in `area` with the given percentage of its
/// width and height.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = scale(area.width, percent_x);
    let popup_height = scale(area.height, percent_y);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// `percent` of `length`, computed in `u32` so wide terminals cannot overflow.
fn scale(length: u16, percent: u16) -> u16 {
    let scaled = u32::from(length) * u32::from(percent.min(100)) / 100;
    u16::try_from(scaled).unwrap_or(length)
}
