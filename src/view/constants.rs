//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the header line.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the preset bar in lines (border + two lines of buttons).
pub const PRESET_BAR_HEIGHT: u16 = 4;

/// Height of the status bar in lines.
///
/// Single line for status text and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the value input field (border + text).
pub const VALUE_INPUT_HEIGHT: u16 = 3;

/// Smallest height of the history panel (border + one entry).
pub const HISTORY_PANEL_MIN_HEIGHT: u16 = 3;

/// Width percentage of each unit column (category, from, to).
pub const UNIT_COLUMN_PERCENT: u16 = 22;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width percentage for the unit reference popup.
pub const REFERENCE_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for the unit reference popup.
pub const REFERENCE_POPUP_HEIGHT_PERCENT: u16 = 60;
