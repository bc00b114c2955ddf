//! Panel styling configuration.
//!
//! Colors for focus borders, selections, results and errors, switched off
//! entirely by `--no-color` or `NO_COLOR`.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== PanelStyles =====

/// Styles shared by every panel of the converter screen.
///
/// With colors disabled, emphasis falls back to modifiers (bold, reversed)
/// so focus and selection stay visible on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelStyles {
    /// Border of the focused panel.
    pub focused_border: Style,
    /// Border of unfocused panels.
    pub border: Style,
    /// Highlighted row in a list.
    pub cursor: Style,
    /// Selected unit (source, or checked target).
    pub selected: Style,
    /// Converted values.
    pub result: Style,
    /// Error text.
    pub error: Style,
    /// Hints and placeholders.
    pub muted: Style,
    /// Section headers in overlays.
    pub section_header: Style,
    /// Key labels in overlays and the preset bar.
    pub key: Style,
    /// Realtime indicator when on.
    pub realtime_on: Style,
    /// Realtime indicator when off.
    pub realtime_off: Style,
}

impl PanelStyles {
    /// Create styles honoring the color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                focused_border: Style::default().fg(Color::Cyan),
                border: Style::default().fg(Color::DarkGray),
                cursor: Style::default().add_modifier(Modifier::REVERSED),
                selected: Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                result: Style::default().fg(Color::Green),
                error: Style::default().fg(Color::Red),
                muted: Style::default().fg(Color::Gray),
                section_header: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                key: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                realtime_on: Style::default().fg(Color::Green),
                realtime_off: Style::default().fg(Color::Yellow),
            }
        } else {
            Self {
                focused_border: Style::default().add_modifier(Modifier::BOLD),
                border: Style::default(),
                cursor: Style::default().add_modifier(Modifier::REVERSED),
                selected: Style::default().add_modifier(Modifier::BOLD),
                result: Style::default(),
                error: Style::default().add_modifier(Modifier::BOLD),
                muted: Style::default(),
                section_header: Style::default().add_modifier(Modifier::BOLD),
                key: Style::default().add_modifier(Modifier::BOLD),
                realtime_on: Style::default(),
                realtime_off: Style::default(),
            }
        }
    }

    /// Border style for a panel depending on focus.
    pub fn border_for(&self, focused: bool) -> Style {
        if focused {
            self.focused_border
        } else {
            self.border
        }
    }
}

impl Default for PanelStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
