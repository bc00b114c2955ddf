//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state.
//! All state transitions are pure functions following Elm architecture.

use crate::engine::ConversionResult;
use crate::model::{units, Category, Preset};
use crate::state::history::DEFAULT_HISTORY_LIMIT;
use crate::state::session::SessionState;
use crate::state::value_input::{self, ValueInput};
use tracing::{debug, warn};

// ===== FocusPane =====

/// Which panel receives selection keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// Category selector.
    #[default]
    Category,
    /// Numeric value field.
    Value,
    /// Source unit list.
    From,
    /// Target unit multi-select.
    To,
    /// History list.
    History,
}

impl FocusPane {
    const ORDER: [FocusPane; 5] = [
        FocusPane::Category,
        FocusPane::Value,
        FocusPane::From,
        FocusPane::To,
        FocusPane::History,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|p| *p == self).unwrap_or(0)
    }

    /// Next panel in the cycle: Category → Value → From → To → History → Category.
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous panel in the cycle.
    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// Wraps the [`SessionState`] (domain) with UI-only state: focus, list
/// cursors, the value text buffer, the latest results and messages.
///
/// # Trigger policy
///
/// Every input change marks the state dirty. With realtime on, the
/// conversion runs immediately; with realtime off, it waits for
/// [`AppState::convert_now`].
///
/// Keystrokes in the value field only preview results. The typed value is
/// recorded in history once it is committed: Enter, focus leaving the
/// field, or any other input change.
#[derive(Debug, Clone)]
pub struct AppState {
    session: SessionState,

    /// Which panel currently has keyboard focus.
    pub focus: FocusPane,

    /// Text buffer of the value field.
    pub value_input: ValueInput,

    /// Highlighted row in the source unit list.
    pub from_cursor: usize,

    /// Highlighted row in the target unit list.
    pub to_cursor: usize,

    /// Results of the last successful conversion.
    pub results: Vec<ConversionResult>,

    /// Error shown in the results panel, if the last attempt failed.
    pub last_error: Option<String>,

    /// One-line message for the status bar.
    pub status: Option<String>,

    /// Whether the help overlay is visible.
    pub help_visible: bool,

    /// Whether the unit reference panel is visible.
    pub reference_visible: bool,

    /// Number of history entries displayed and exported.
    pub history_limit: usize,

    /// Inputs changed since the last conversion.
    pub dirty: bool,

    /// A previewed value that history has not recorded yet.
    value_pending: bool,
}

impl AppState {
    /// Create new AppState around a session.
    ///
    /// Runs the first conversion right away when realtime is on.
    pub fn new(session: SessionState) -> Self {
        let mut state = Self {
            value_input: ValueInput::from_value(session.value()),
            session,
            focus: FocusPane::default(),
            from_cursor: 0,
            to_cursor: 0,
            results: Vec::new(),
            last_error: None,
            status: None,
            help_visible: false,
            reference_visible: false,
            history_limit: DEFAULT_HISTORY_LIMIT,
            dirty: true,
            value_pending: false,
        };
        state.sync_cursors();
        if state.session.realtime() {
            state.run_conversion();
        }
        state
    }

    /// Get immutable reference to the session.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Units of the current category, in listing order.
    pub fn units(&self) -> Vec<&'static str> {
        units::units_for(self.session.category())
    }

    /// Move focus forward.
    pub fn next_focus(&mut self) {
        self.commit_value();
        self.focus = self.focus.next();
    }

    /// Move focus backward.
    pub fn prev_focus(&mut self) {
        self.commit_value();
        self.focus = self.focus.prev();
    }

    /// Move the cursor of the focused list up (wrapping).
    pub fn select_up(&mut self) {
        self.move_selection(-1);
    }

    /// Move the cursor of the focused list down (wrapping).
    pub fn select_down(&mut self) {
        self.move_selection(1);
    }

    fn move_selection(&mut self, delta: isize) {
        let unit_count = self.units().len();
        match self.focus {
            FocusPane::Category => {
                let len = Category::ALL.len();
                let index = wrap_index(self.session.category().index(), delta, len);
                self.session.set_category(Category::from_index(index));
                self.sync_cursors();
                self.on_input_changed();
            }
            FocusPane::From => {
                self.from_cursor = wrap_index(self.from_cursor, delta, unit_count);
                if let Some(unit) = self.units().get(self.from_cursor).copied() {
                    if let Err(err) = self.session.set_from_unit(unit) {
                        warn!(error = %err, "Rejected source unit");
                    }
                }
                self.on_input_changed();
            }
            FocusPane::To => {
                self.to_cursor = wrap_index(self.to_cursor, delta, unit_count);
            }
            FocusPane::Value | FocusPane::History => {}
        }
    }

    /// Toggle the highlighted target unit. Only acts when the target list
    /// has focus.
    pub fn toggle_target(&mut self) {
        if self.focus != FocusPane::To {
            return;
        }
        let Some(unit) = self.units().get(self.to_cursor).copied() else {
            return;
        };
        match self.session.toggle_target(unit) {
            Ok(_) => self.on_input_changed(),
            Err(err) => warn!(error = %err, "Rejected target unit"),
        }
    }

    /// Type a character into the value field.
    pub fn input_char(&mut self, ch: char) {
        self.value_input = value_input::handle_char_input(self.value_input.clone(), ch);
        self.on_value_edited();
    }

    /// Delete the character before the value cursor.
    pub fn input_backspace(&mut self) {
        self.value_input = value_input::handle_backspace(self.value_input.clone());
        self.on_value_edited();
    }

    /// Move the value cursor left.
    pub fn input_cursor_left(&mut self) {
        self.value_input = value_input::handle_cursor_left(self.value_input.clone());
    }

    /// Move the value cursor right.
    pub fn input_cursor_right(&mut self) {
        self.value_input = value_input::handle_cursor_right(self.value_input.clone());
    }

    fn on_value_edited(&mut self) {
        if let Some(value) = self.value_input.parse() {
            self.session.set_value(value);
        }
        self.dirty = true;
        if self.session.realtime() {
            self.value_pending = true;
            self.evaluate(false);
        }
    }

    /// Record a previewed value in history. No-op when nothing is pending.
    pub fn commit_value(&mut self) {
        if self.value_pending {
            self.run_conversion();
        }
    }

    /// Apply the preset at 1-based position `n`.
    pub fn apply_preset(&mut self, n: usize) {
        let Some(preset) = Preset::by_number(n) else {
            return;
        };
        self.session.apply_preset(preset);
        self.value_input = ValueInput::from_value(preset.value);
        self.sync_cursors();
        self.status = Some(format!("Preset: {}", preset.name));
        self.on_input_changed();
    }

    /// Swap source and first target.
    pub fn swap(&mut self) {
        if self.session.swap() {
            self.sync_cursors();
            self.on_input_changed();
        } else {
            self.status = Some("Nothing to swap: select a target unit".to_string());
        }
    }

    /// Flip realtime mode. Turning it on converts pending changes.
    pub fn toggle_realtime(&mut self) {
        self.commit_value();
        let realtime = self.session.toggle_realtime();
        self.status = Some(if realtime {
            "Real-time conversion on".to_string()
        } else {
            "Real-time conversion off: press Enter to convert".to_string()
        });
        if realtime && self.dirty {
            self.run_conversion();
        }
    }

    /// Explicit conversion trigger.
    pub fn convert_now(&mut self) {
        self.run_conversion();
    }

    /// Clear the session history.
    pub fn clear_history(&mut self) {
        self.session.clear_history();
        self.status = Some("History cleared".to_string());
    }

    /// Text of the last `history_limit` entries, as exported.
    pub fn export_text(&self) -> String {
        self.session.history().export_text(self.history_limit)
    }

    /// Toggle help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Toggle unit reference panel.
    pub fn toggle_reference(&mut self) {
        self.reference_visible = !self.reference_visible;
    }

    fn on_input_changed(&mut self) {
        self.dirty = true;
        if self.session.realtime() {
            self.run_conversion();
        }
    }

    fn run_conversion(&mut self) {
        self.evaluate(true);
    }

    /// Recompute results, recording them in history when `record` is set.
    fn evaluate(&mut self, record: bool) {
        if record {
            self.value_pending = false;
        }
        if self.value_input.parse().is_none() {
            self.results.clear();
            self.last_error = Some(format!("Invalid number: '{}'", self.value_input.text()));
            return;
        }

        let outcome = if record {
            self.session.convert()
        } else {
            self.session.preview()
        };
        match outcome {
            Ok(results) => {
                self.results = results;
                self.last_error = None;
                self.dirty = false;
            }
            Err(err) if err.is_empty_selection() => {
                debug!("No targets selected, skipping conversion");
                self.results.clear();
                self.last_error = None;
                self.dirty = false;
            }
            Err(err) => {
                warn!(error = %err, "Conversion failed");
                self.results.clear();
                self.last_error = Some(err.to_string());
            }
        }
    }

    /// Point the list cursors at the selected source and first target.
    fn sync_cursors(&mut self) {
        let units = self.units();
        self.from_cursor = units
            .iter()
            .position(|u| *u == self.session.from_unit())
            .unwrap_or(0);
        self.to_cursor = self
            .session
            .to_units()
            .first()
            .and_then(|first| units.iter().position(|u| u == first))
            .unwrap_or(0);
    }
}

fn wrap_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (((current as isize + delta) % len + len) % len) as usize
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
