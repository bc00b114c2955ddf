//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod helpers;
mod layout;
mod reference;
mod styles;
#[cfg(test)]
mod test_support;

pub use help::render_help_overlay;
pub use layout::render_layout;
pub use reference::render_reference_overlay;
pub use styles::{ColorConfig, PanelStyles};

use crate::config::keybindings::KeyBindings;
use crate::export;
use crate::model::{AppError, KeyAction};
use crate::state::{value_input, AppState, FocusPane};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: PanelStyles,
    export_dir: PathBuf,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(app_state: AppState, args: CliArgs) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles: PanelStyles::with_color_config(args.color),
            export_dir: args.export_dir,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws only after input or
    /// a resize; idle polling consumes minimal CPU.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a key event. Returns true if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Escape closes overlays (before key binding dispatch)
        if key.code == KeyCode::Esc {
            if self.app_state.help_visible {
                self.app_state.help_visible = false;
            } else if self.app_state.reference_visible {
                self.app_state.reference_visible = false;
            }
            return false;
        }

        // Value field editing (before key binding dispatch)
        if self.app_state.focus == FocusPane::Value && !self.app_state.help_visible {
            match key.code {
                KeyCode::Char(ch)
                    if !key.modifiers.contains(KeyModifiers::CONTROL)
                        && value_input::accepts_char(ch) =>
                {
                    self.app_state.input_char(ch);
                    return false;
                }
                KeyCode::Backspace => {
                    self.app_state.input_backspace();
                    return false;
                }
                KeyCode::Left => {
                    self.app_state.input_cursor_left();
                    return false;
                }
                KeyCode::Right => {
                    self.app_state.input_cursor_right();
                    return false;
                }
                _ => {} // Fall through to key binding dispatch
            }
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        // Help overlay swallows everything except its own toggle and quit
        if self.app_state.help_visible && !action.allowed_during_help() {
            return false;
        }

        // Any key press replaces the previous status message
        self.app_state.status = None;

        match action {
            KeyAction::NextFocus => self.app_state.next_focus(),
            KeyAction::PrevFocus => self.app_state.prev_focus(),
            KeyAction::SelectUp => self.app_state.select_up(),
            KeyAction::SelectDown => self.app_state.select_down(),
            KeyAction::ToggleTarget => self.app_state.toggle_target(),
            KeyAction::Convert => self.app_state.convert_now(),
            KeyAction::Swap => self.app_state.swap(),
            KeyAction::ToggleRealtime => self.app_state.toggle_realtime(),
            KeyAction::ApplyPreset(n) => self.app_state.apply_preset(n),
            KeyAction::ClearHistory => self.app_state.clear_history(),
            KeyAction::ExportHistory => self.export_history(),
            KeyAction::ToggleReference => self.app_state.toggle_reference(),
            KeyAction::Help => self.app_state.toggle_help(),
            KeyAction::Quit => return true,
        }

        false
    }

    /// Write the displayed history to the export directory and report the
    /// outcome on the status bar.
    fn export_history(&mut self) {
        self.app_state.commit_value();
        let history = self.app_state.session().history();
        match export::export_history(history, self.app_state.history_limit, &self.export_dir) {
            Ok(path) => {
                info!(path = %path.display(), "History exported");
                self.app_state.status = Some(format!("Exported history to {}", path.display()));
            }
            Err(err) => {
                warn!(error = %err, "History export failed");
                self.app_state.status = Some(format!("Export failed: {err}"));
            }
        }
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, styles);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(terminal: Terminal<B>, app_state: AppState, export_dir: PathBuf) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles: PanelStyles::default(),
            export_dir,
        }
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Get reference to the terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Command-line settings for the TUI.
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Directory receiving `conversion_history.txt`.
    ///
    /// Maps to `--export-dir`, config `export_dir`; default current directory.
    pub export_dir: PathBuf,

    /// Whether colors are enabled (`--no-color`, `NO_COLOR`).
    pub color: ColorConfig,
}

impl CliArgs {
    /// Create new CliArgs
    pub fn new(export_dir: PathBuf, color: ColorConfig) -> Self {
        Self { export_dir, color }
    }
}

/// Initialize and run the TUI application.
///
/// Handles terminal setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_state(app_state: AppState, args: CliArgs) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, args)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
