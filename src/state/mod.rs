//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod history;
pub mod session;
pub mod value_input;

// Re-export for convenience
pub use app_state::{AppState, FocusPane};
pub use history::{HistoryEntry, HistoryLedger, DEFAULT_HISTORY_CAPACITY, DEFAULT_HISTORY_LIMIT};
pub use session::{apply_preset, swap, SessionState};
pub use value_input::ValueInput;
