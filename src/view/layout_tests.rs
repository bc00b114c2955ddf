//! Tests for converter screen layout rendering.

use super::*;
use crate::state::SessionState;
use crate::view::test_support::buffer_to_string;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

// ===== Test Helpers =====

fn render(state: &AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal
        .draw(|frame| render_layout(frame, state, &PanelStyles::default()))
        .unwrap();
    buffer_to_string(terminal.backend().buffer())
}

fn manual_state() -> AppState {
    let mut session = SessionState::default();
    session.set_realtime(false);
    AppState::new(session)
}

// ===== Panels =====

#[test]
fn default_screen_shows_every_panel() {
    let text = render(&AppState::new(SessionState::default()));

    assert!(text.contains("Unit Converter"));
    assert!(text.contains("● Real-time"));
    assert!(text.contains("[1] Common Temperature"));
    for title in ["Category", "Value", "From", "To", "Results", "History"] {
        assert!(text.contains(title), "missing panel {title}");
    }
    assert!(text.contains("● Length"));
    assert!(text.contains("● meters"));
    assert!(text.contains("[ ] kilometers"));
    assert!(text.contains("Select target units with Space"));
    assert!(text.contains("No conversions yet"));
}

#[test]
fn results_are_aligned_unit_value_rows() {
    let mut state = AppState::new(SessionState::default());
    state.apply_preset(4);
    let text = render(&state);

    assert!(text.contains("liters:  2500000.0000"));
    assert!(text.contains("gallons: 660430.0000"));
    assert!(text.contains("[x] gallons"));
}

#[test]
fn history_lists_newest_first() {
    let mut state = AppState::new(SessionState::default());
    state.apply_preset(4);
    let text = render(&state);

    let liters = text
        .find("2500.0 cubic meters → 2500000.0000 liters")
        .expect("liters entry rendered");
    let gallons = text
        .find("2500.0 cubic meters → 660430.0000 gallons")
        .expect("gallons entry rendered");
    assert!(gallons < liters, "newest entry should come first");
}

#[test]
fn manual_mode_shows_enter_hint() {
    let mut state = manual_state();
    state.apply_preset(2);
    let text = render(&state);

    assert!(text.contains("○ Manual (Enter to convert)"));
    assert!(text.contains("Press Enter to convert"));
}

#[test]
fn invalid_value_is_reported_in_results() {
    let mut state = AppState::new(SessionState::default());
    state.apply_preset(2);
    state.input_char('e');
    let text = render(&state);

    assert!(text.contains("Invalid number: '42.195e'"));
}

#[test]
fn status_message_replaces_hints() {
    let mut state = AppState::new(SessionState::default());
    let text = render(&state);
    assert!(text.contains("1-5: presets"));

    state.clear_history();
    let text = render(&state);
    assert!(text.contains("History cleared"));
    assert!(!text.contains("1-5: presets"));
}

#[test]
fn help_overlay_draws_over_layout() {
    let mut state = AppState::new(SessionState::default());
    state.toggle_help();
    let text = render(&state);
    assert!(text.contains("Keyboard Shortcuts"));
}

#[test]
fn reference_overlay_draws_over_layout() {
    let mut state = AppState::new(SessionState::default());
    state.toggle_reference();
    let text = render(&state);
    assert!(text.contains("Unit Reference"));
}

// ===== Snapshots =====

#[test]
fn snapshot_default_screen() {
    let text = render(&AppState::new(SessionState::default()));
    insta::assert_snapshot!(text, @r"
     Unit Converter │ Length │ ● Real-time
    ┌ Presets ─────────────────────────────────────────────────────────────────────────────────────────┐
    │[1] Common Temperature  [2] Marathon Distance  [3] Human Body Weight  [4] Olympic Pool Volume  [5]│
    │Sound Speed                                                                                       │
    └──────────────────────────────────────────────────────────────────────────────────────────────────┘
    ┌ Category ──────────┐┌ From ──────────────┐┌ To ────────────────┐┌ Results ───────────────────────┐
    │● Length            ││● meters            ││[ ] meters          ││Select target units with Space  │
    │  Weight            ││  kilometers        ││[ ] kilometers      ││                                │
    │  Temperature       ││  centimeters       ││[ ] centimeters     ││                                │
    │  Area              ││  millimeters       ││[ ] millimeters     ││                                │
    │  Speed             ││  miles             ││[ ] miles           ││                                │
    │  Volume            ││  yards             ││[ ] yards           ││                                │
    │                    ││  feet              ││[ ] feet            ││                                │
    │                    ││  inches            ││[ ] inches          ││                                │
    │                    ││  nautical miles    ││[ ] nautical miles  ││                                │
    └────────────────────┘│  micrometers       ││[ ] micrometers     ││                                │
    ┌ Value ─────────────┐│  nanometers        ││[ ] nanometers      ││                                │
    │1.0                 ││                    ││                    ││                                │
    └────────────────────┘└────────────────────┘└────────────────────┘└────────────────────────────────┘
    ┌ History (last 10, newest first) ─────────────────────────────────────────────────────────────────┐
    │No conversions yet                                                                                │
    │                                                                                                  │
    │                                                                                                  │
    │                                                                                                  │
    │                                                                                                  │
    │                                                                                                  │
    │                                                                                                  │
    │                                                                                                  │
    └──────────────────────────────────────────────────────────────────────────────────────────────────┘
     ↑/↓: category | Tab: next panel | 1-5: presets | ?: help | q: quit
    ");
}

#[test]
fn snapshot_olympic_pool_preset_screen() {
    let mut state = AppState::new(SessionState::default());
    state.apply_preset(4);
    let text = render(&state);
    insta::assert_snapshot!(text, @r"
     Unit Converter │ Volume │ ● Real-time
    ┌ Presets ─────────────────────────────────────────────────────────────────────────────────────────┐
    │[1] Common Temperature  [2] Marathon Distance  [3] Human Body Weight  [4] Olympic Pool Volume  [5]│
    │Sound Speed                                                                                       │
    └──────────────────────────────────────────────────────────────────────────────────────────────────┘
    ┌ Category ──────────┐┌ From ──────────────┐┌ To ────────────────┐┌ Results ───────────────────────┐
    │  Length            ││  liters            ││[x] liters          ││liters:  2500000.0000           │
    │  Weight            ││  milliliters       ││[ ] milliliters     ││gallons: 660430.0000            │
    │  Temperature       ││● cubic meters      ││[ ] cubic meters    ││                                │
    │  Area              ││  cubic feet        ││[ ] cubic feet      ││                                │
    │  Speed             ││  cubic inches      ││[ ] cubic inches    ││                                │
    │● Volume            ││  gallons           ││[x] gallons         ││                                │
    │                    ││  quarts            ││[ ] quarts          ││                                │
    │                    ││  pints             ││[ ] pints           ││                                │
    │                    ││                    ││                    ││                                │
    └────────────────────┘│                    ││                    ││                                │
    ┌ Value ─────────────┐│                    ││                    ││                                │
    │2500.0              ││                    ││                    ││                                │
    └────────────────────┘└────────────────────┘└────────────────────┘└────────────────────────────────┘
    ┌ History (last 10, newest first) ─────────────────────────────────────────────────────────────────┐
    │2500.0 cubic meters → 660430.0000 gallons                                                         │
    │2500.0 cubic meters → 2500000.0000 liters                                                         │
    │                                                                                                  │
    │                                                                                                  │
    │                                                                                                  │
    │                                                                                                  │
    │                                                                                                  │
    │                                                                                                  │
    └──────────────────────────────────────────────────────────────────────────────────────────────────┘
     Preset: Olympic Pool Volume
    ");
}

// ===== Pure helpers =====

#[test]
fn history_panel_height_is_bounded() {
    assert_eq!(history_panel_height(10, 60), 12);
    assert_eq!(history_panel_height(10, 30), 10);
    assert_eq!(history_panel_height(10, 6), HISTORY_PANEL_MIN_HEIGHT);
    assert_eq!(history_panel_height(usize::MAX, 90), 30);
}

#[test]
fn keyboard_hints_differ_per_focus() {
    assert!(build_keyboard_hints(FocusPane::To).contains("Space: select"));
    assert!(build_keyboard_hints(FocusPane::History).contains("d: export"));
    assert_ne!(
        build_keyboard_hints(FocusPane::Category),
        build_keyboard_hints(FocusPane::Value)
    );
}
