//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Focus navigation
    /// Move focus to the next panel. Default: Tab
    NextFocus,
    /// Move focus to the previous panel. Default: Shift+Tab
    PrevFocus,

    // Selection
    /// Move the cursor up in the focused list. Default: k/↑
    SelectUp,
    /// Move the cursor down in the focused list. Default: j/↓
    SelectDown,
    /// Add or remove the highlighted target unit. Default: Space
    ToggleTarget,

    // Conversion
    /// Run the conversion (explicit trigger when realtime is off). Default: Enter
    Convert,
    /// Exchange the source unit with the first target unit. Default: s
    Swap,
    /// Toggle realtime conversion. Default: r
    ToggleRealtime,
    /// Apply the preset at this 1-based position. Default: 1-5
    ApplyPreset(usize),

    // History
    /// Clear the conversion history. Default: x
    ClearHistory,
    /// Export the last entries to conversion_history.txt. Default: d
    ExportHistory,

    // Application
    /// Toggle the unit reference panel. Default: u
    ToggleReference,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether this action is still allowed while the help overlay is open.
    pub fn allowed_during_help(self) -> bool {
        matches!(self, KeyAction::Help | KeyAction::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_preset_carries_its_position() {
        let action = KeyAction::ApplyPreset(3);
        match action {
            KeyAction::ApplyPreset(n) => assert_eq!(n, 3),
            _ => panic!("ApplyPreset should match ApplyPreset variant"),
        }
    }

    #[test]
    fn only_help_and_quit_pass_through_help_overlay() {
        assert!(KeyAction::Help.allowed_during_help());
        assert!(KeyAction::Quit.allowed_during_help());
        assert!(!KeyAction::Swap.allowed_during_help());
        assert!(!KeyAction::ApplyPreset(1).allowed_during_help());
    }

    #[test]
    fn actions_are_hashable_for_binding_maps() {
        let mut set = std::collections::HashSet::new();
        set.insert(KeyAction::Convert);
        set.insert(KeyAction::Convert);
        set.insert(KeyAction::ApplyPreset(1));
        set.insert(KeyAction::ApplyPreset(2));
        assert_eq!(set.len(), 3);
    }
}
