//! Value input handling (pure state transitions).
//!
//! The numeric input field is kept as text plus a cursor so partially typed
//! numbers ("-", "1e") survive between key presses. All functions are pure.

/// Text buffer for the value field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueInput {
    text: String,
    cursor: usize,
}

impl ValueInput {
    /// Input holding the rendering of `value`, cursor at the end.
    pub fn from_value(value: f64) -> Self {
        let text = format_input(value);
        let cursor = text.len();
        Self { text, cursor }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position (byte index; the text is ASCII only).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Parse the text as a finite number.
    ///
    /// Returns `None` for empty, partial or non-finite input.
    pub fn parse(&self) -> Option<f64> {
        self.text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }
}

/// Render a value the way the input field shows it ("1.0", "42.195").
pub fn format_input(value: f64) -> String {
    format!("{value:?}")
}

/// Whether `ch` may be typed into the value field.
pub fn accepts_char(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E')
}

/// Insert a character at the cursor and advance it.
///
/// Characters that cannot appear in a number are ignored.
pub fn handle_char_input(input: ValueInput, ch: char) -> ValueInput {
    if !accepts_char(ch) {
        return input;
    }
    let ValueInput { mut text, cursor } = input;
    text.insert(cursor, ch);
    ValueInput {
        text,
        cursor: cursor + 1,
    }
}

/// Delete the character before the cursor, if any.
pub fn handle_backspace(input: ValueInput) -> ValueInput {
    let ValueInput { mut text, cursor } = input;
    if cursor > 0 {
        text.remove(cursor - 1);
        ValueInput {
            text,
            cursor: cursor - 1,
        }
    } else {
        ValueInput { text, cursor }
    }
}

/// Move cursor left by one position. Saturates at 0.
pub fn handle_cursor_left(input: ValueInput) -> ValueInput {
    ValueInput {
        cursor: input.cursor.saturating_sub(1),
        ..input
    }
}

/// Move cursor right by one position. Saturates at the text length.
pub fn handle_cursor_right(input: ValueInput) -> ValueInput {
    let max_cursor = input.text.len();
    ValueInput {
        cursor: (input.cursor + 1).min(max_cursor),
        ..input
    }
}
