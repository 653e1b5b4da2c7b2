//! The two-line display: the pending equation above the result.

use crate::calculator::CalculatorState;
use std::fmt;

/// Narrowest panel width, in characters, between the borders.
const MIN_INNER_WIDTH: usize = 24;

/// What the display shows for a given state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Display {
    /// Previous operand followed by the pending operator glyph.
    pub equation: String,
    /// Current operand, or `0` when nothing has been entered.
    pub result: String,
}

impl Display {
    pub fn from_state(state: &CalculatorState) -> Self {
        let operator = state
            .pending_operator()
            .map(|op| op.symbol())
            .unwrap_or_default();

        let result = if state.current_operand().is_empty() {
            "0".to_string()
        } else {
            state.current_operand().to_string()
        };

        Self {
            equation: format!("{} {}", state.previous_operand(), operator),
            result,
        }
    }

    /// Render the display as a bordered, right-aligned text panel.
    pub fn render(&self) -> String {
        let equation = self.equation.trim_end();
        let width = MIN_INNER_WIDTH
            .max(equation.chars().count() + 2)
            .max(self.result.chars().count() + 2);

        let border = "─".repeat(width);
        format!(
            "┌{border}┐\n│{}│\n│{}│\n└{border}┘",
            right_align(equation, width),
            right_align(&self.result, width),
        )
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// Pads by character count since glyphs like × are multi-byte.
fn right_align(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.chars().count() + 1);
    format!("{}{} ", " ".repeat(pad), text)
}
