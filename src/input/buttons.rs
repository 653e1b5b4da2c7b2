//! On-screen buttons and their labels.

use crate::calculator::{Action, Function, Operator};

/// Standard keypad, row by row.
pub const STANDARD_LAYOUT: &[&[&str]] = &[
    &["C", "DEL", "%", "÷"],
    &["7", "8", "9", "×"],
    &["4", "5", "6", "-"],
    &["1", "2", "3", "+"],
    &["SCI", "0", ".", "="],
];

/// Scientific group, shown only when toggled on.
pub const SCIENTIFIC_LAYOUT: &[&[&str]] = &[&["√", "sin", "cos", "tan"]];

/// Which group a button is rendered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonGroup {
    Standard,
    /// Hidden until scientific mode is toggled on.
    Scientific,
}

/// A calculator button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Number(char),
    Operator(Operator),
    Function(Function),
    Equals,
    Clear,
    Delete,
    Decimal,
    /// Shows or hides the scientific group.
    ToggleMode,
}

impl Button {
    /// Look up a button by its label.
    ///
    /// Word labels are matched case-insensitively; operator and function
    /// labels also accept their ASCII aliases.
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && c.is_ascii_digit()
        {
            return Some(Self::Number(c));
        }

        match label.to_uppercase().as_str() {
            "=" => return Some(Self::Equals),
            "." => return Some(Self::Decimal),
            "C" | "AC" => return Some(Self::Clear),
            "DEL" | "⌫" => return Some(Self::Delete),
            "SCI" => return Some(Self::ToggleMode),
            _ => {}
        }

        Operator::from_symbol(label)
            .map(Self::Operator)
            .or_else(|| Function::from_symbol(label).map(Self::Function))
    }

    /// The label printed on the button.
    pub fn label(&self) -> String {
        match self {
            Self::Number(c) => c.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Function(func) => func.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Delete => "DEL".to_string(),
            Self::Decimal => ".".to_string(),
            Self::ToggleMode => "SCI".to_string(),
        }
    }

    pub fn group(&self) -> ButtonGroup {
        match self {
            Self::Function(_) => ButtonGroup::Scientific,
            _ => ButtonGroup::Standard,
        }
    }

    /// The calculator action behind this button.
    ///
    /// Returns `None` for the mode toggle, which changes only what is
    /// shown and never the calculator state.
    pub fn action(&self) -> Option<Action> {
        match self {
            Self::Number(c) => Some(Action::Digit(*c)),
            Self::Operator(op) => Some(Action::ChooseOperator(*op)),
            Self::Function(func) => Some(Action::ApplyFunction(*func)),
            Self::Equals => Some(Action::Compute),
            Self::Clear => Some(Action::Clear),
            Self::Delete => Some(Action::Delete),
            Self::Decimal => Some(Action::AddDecimal),
            Self::ToggleMode => None,
        }
    }
}
