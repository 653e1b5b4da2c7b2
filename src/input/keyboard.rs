//! Keyboard shortcuts mirroring the on-screen buttons.
//!
//! Keys are identified by name the way key events report them: printable
//! keys by their character, others by a word such as `Enter`.

use crate::calculator::{Action, Operator};

/// Key names that are not a single printable character.
const NAMED_KEYS: &[&str] = &["Enter", "Backspace"];

/// Map a key to the calculator action it triggers, if any.
///
/// Only `+ - * /` are bound to operators; `%` and the scientific
/// functions have no keyboard shortcut.
pub fn action_for_key(key: &str) -> Option<Action> {
    match key {
        "Enter" | "=" => Some(Action::Compute),
        "Backspace" => Some(Action::Delete),
        "." => Some(Action::AddDecimal),
        "+" | "-" | "*" | "/" => Operator::from_symbol(key).map(Action::ChooseOperator),
        "c" | "C" => Some(Action::Clear),
        _ => single_digit(key).map(Action::Digit),
    }
}

/// Resolve a token to a non-printable key name, ignoring case.
pub fn named_key(token: &str) -> Option<&'static str> {
    NAMED_KEYS
        .iter()
        .find(|name| name.eq_ignore_ascii_case(token))
        .copied()
}

fn single_digit(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() => Some(c),
        _ => None,
    }
}
