//! Calculator core.
//!
//! This module provides:
//! - The accumulator state and the actions that transform it
//! - Operator and function tags with their button glyphs
//! - Lenient operand parsing and result formatting
//! - Copying results to the clipboard

mod clipboard;
mod number;
mod operator;
mod state;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use number::{ERROR_SENTINEL, format_number, parse_operand};
pub use operator::{Function, Operator, UnknownSymbol};
pub use state::{Action, CalculatorState};
