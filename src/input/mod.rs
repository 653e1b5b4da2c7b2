//! Input dispatch: physical keys and button labels mapped to actions.

mod buttons;
mod keyboard;

pub use buttons::{Button, ButtonGroup, SCIENTIFIC_LAYOUT, STANDARD_LAYOUT};
pub use keyboard::{action_for_key, named_key};
