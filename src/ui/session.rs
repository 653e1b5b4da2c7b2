//! A calculator session: the accumulator plus what the front end shows.

use crate::calculator::{Action, CalculatorState, ClipboardError, copy_to_clipboard};
use crate::input::{Button, ButtonGroup, action_for_key};
use crate::ui::display::Display;
use tracing::{debug, trace, warn};

/// What happened when a key or button was pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// An action was dispatched to the accumulator.
    Applied(Action),
    /// The scientific group was shown or hidden.
    ModeToggled { scientific: bool },
    /// The button belongs to the scientific group, which is hidden.
    Hidden,
    /// Nothing is bound to the key.
    Unbound,
}

/// Holds the calculator state and the scientific-mode flag.
///
/// The state is replaced wholesale on every action.
#[derive(Clone, Debug, Default)]
pub struct CalculatorSession {
    state: CalculatorState,
    scientific: bool,
    auto_copy: bool,
}

impl CalculatorSession {
    pub fn new(scientific: bool, auto_copy: bool) -> Self {
        Self {
            state: CalculatorState::new(),
            scientific,
            auto_copy,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn is_scientific(&self) -> bool {
        self.scientific
    }

    pub fn display(&self) -> Display {
        Display::from_state(&self.state)
    }

    /// Handle a key press, by key name.
    pub fn press_key(&mut self, key: &str) -> PressOutcome {
        match action_for_key(key) {
            Some(action) => {
                self.dispatch(action);
                PressOutcome::Applied(action)
            }
            None => {
                trace!(key, "No action bound to key");
                PressOutcome::Unbound
            }
        }
    }

    /// Handle an on-screen button press.
    pub fn press_button(&mut self, button: Button) -> PressOutcome {
        if button.group() == ButtonGroup::Scientific && !self.scientific {
            trace!(label = %button.label(), "Scientific button pressed while hidden");
            return PressOutcome::Hidden;
        }

        match button.action() {
            Some(action) => {
                self.dispatch(action);
                PressOutcome::Applied(action)
            }
            None => PressOutcome::ModeToggled {
                scientific: self.toggle_scientific(),
            },
        }
    }

    /// Show or hide the scientific group. Returns the new visibility.
    pub fn toggle_scientific(&mut self) -> bool {
        self.scientific = !self.scientific;
        debug!(scientific = self.scientific, "Toggled scientific mode");
        self.scientific
    }

    /// Apply an action to the accumulator.
    pub fn dispatch(&mut self, action: Action) {
        let next = self.state.apply(action);
        debug!(
            ?action,
            current = next.current_operand(),
            previous = next.previous_operand(),
            operator = ?next.pending_operator(),
            "Dispatched action"
        );

        let produced_result = next != self.state
            && matches!(action, Action::Compute | Action::ApplyFunction(_));
        self.state = next;

        if self.auto_copy
            && produced_result
            && let Err(e) = self.copy_result()
        {
            warn!("Auto-copy failed: {}", e);
        }
    }

    /// Copy the displayed result to the clipboard.
    pub fn copy_result(&self) -> Result<(), ClipboardError> {
        copy_to_clipboard(&self.display().result)
    }
}
