//! The accumulator: two operands held as text and one pending operator.
//!
//! Every operation takes the current state by reference and returns the
//! next one, so callers replace their state wholesale instead of mutating
//! fields in place. Nothing here can fail: input that makes no sense is
//! ignored, and undefined results show up as sentinel text.

use super::number::{ERROR_SENTINEL, format_number, parse_operand};
use super::operator::{Function, Operator};

/// A single user action on the accumulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Append a digit (`0`-`9`) or `.` to the operand being entered.
    Digit(char),
    ChooseOperator(Operator),
    Compute,
    ApplyFunction(Function),
    Clear,
    Delete,
    AddDecimal,
}

/// Calculator state: the operand being typed, the operand captured before
/// the operator was chosen, and that operator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalculatorState {
    current_operand: String,
    previous_operand: String,
    pending_operator: Option<Operator>,
}

impl CalculatorState {
    /// The empty state the calculator starts in.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Check if all three fields are at their defaults.
    pub fn is_empty(&self) -> bool {
        self.current_operand.is_empty()
            && self.previous_operand.is_empty()
            && self.pending_operator.is_none()
    }

    /// Apply an action and return the resulting state.
    #[must_use]
    pub fn apply(&self, action: Action) -> Self {
        match action {
            Action::Digit(digit) => self.append_digit(digit),
            Action::ChooseOperator(op) => self.choose_operator(op),
            Action::Compute => self.compute(),
            Action::ApplyFunction(func) => self.apply_function(func),
            Action::Clear => self.clear(),
            Action::Delete => self.delete(),
            Action::AddDecimal => self.add_decimal(),
        }
    }

    /// Append a digit or `.` to the current operand.
    ///
    /// A second `.` is ignored, as is any character that is neither an
    /// ASCII digit nor `.`.
    #[must_use]
    pub fn append_digit(&self, digit: char) -> Self {
        if !digit.is_ascii_digit() && digit != '.' {
            return self.clone();
        }
        if digit == '.' && self.current_operand.contains('.') {
            return self.clone();
        }

        let mut current_operand = self.current_operand.clone();
        current_operand.push(digit);
        Self {
            current_operand,
            ..self.clone()
        }
    }

    /// Choose the operator to apply to the current operand.
    ///
    /// Does nothing while no operand has been entered, which means that
    /// pressing two operators in a row keeps the first one. A pending
    /// operation is folded first, then the result becomes the left-hand
    /// operand of the new operator.
    #[must_use]
    pub fn choose_operator(&self, op: Operator) -> Self {
        if self.current_operand.is_empty() {
            return self.clone();
        }

        let folded = if self.previous_operand.is_empty() {
            self.clone()
        } else {
            self.compute()
        };

        Self {
            current_operand: String::new(),
            previous_operand: folded.current_operand,
            pending_operator: Some(op),
        }
    }

    /// Fold the pending operation into a result.
    ///
    /// Nothing changes if either operand fails to parse or no operator is
    /// pending. Dividing by exactly zero yields the `Error` sentinel.
    #[must_use]
    pub fn compute(&self) -> Self {
        let (Some(prev), Some(curr)) = (
            parse_operand(&self.previous_operand),
            parse_operand(&self.current_operand),
        ) else {
            return self.clone();
        };
        let Some(op) = self.pending_operator else {
            return self.clone();
        };

        let result = match op {
            Operator::Add => format_number(prev + curr),
            Operator::Subtract => format_number(prev - curr),
            Operator::Multiply => format_number(prev * curr),
            Operator::Divide if curr == 0.0 => ERROR_SENTINEL.to_string(),
            Operator::Divide => format_number(prev / curr),
            Operator::Remainder => format_number(prev % curr),
        };

        Self {
            current_operand: result,
            previous_operand: String::new(),
            pending_operator: None,
        }
    }

    /// Replace the current operand with `func` applied to it.
    ///
    /// The pending operation is left alone. Nothing changes if the current
    /// operand fails to parse.
    #[must_use]
    pub fn apply_function(&self, func: Function) -> Self {
        let Some(value) = parse_operand(&self.current_operand) else {
            return self.clone();
        };

        Self {
            current_operand: format_number(func.evaluate(value)),
            ..self.clone()
        }
    }

    /// Reset every field.
    #[must_use]
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// Remove the last character of the current operand.
    #[must_use]
    pub fn delete(&self) -> Self {
        let mut current_operand = self.current_operand.clone();
        current_operand.pop();
        Self {
            current_operand,
            ..self.clone()
        }
    }

    /// Append `.` unless the current operand already has one.
    #[must_use]
    pub fn add_decimal(&self) -> Self {
        if self.current_operand.contains('.') {
            return self.clone();
        }

        let mut current_operand = self.current_operand.clone();
        current_operand.push('.');
        Self {
            current_operand,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enter(state: &CalculatorState, text: &str) -> CalculatorState {
        text.chars().fold(state.clone(), |s, c| s.append_digit(c))
    }

    fn run(lhs: &str, op: Operator, rhs: &str) -> CalculatorState {
        let state = enter(&CalculatorState::new(), lhs).choose_operator(op);
        enter(&state, rhs).compute()
    }

    #[test]
    fn test_digits_concatenate() {
        let state = enter(&CalculatorState::new(), "12.05");
        assert_eq!(state.current_operand(), "12.05");
    }

    #[test]
    fn test_second_decimal_point_rejected() {
        let state = enter(&CalculatorState::new(), "1.2.3");
        assert_eq!(state.current_operand(), "1.23");
    }

    #[test]
    fn test_non_digit_ignored() {
        let state = enter(&CalculatorState::new(), "4a ");
        assert_eq!(state.current_operand(), "4");
    }

    #[test]
    fn test_choose_operator_moves_operand() {
        let state = enter(&CalculatorState::new(), "3").choose_operator(Operator::Add);
        assert_eq!(state.previous_operand(), "3");
        assert_eq!(state.current_operand(), "");
        assert_eq!(state.pending_operator(), Some(Operator::Add));
    }

    #[test]
    fn test_choose_operator_without_operand_is_noop() {
        let empty = CalculatorState::new();
        assert_eq!(empty.choose_operator(Operator::Add), empty);
    }

    #[test]
    fn test_second_operator_in_a_row_keeps_first() {
        let state = enter(&CalculatorState::new(), "3")
            .choose_operator(Operator::Add)
            .choose_operator(Operator::Subtract);
        assert_eq!(state.previous_operand(), "3");
        assert_eq!(state.pending_operator(), Some(Operator::Add));
    }

    #[test]
    fn test_chained_operator_folds_pending() {
        let state = enter(&CalculatorState::new(), "3").choose_operator(Operator::Add);
        let state = enter(&state, "4").choose_operator(Operator::Multiply);
        assert_eq!(state.previous_operand(), "7");
        assert_eq!(state.pending_operator(), Some(Operator::Multiply));

        let state = enter(&state, "2").compute();
        assert_eq!(state.current_operand(), "14");
    }

    #[test]
    fn test_compute_on_empty_state_is_noop() {
        let empty = CalculatorState::new();
        assert_eq!(empty.compute(), empty);
    }

    #[test]
    fn test_compute_without_operator_is_noop() {
        let state = enter(&CalculatorState::new(), "5");
        assert_eq!(state.compute(), state);
    }

    #[test]
    fn test_compute_with_unparseable_operand_is_noop() {
        let state = enter(&CalculatorState::new(), "5").choose_operator(Operator::Add);
        let state = state.add_decimal();
        assert_eq!(state.current_operand(), ".");
        assert_eq!(state.compute(), state);
    }

    #[test]
    fn test_addition() {
        let state = run("3", Operator::Add, "4");
        assert_eq!(state.current_operand(), "7");
        assert_eq!(state.previous_operand(), "");
        assert_eq!(state.pending_operator(), None);
    }

    #[test]
    fn test_subtraction_and_multiplication() {
        assert_eq!(run("3", Operator::Subtract, "10").current_operand(), "-7");
        assert_eq!(run("2.5", Operator::Multiply, "4").current_operand(), "10");
    }

    #[test]
    fn test_division() {
        assert_eq!(run("1", Operator::Divide, "4").current_operand(), "0.25");
    }

    #[test]
    fn test_division_by_zero_is_error() {
        assert_eq!(run("5", Operator::Divide, "0").current_operand(), "Error");
        assert_eq!(run("5", Operator::Divide, "0.0").current_operand(), "Error");
    }

    #[test]
    fn test_remainder() {
        assert_eq!(run("7", Operator::Remainder, "3").current_operand(), "1");
        assert_eq!(run("5.5", Operator::Remainder, "2").current_operand(), "1.5");
    }

    #[test]
    fn test_remainder_sign_follows_dividend() {
        // Negative operands only arise from results
        let negative = run("3", Operator::Subtract, "10").choose_operator(Operator::Remainder);
        let state = enter(&negative, "3").compute();
        assert_eq!(state.current_operand(), "-1");
    }

    #[test]
    fn test_result_can_be_extended_by_typing() {
        let state = enter(&run("3", Operator::Add, "4"), "5");
        assert_eq!(state.current_operand(), "75");
    }

    #[test]
    fn test_sin_of_ninety_degrees() {
        let state = enter(&CalculatorState::new(), "90").apply_function(Function::Sin);
        let value: f64 = state.current_operand().parse().unwrap();
        assert!((value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_function_keeps_pending_operation() {
        let state = enter(&CalculatorState::new(), "2").choose_operator(Operator::Add);
        let state = enter(&state, "9").apply_function(Function::Sqrt);
        assert_eq!(state.current_operand(), "3");
        assert_eq!(state.previous_operand(), "2");
        assert_eq!(state.compute().current_operand(), "5");
    }

    #[test]
    fn test_sqrt_of_negative_is_nan_and_blocks_compute() {
        let negative = run("1", Operator::Subtract, "5");
        let state = negative.apply_function(Function::Sqrt);
        assert_eq!(state.current_operand(), "NaN");
        assert_eq!(state.apply_function(Function::Sin), state);
    }

    #[test]
    fn test_function_on_empty_operand_is_noop() {
        let empty = CalculatorState::new();
        assert_eq!(empty.apply_function(Function::Cos), empty);
    }

    #[test]
    fn test_delete() {
        let state = enter(&CalculatorState::new(), "123").delete();
        assert_eq!(state.current_operand(), "12");
    }

    #[test]
    fn test_delete_on_empty_stays_empty() {
        let state = CalculatorState::new().delete();
        assert_eq!(state.current_operand(), "");
        assert!(state.is_empty());
    }

    #[test]
    fn test_delete_on_error_removes_one_character() {
        let state = run("5", Operator::Divide, "0").delete();
        assert_eq!(state.current_operand(), "Erro");
    }

    #[test]
    fn test_add_decimal() {
        let state = CalculatorState::new().add_decimal();
        assert_eq!(state.current_operand(), ".");
        let state = enter(&state, "5").add_decimal();
        assert_eq!(state.current_operand(), ".5");
    }

    #[test]
    fn test_clear_resets_everything() {
        let state = enter(&CalculatorState::new(), "8").choose_operator(Operator::Divide);
        let state = enter(&state, "2");
        assert!(!state.is_empty());
        assert!(state.clear().is_empty());
        assert!(CalculatorState::new().clear().is_empty());
    }

    #[test]
    fn test_apply_dispatches_actions() {
        let actions = [
            Action::Digit('6'),
            Action::ChooseOperator(Operator::Multiply),
            Action::Digit('7'),
            Action::Compute,
        ];
        let state = actions
            .into_iter()
            .fold(CalculatorState::new(), |s, a| s.apply(a));
        assert_eq!(state.current_operand(), "42");
    }
}
