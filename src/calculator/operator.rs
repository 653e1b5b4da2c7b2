//! Operator and function tags understood by the calculator.

use std::fmt;
use std::str::FromStr;

/// A binary operator waiting for its second operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Floating-point remainder; the sign follows the dividend.
    Remainder,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Remainder,
    ];

    /// The glyph shown on the button and in the equation line.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Remainder => "%",
        }
    }

    /// Look up an operator by glyph or ASCII alias (`*`, `x`, `/`).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            "×" | "*" | "x" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            "%" => Some(Self::Remainder),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = UnknownSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| UnknownSymbol(s.to_string()))
    }
}

/// A unary function applied to the operand being entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    Sqrt,
    /// Sine of an angle in degrees.
    Sin,
    /// Cosine of an angle in degrees.
    Cos,
    /// Tangent of an angle in degrees.
    Tan,
}

impl Function {
    pub const ALL: [Function; 4] = [Self::Sqrt, Self::Sin, Self::Cos, Self::Tan];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Sqrt => "√",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
        }
    }

    /// Look up a function by its button label, case-insensitively.
    /// `sqrt` is accepted as an alias for `√`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.to_lowercase().as_str() {
            "√" | "sqrt" => Some(Self::Sqrt),
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            _ => None,
        }
    }

    /// Evaluate the function. Trigonometric inputs are degrees.
    ///
    /// Domain errors are not special-cased: `√` of a negative number
    /// yields NaN.
    pub fn evaluate(self, value: f64) -> f64 {
        match self {
            Self::Sqrt => value.sqrt(),
            Self::Sin => to_radians(value).sin(),
            Self::Cos => to_radians(value).cos(),
            Self::Tan => to_radians(value).tan(),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Function {
    type Err = UnknownSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| UnknownSymbol(s.to_string()))
    }
}

/// Error returned when a label names no known operator or function.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown symbol: {0:?}")]
pub struct UnknownSymbol(pub String);

fn to_radians(degrees: f64) -> f64 {
    (degrees * std::f64::consts::PI) / 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_symbols_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_operator_aliases() {
        assert_eq!("*".parse::<Operator>(), Ok(Operator::Multiply));
        assert_eq!("/".parse::<Operator>(), Ok(Operator::Divide));
        assert!("^".parse::<Operator>().is_err());
    }

    #[test]
    fn test_function_lookup() {
        assert_eq!(Function::from_symbol("√"), Some(Function::Sqrt));
        assert_eq!(Function::from_symbol("SQRT"), Some(Function::Sqrt));
        assert_eq!(Function::from_symbol("Sin"), Some(Function::Sin));
        assert_eq!(Function::from_symbol("log"), None);
    }

    #[test]
    fn test_trig_uses_degrees() {
        assert!((Function::Sin.evaluate(90.0) - 1.0).abs() < 1e-12);
        assert!((Function::Cos.evaluate(180.0) + 1.0).abs() < 1e-12);
        assert!((Function::Tan.evaluate(45.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sqrt_of_negative_is_nan() {
        assert!(Function::Sqrt.evaluate(-4.0).is_nan());
        assert_eq!(Function::Sqrt.evaluate(16.0), 4.0);
    }
}
