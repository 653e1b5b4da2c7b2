//! Conversion between operand text and numbers.
//!
//! Operands live as text while they are typed. Parsing is lenient in the
//! same way a browser's `parseFloat` is: the longest numeric prefix wins,
//! so `"3."` is three and `"12abc"` is twelve. Results are turned back into
//! text with the shortest digits that round-trip, switching to exponent
//! notation only for very large or very small magnitudes.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Longest numeric prefix: optional sign, then either `Infinity` or a
    /// decimal mantissa with an optional exponent.
    static ref NUMERIC_PREFIX: Regex = Regex::new(
        r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)"
    ).unwrap();
}

/// Text shown in place of a result when dividing by zero.
pub const ERROR_SENTINEL: &str = "Error";

/// Plain decimal layout is used while the decimal exponent stays in this range.
const MAX_PLAIN_EXPONENT: i32 = 21;
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Parse operand text into a number.
///
/// Returns `None` when no numeric prefix exists or the value is NaN.
pub fn parse_operand(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let prefix = NUMERIC_PREFIX.find(trimmed)?.as_str();

    let value = match prefix.strip_suffix("Infinity") {
        Some("-") => f64::NEG_INFINITY,
        Some(_) => f64::INFINITY,
        None => prefix.parse::<f64>().ok()?,
    };

    (!value.is_nan()).then_some(value)
}

/// Format a number the way it is shown on the display.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        // Negative zero is displayed without its sign
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let (digits, exponent) = shortest_digits(value.abs());
    format!("{}{}", sign, layout(&digits, exponent))
}

/// Split a positive finite number into its shortest round-trip digit
/// string and the decimal exponent `n` such that the value equals
/// `0.d1d2d3... × 10^n`.
fn shortest_digits(value: f64) -> (String, i32) {
    let scientific = format!("{:e}", value);
    let (mantissa, exp) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    (digits, exp + 1)
}

fn layout(digits: &str, n: i32) -> String {
    let k = digits.len() as i32;

    if k <= n && n <= MAX_PLAIN_EXPONENT {
        // Integer with trailing zeros
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= MAX_PLAIN_EXPONENT {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if MIN_PLAIN_EXPONENT < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let e = n - 1;
        let exp_sign = if e >= 0 { "+" } else { "-" };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, exp_sign, e.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, exp_sign, e.abs())
        }
    }
}
