pub mod display;
pub mod session;
pub mod terminal;

pub use display::Display;
pub use session::{CalculatorSession, PressOutcome};
pub use terminal::{LineOutcome, feed_chars, feed_token, run as run_terminal};
