//! A keyboard-driven calculator: an accumulator core with basic
//! arithmetic and degree-based scientific functions, plus a terminal
//! front end mirroring the on-screen buttons.

pub mod calculator;
pub mod config;
pub mod input;
pub mod ui;
