//! Line-oriented terminal front end.
//!
//! Each input line is split on whitespace. A token naming a key
//! (`Enter`, `Backspace`) or a button label (`sin`, `DEL`, `÷`) is a
//! single press; any other token is typed one character at a time.
//! Tokens starting with `:` are front-end commands.

use crate::input::{Button, SCIENTIFIC_LAYOUT, STANDARD_LAYOUT, action_for_key, named_key};
use crate::ui::session::{CalculatorSession, PressOutcome};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Whether the read loop should keep going after a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Quit,
}

/// Run the interactive loop until `:quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    session: &mut CalculatorSession,
    mut input: R,
    mut output: W,
    prompt: &str,
) -> io::Result<()> {
    writeln!(output, "{}", session.display())?;

    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input");
            break;
        }

        if handle_line(session, &line, &mut output)? == LineOutcome::Quit {
            break;
        }
        writeln!(output, "{}", session.display())?;
    }

    Ok(())
}

/// Process one line of input.
pub fn handle_line<W: Write>(
    session: &mut CalculatorSession,
    line: &str,
    output: &mut W,
) -> io::Result<LineOutcome> {
    for token in line.split_whitespace() {
        if let Some(command) = token.strip_prefix(':') {
            if run_command(session, command, output)? == LineOutcome::Quit {
                return Ok(LineOutcome::Quit);
            }
            continue;
        }

        let outcomes = feed_token(session, token);
        if outcomes.contains(&PressOutcome::Hidden) {
            writeln!(
                output,
                "Scientific functions are hidden; press SCI or type :mode to show them."
            )?;
        }
    }

    Ok(LineOutcome::Continue)
}

/// Feed a single token as key and button presses.
pub fn feed_token(session: &mut CalculatorSession, token: &str) -> Vec<PressOutcome> {
    if let Some(key) = named_key(token) {
        return vec![session.press_key(key)];
    }
    if let Some(button) = Button::from_label(token) {
        return vec![session.press_button(button)];
    }
    feed_chars(session, token)
}

/// Feed every character of `text` as a key press.
///
/// Characters with no keyboard binding fall back to the button with that
/// label, so `%`, `×` and `÷` can be typed too.
pub fn feed_chars(session: &mut CalculatorSession, text: &str) -> Vec<PressOutcome> {
    text.chars()
        .map(|c| {
            let key = c.to_string();
            match Button::from_label(&key) {
                Some(button) if action_for_key(&key).is_none() => session.press_button(button),
                _ => session.press_key(&key),
            }
        })
        .collect()
}

fn run_command<W: Write>(
    session: &mut CalculatorSession,
    command: &str,
    output: &mut W,
) -> io::Result<LineOutcome> {
    match command.to_lowercase().as_str() {
        "q" | "quit" | "exit" => return Ok(LineOutcome::Quit),
        "mode" => {
            let state = if session.toggle_scientific() {
                "shown"
            } else {
                "hidden"
            };
            writeln!(output, "Scientific functions {}.", state)?;
        }
        "copy" => match session.copy_result() {
            Ok(()) => writeln!(output, "Copied {}", session.display().result)?,
            Err(e) => {
                warn!("Copy failed: {}", e);
                writeln!(output, "Could not copy: {}", e)?;
            }
        },
        "help" | "h" | "?" => write_help(session, output)?,
        other => writeln!(output, "Unknown command :{} (try :help)", other)?,
    }

    Ok(LineOutcome::Continue)
}

fn write_help<W: Write>(session: &CalculatorSession, output: &mut W) -> io::Result<()> {
    writeln!(output, "Buttons:")?;
    for row in STANDARD_LAYOUT {
        writeln!(output, "  {}", format_row(row))?;
    }
    if session.is_scientific() {
        for row in SCIENTIFIC_LAYOUT {
            writeln!(output, "  {}", format_row(row))?;
        }
    }
    writeln!(
        output,
        "Keys: 0-9 . + - * / = Enter Backspace c\nCommands: :mode :copy :help :quit"
    )
}

fn format_row(row: &[&str]) -> String {
    row.iter()
        .map(|label| format!("[{:^5}]", label))
        .collect::<Vec<_>>()
        .join(" ")
}
