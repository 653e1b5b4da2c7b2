use anyhow::{Context, Result};
use clap::Parser;
use keycalc::config::Config;
use keycalc::input::Button;
use keycalc::ui::{CalculatorSession, PressOutcome, feed_chars, run_terminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Config file (defaults to ~/.config/keycalc/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start with the scientific buttons shown
    #[arg(long)]
    scientific: bool,

    /// Copy every computed result to the clipboard
    #[arg(long)]
    auto_copy: bool,

    /// Type these keys, print the display and exit
    #[arg(long)]
    keys: Option<String>,

    /// Press a button by label after --keys (repeatable)
    #[arg(long = "press", value_name = "LABEL")]
    presses: Vec<String>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let mut session = CalculatorSession::new(
        cli.scientific || config.scientific,
        cli.auto_copy || config.auto_copy,
    );

    if cli.keys.is_some() || !cli.presses.is_empty() {
        run_scripted(&mut session, cli.keys.as_deref(), &cli.presses)?;
        println!("{}", session.display());
        return Ok(());
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_terminal(&mut session, stdin.lock(), stdout.lock(), &config.prompt)
        .context("Terminal I/O failed")
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_scripted(
    session: &mut CalculatorSession,
    keys: Option<&str>,
    presses: &[String],
) -> Result<()> {
    if let Some(keys) = keys {
        feed_chars(session, keys);
    }

    for label in presses {
        let button = Button::from_label(label)
            .with_context(|| format!("Unknown button label: {}", label))?;
        if session.press_button(button) == PressOutcome::Hidden {
            anyhow::bail!(
                "Button {} is in the scientific group; pass --scientific to use it",
                label
            );
        }
    }

    Ok(())
}
