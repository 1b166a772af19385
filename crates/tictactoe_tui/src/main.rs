//! Tic-tac-toe in the terminal.
//!
//! A thin view over [`tictactoe_engine`]: it renders snapshots and forwards
//! key presses as moves or resets.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Cli;
use config::TuiConfig;
use terminal::Tui;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_tracing(&config)?;
    // Loading happens before the subscriber exists, so report the result here.
    info!(
        source = ?cli.config,
        log_filter = %config.log_filter(),
        show_key_hints = *config.show_key_hints(),
        highlight_winning_line = *config.highlight_winning_line(),
        "Configuration loaded"
    );
    info!("Starting tic-tac-toe TUI");

    let (mut terminal, guard) = terminal::enter()?;
    let res = run_app(&mut terminal, App::new(), &config);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Exiting");
    res
}

/// Reads the settings file named on the command line, if any, and applies
/// command-line overrides on top.
fn load_config(cli: &Cli) -> Result<TuiConfig> {
    let mut config = match &cli.config {
        Some(path) => TuiConfig::from_file(path)?,
        None => TuiConfig::default(),
    };
    if let Some(log_file) = &cli.log_file {
        config = config.with_log_file(log_file.clone());
    }
    Ok(config)
}

/// Sends tracing output to the configured file so it does not corrupt the UI.
fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, mut app: App, config: &TuiConfig) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app, config))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
