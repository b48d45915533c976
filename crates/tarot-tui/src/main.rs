//! Tarot TUI - draw and read tarot spreads in the terminal
//!
//! Starts the interactive reader by default. The `draw`, `spreads` and
//! `config` subcommands print to stdout and exit.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::panic;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tarot_tui::app::TuiConfig;
use tarot_tui::cli::{self, Cli, Command};
use tarot_tui::App;

/// Application entry point with panic handling for terminal restoration
fn main() -> Result<()> {
    let cli = Cli::parse();

    // The interactive UI owns the terminal, so its log goes to a file
    init_logging(cli.command.is_none())?;

    let config = cli.load_config();
    let result = match &cli.command {
        None => run_tui(&cli, &config),
        Some(command) => run_command(&cli, &config, command),
    };

    if let Err(e) = &result {
        tracing::error!("Application error: {:#}", e);
    }

    result
}

fn init_logging(to_file: bool) -> Result<()> {
    let filter = EnvFilter::from_default_env()
        .add_directive("tarot_tui=info".parse()?)
        .add_directive("tarot_core=info".parse()?);

    if !to_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).with_writer(io::stderr))
            .with(filter)
            .init();
        return Ok(());
    }

    match open_log_file() {
        Some(file) => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .with(filter)
            .init(),
        None => tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::sink))
            .with(filter)
            .init(),
    }
    Ok(())
}

fn open_log_file() -> Option<File> {
    let path = TuiConfig::log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Non-interactive subcommands
fn run_command(cli: &Cli, config: &TuiConfig, command: &Command) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Draw {
            spread,
            count,
            reversed,
        } => {
            let deck = cli::load_deck(config)?;
            let reading =
                cli::draw_reading(&deck, config, spread.as_deref(), *count, *reversed, cli.seed)?;
            cli::print_reading(&mut out, reading.spread(), reading.drawn(), &config.images_dir)?;
        }
        Command::Spreads => cli::print_spreads(&mut out)?,
        Command::Config { write } => {
            cli::print_config(&mut out, config)?;
            if *write {
                let path = cli
                    .config_path()
                    .context("Could not determine config directory")?;
                config.save_to(&path)?;
                tracing::info!("Wrote config to {}", path.display());
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// Interactive reader
fn run_tui(cli: &Cli, config: &TuiConfig) -> Result<()> {
    // Dataset errors are reported before the terminal is taken over
    let deck = cli::load_deck(config)?;

    // Set up panic hook to restore terminal on crash
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run event loop
    let mut app = App::new(deck, config, cli.seed);
    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}
