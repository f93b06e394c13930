use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::game::WIDTH;
use connect_four::logging::{self, Mode};
use connect_four::ui::{self, App};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Two-player Connect Four in the terminal.
#[derive(Parser, Debug)]
#[command(name = "connect-four")]
#[command(version)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Play these columns (1-based, comma separated) without the UI and print
    /// the result
    #[arg(long, value_delimiter = ',', value_parser = parse_column)]
    moves: Option<Vec<usize>>,

    /// Log level, overriding the config file
    #[arg(long, value_parser = ["trace", "debug", "info", "warn", "error"])]
    log_level: Option<String>,
}

fn parse_column(s: &str) -> Result<usize, String> {
    let col: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a column number"))?;
    if (1..=WIDTH).contains(&col) {
        Ok(col - 1)
    } else {
        Err(format!("column must be between 1 and {WIDTH}"))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);

    match cli.moves {
        Some(columns) => {
            logging::init(&config.logging, level, Mode::Headless)?;
            ui::run_script(&columns, io::stdout().lock()).context("writing game transcript")?;
        }
        None => {
            logging::init(&config.logging, level, Mode::Interactive)?;
            run_tui(&config).context("running terminal UI")?;
        }
    }

    Ok(())
}

fn run_tui(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config.ui);
    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
