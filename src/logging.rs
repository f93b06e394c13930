//! Log subscriber setup.
//!
//! The terminal UI draws on stdout, so interactive sessions only log when a
//! file is configured. Headless runs log to stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::LoggingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Headless,
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init(config: &LoggingConfig, level: &str, mode: Mode) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match (mode, &config.file) {
        (Mode::Headless, _) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .try_init()?;
        }
        (Mode::Interactive, Some(path)) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| LoggingError::LogFile {
                    path: path.clone(),
                    source: e,
                })?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(filter)
                .try_init()?;
        }
        (Mode::Interactive, None) => {}
    }

    Ok(())
}
