//! # Connect Four
//!
//! A two-player Connect Four game for the terminal. The game rules live in
//! [`game`] and talk to the screen only through the [`game::Presenter`]
//! trait, so every rule can be exercised without a terminal.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: grid, drop resolution, win detection, turns
//! - [`ui`]: Terminal UI and the headless text presenter
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
