//! Core Connect Four game logic: grid, players, drop resolution, win
//! detection and the turn controller that ties them together.

mod drop;
mod grid;
mod player;
mod presenter;
mod state;
mod win;

pub use drop::landing_row;
pub use grid::{Cell, Grid, HEIGHT, WIDTH};
pub use player::Player;
pub use presenter::{GameEvent, Presenter};
pub use state::{GameOutcome, GameState, Ignored, MoveResult, Phase};
pub use win::{has_won, winning_run, Run, RUN_LENGTH};
