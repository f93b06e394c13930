//! Presentation adapters: the interactive terminal UI and a plain-text
//! presenter for scripted games.

mod app;
pub mod board_widget;
mod game_view;
pub mod text;

pub use app::App;
pub use board_widget::BoardView;
pub use text::{render_grid, run_script, TextPresenter};
