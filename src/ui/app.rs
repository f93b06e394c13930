use crate::config::UiConfig;
use crate::game::{winning_run, GameOutcome, GameState, Ignored, MoveResult, WIDTH};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

use super::board_widget::BoardView;
use super::game_view::{self, ViewModel};

pub struct App {
    game_state: GameState,
    board: BoardView,
    start_column: usize,
    selected_column: usize,
    poll_interval: Duration,
    highlight_winning_run: bool,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        let mut board = BoardView::new();
        let game_state = GameState::start(&mut board);
        let start_column = config.start_column.clamp(1, WIDTH) - 1;

        App {
            game_state,
            board,
            start_column,
            selected_column: start_column,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            highlight_winning_run: config.highlight_winning_run,
            should_quit: false,
            message: None,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn board(&self) -> &BoardView {
        &self.board
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < WIDTH {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(col) = column_for_digit(c) {
                    self.selected_column = col;
                    self.drop_piece(col);
                }
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        self.game_state = GameState::start(&mut self.board);
        self.selected_column = self.start_column;
        self.message = Some("New game started!".to_string());
    }

    /// Drop the current player's piece into `col`
    fn drop_piece(&mut self, col: usize) {
        match self.game_state.play(col, &mut self.board) {
            MoveResult::Placed {
                outcome: GameOutcome::Ongoing,
                ..
            } => {}
            MoveResult::Placed { outcome, .. } => {
                self.message = Some(format!("{outcome} Press 'r' to play again."));
            }
            MoveResult::Ignored(Ignored::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            // A full column is not worth interrupting the players for
            MoveResult::Ignored(Ignored::ColumnFull | Ignored::OutOfRange) => {}
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let winning_run = match self.game_state.outcome() {
            GameOutcome::Winner(player) if self.highlight_winning_run => {
                winning_run(self.game_state.grid(), player)
            }
            _ => None,
        };

        game_view::render(
            frame,
            &ViewModel {
                game_state: &self.game_state,
                board: &self.board,
                selected_column: self.selected_column,
                winning_run,
                message: self.message.as_deref(),
            },
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&UiConfig::default())
    }
}

/// Map a `1`-based column key to a column index
fn column_for_digit(c: char) -> Option<usize> {
    let n = c.to_digit(10)? as usize;
    (1..=WIDTH).contains(&n).then(|| n - 1)
}
