use crate::config::DisplayConfig;
use crate::error::MoveError;
use crate::game::{GameState, GameStatus, Player, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::rc::Rc;

use super::status::StatusPanel;

pub struct App {
    display: DisplayConfig,
    game: GameState,
    panel: Rc<StatusPanel>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(display: DisplayConfig) -> Self {
        let (game, panel) = new_game(&display);
        App {
            selected_column: display.start_column.min(COLS - 1),
            display,
            game,
            panel,
            should_quit: false,
            message: None,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn panel(&self) -> &StatusPanel {
        &self.panel
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
        tracing::info!("terminal session started");
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        tracing::info!(moves_made = self.game.moves_made(), "terminal session ended");
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
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
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                // Digits pick a column directly, 1-based
                let col = c as usize - '1' as usize;
                if col < COLS {
                    self.selected_column = col;
                    self.drop_piece();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                // A finished game is never reset; start a fresh one
                let (game, panel) = new_game(&self.display);
                self.game = game;
                self.panel = panel;
                self.selected_column = self.display.start_column.min(COLS - 1);
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Forward the selected column to the engine
    fn drop_piece(&mut self) {
        if !self.panel.input_enabled() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game.apply_move(self.selected_column) {
            Ok(()) => {
                self.message = match self.game.status() {
                    GameStatus::InProgress => None,
                    GameStatus::Draw => Some("It's a draw!".to_string()),
                    GameStatus::PlayerOneWins => Some(format!(
                        "{} wins!",
                        self.panel.player_name(Player::PlayerOne)
                    )),
                    GameStatus::PlayerTwoWins => Some(format!(
                        "{} wins!",
                        self.panel.player_name(Player::PlayerTwo)
                    )),
                };
            }
            Err(MoveError::ColumnFull { .. }) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn { .. }) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameAlreadyOver { .. }) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game,
            &self.panel,
            self.selected_column,
            self.message.as_deref(),
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}

fn new_game(display: &DisplayConfig) -> (GameState, Rc<StatusPanel>) {
    let mut game = GameState::new();
    let panel = Rc::new(StatusPanel::new(display, &game));
    game.register_observer(&panel);
    (game, panel)
}
