use std::fmt;
use std::rc::Rc;

use super::board::{Board, Cell, COLS, ROWS};
use super::observer::{BoardObserver, ObserverRegistry};
use super::player::Player;
use crate::error::{MoveError, OutOfBounds};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    PlayerOneWins,
    PlayerTwoWins,
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::PlayerOneWins => Some(Player::PlayerOne),
            GameStatus::PlayerTwoWins => Some(Player::PlayerTwo),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    fn won_by(player: Player) -> Self {
        match player {
            Player::PlayerOne => GameStatus::PlayerOneWins,
            Player::PlayerTwo => GameStatus::PlayerTwoWins,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameStatus::InProgress => "in progress",
            GameStatus::PlayerOneWins => "player one wins",
            GameStatus::PlayerTwoWins => "player two wins",
            GameStatus::Draw => "draw",
        })
    }
}

/// One game of Connect Four.
///
/// The grid only ever changes through [`GameState::apply_move`]; a finished
/// game stays frozen and a new game needs a new `GameState`. Every accepted
/// move notifies the registered [`BoardObserver`]s after all state has been
/// updated.
#[derive(Debug)]
pub struct GameState {
    board: Board,
    current_player: Player,
    moves_made: usize,
    status: GameStatus,
    last_move: Option<(usize, usize)>,
    observers: ObserverRegistry,
}

impl GameState {
    /// Create initial game state
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::PlayerOne,
            moves_made: 0,
            status: GameStatus::InProgress,
            last_move: None,
            observers: ObserverRegistry::new(),
        }
    }

    /// Attach a listener. The game keeps only a weak handle, so the caller
    /// decides how long the listener lives.
    pub fn register_observer<O: BoardObserver + 'static>(&mut self, observer: &Rc<O>) {
        self.observers.register(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Drop a mark for the current player into `column`.
    ///
    /// Checks run in a fixed order: a finished game rejects everything with
    /// [`MoveError::GameAlreadyOver`], then the column range is checked, then
    /// whether the column has room. A rejected move changes nothing and
    /// notifies nobody.
    pub fn apply_move(&mut self, column: usize) -> Result<(), MoveError> {
        if let Err(err) = self.validate_move(column) {
            tracing::debug!(column, error = %err, "move rejected");
            return Err(err);
        }

        let player = self.current_player;
        let row = self
            .board
            .drop_piece(column, player.to_cell())
            .ok_or(MoveError::ColumnFull { column })?;
        self.moves_made += 1;
        self.last_move = Some((row, column));

        if self.board.check_win(row, column) {
            self.status = GameStatus::won_by(player);
        } else if self.moves_made == ROWS * COLS {
            self.status = GameStatus::Draw;
        } else {
            self.current_player = player.other();
        }

        tracing::debug!(
            player = %player,
            row,
            column,
            moves_made = self.moves_made,
            "move applied"
        );
        if self.status.is_terminal() {
            tracing::info!(status = %self.status, moves_made = self.moves_made, "game over");
        }

        self.observers.prune();
        self.observers.notify_all(self);
        Ok(())
    }

    fn validate_move(&self, column: usize) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameAlreadyOver {
                status: self.status,
            });
        }
        if column >= COLS {
            return Err(MoveError::InvalidColumn { column, cols: COLS });
        }
        if self.board.is_column_full(column) {
            return Err(MoveError::ColumnFull { column });
        }
        Ok(())
    }

    /// The player to move. Once the game is over this is the player who made
    /// the final move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn has_won(&self) -> bool {
        self.status.winner().is_some()
    }

    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, OutOfBounds> {
        self.board.get(row, col).ok_or(OutOfBounds { row, col })
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rows(&self) -> usize {
        ROWS
    }

    pub fn cols(&self) -> usize {
        COLS
    }

    /// Position of the most recent mark.
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        self.board.is_column_full(col)
    }

    /// Columns that would accept a move right now; empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
