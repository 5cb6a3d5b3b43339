use std::fmt;

use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    PlayerOne,
    PlayerTwo,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    /// The mark this player leaves on the grid.
    pub fn to_cell(self) -> Cell {
        match self {
            Player::PlayerOne => Cell::PlayerOne,
            Player::PlayerTwo => Cell::PlayerTwo,
        }
    }

    /// Owner of a mark; `None` for an empty cell.
    pub fn from_cell(cell: Cell) -> Option<Player> {
        match cell {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::PlayerOne),
            Cell::PlayerTwo => Some(Player::PlayerTwo),
        }
    }

    /// Short label used in status lines
    pub fn name(self) -> &'static str {
        match self {
            Player::PlayerOne => "P1",
            Player::PlayerTwo => "P2",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
