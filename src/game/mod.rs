//! Core Connect Four game logic: the grid, players, the move engine with its
//! win/draw detection, and change notification for front-ends.

mod board;
mod observer;
mod player;
mod state;

pub use board::{Board, Cell, COLS, CONNECT, ROWS};
pub use observer::{BoardObserver, ObserverRegistry};
pub use player::Player;
pub use state::{GameState, GameStatus};
