//! # Connect Four
//!
//! A Connect Four engine that owns the grid, enforces turn order and move
//! legality, detects wins and draws, and notifies registered observers after
//! every accepted move. Ships with a small terminal front-end built with
//! Ratatui that plays through the same public API.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, engine, observers
//! - [`ui`] — Terminal UI: status panel observer, game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;

pub use error::{MoveError, OutOfBounds};
pub use game::{BoardObserver, Cell, GameState, GameStatus, Player};
