use std::path::PathBuf;

use crate::game::GameStatus;

/// Reasons a move is refused. The game is untouched after any of them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside the board (0..{cols})")]
    InvalidColumn { column: usize, cols: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is already over ({status})")]
    GameAlreadyOver { status: GameStatus },
}

/// A cell query outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cell ({row}, {col}) is outside the board")]
pub struct OutOfBounds {
    pub row: usize,
    pub col: usize,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
