use std::cell::{Cell, RefCell};

use crate::config::DisplayConfig;
use crate::game::{BoardObserver, GameState, GameStatus, Player};

/// The three status lines shown under the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLabels {
    pub moves: String,
    pub player: String,
    pub status: String,
}

/// Observer that keeps the status lines in sync with the game and shuts off
/// input once the game is decided.
#[derive(Debug)]
pub struct StatusPanel {
    player_names: [String; 2],
    labels: RefCell<StatusLabels>,
    input_enabled: Cell<bool>,
}

impl StatusPanel {
    pub fn new(display: &DisplayConfig, game: &GameState) -> Self {
        let player_names = [
            display.player_one_name.clone(),
            display.player_two_name.clone(),
        ];
        let labels = describe(&player_names, game);
        StatusPanel {
            player_names,
            labels: RefCell::new(labels),
            input_enabled: Cell::new(!game.is_terminal()),
        }
    }

    pub fn labels(&self) -> StatusLabels {
        self.labels.borrow().clone()
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled.get()
    }

    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::PlayerOne => &self.player_names[0],
            Player::PlayerTwo => &self.player_names[1],
        }
    }
}

impl BoardObserver for StatusPanel {
    fn on_board_changed(&self, game: &GameState) {
        *self.labels.borrow_mut() = describe(&self.player_names, game);
        if game.is_terminal() {
            self.input_enabled.set(false);
        }
    }
}

fn describe(names: &[String; 2], game: &GameState) -> StatusLabels {
    let name = |player: Player| match player {
        Player::PlayerOne => names[0].as_str(),
        Player::PlayerTwo => names[1].as_str(),
    };
    let status = match game.status() {
        GameStatus::InProgress => "in progress".to_string(),
        GameStatus::PlayerOneWins => format!("{} wins", name(Player::PlayerOne)),
        GameStatus::PlayerTwoWins => format!("{} wins", name(Player::PlayerTwo)),
        GameStatus::Draw => "draw".to_string(),
    };
    StatusLabels {
        moves: format!("{} moves made", game.moves_made()),
        player: format!("Current player: {}", name(game.current_player())),
        status: format!("Status: {status}"),
    }
}
