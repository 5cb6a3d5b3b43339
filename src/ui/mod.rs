//! Terminal UI: a status panel that listens to the game, and the game view
//! that forwards key presses to the engine as column choices.

mod app;
mod game_view;
mod status;

pub use app::App;
pub use status::{StatusLabels, StatusPanel};
