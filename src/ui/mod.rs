//! Terminal UI: turns key presses into column drops and draws the board.

mod app;
mod game_view;

pub use app::{App, UiConfig};
