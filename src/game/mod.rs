//! Core Connect Four game logic: the grid, the two players, and the turn and
//! win engine that drives a game from the first drop to a winner.

mod board;
mod player;
mod state;

pub use board::{Board, BoardError, Cell, Direction, WinningLine, COLS, ROWS, RUN_LENGTH};
pub use player::Player;
pub use state::{GameState, GameStatus, MoveError, MoveResult, Placement};
