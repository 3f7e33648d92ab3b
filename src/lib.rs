//! # Connect Four
//!
//! Two-player Connect Four on a 7x6 grid, played in the terminal. Players
//! alternate dropping pieces into columns until one of them lines up four in
//! a row horizontally, vertically, or on a diagonal.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, turn and win engine
//! - [`ui`]: Terminal UI built with Ratatui
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: File-backed tracing setup
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
