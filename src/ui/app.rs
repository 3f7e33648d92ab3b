use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use tracing::info;

use crate::game::{GameState, MoveError, Player};

/// Terminal UI settings, the `[ui]` table of the config file.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long to wait for a key press before redrawing.
    pub poll_interval_ms: u64,
    /// Column the selector starts on (0-based).
    pub start_column: usize,
    pub player_one_name: String,
    pub player_two_name: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            poll_interval_ms: 100,
            start_column: 3,
            player_one_name: Player::One.name().to_string(),
            player_two_name: Player::Two.name().to_string(),
        }
    }
}

/// Translates key presses into engine calls and keeps what the view needs.
pub struct App {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    config: UiConfig,
}

impl App {
    pub fn new(config: UiConfig) -> Self {
        App {
            game_state: GameState::new(),
            selected_column: config.start_column,
            should_quit: false,
            message: None,
            config,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let poll_interval = Duration::from_millis(self.config.poll_interval_ms);

        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(poll_interval)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
        Ok(())
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Display name configured for `player`
    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.config.player_one_name,
            Player::Two => &self.config.player_two_name,
        }
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;
        let last_column = self.game_state.board().width() - 1;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.selected_column < last_column {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column <= last_column {
                    self.selected_column = column;
                    self.drop_piece();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        info!("restart requested");
        self.game_state = GameState::new();
        self.selected_column = self.config.start_column;
        self.message = Some("New game started!".to_string());
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game_state.drop_piece(self.selected_column) {
            Ok(result) => {
                let name = self.player_name(result.placement.player).to_string();
                self.message = Some(match result.winner {
                    Some(_) => format!("{name} wins! Press 'r' to play again."),
                    None if self.game_state.is_board_full() => {
                        "Board is full and nobody won. Press 'r' to restart.".to_string()
                    }
                    None => format!(
                        "{name} played column {}",
                        result.placement.column + 1
                    ),
                });
            }
            Err(MoveError::ColumnFull) if self.game_state.is_board_full() => {
                self.message =
                    Some("Board is full and nobody won. Press 'r' to restart.".to_string());
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, self);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}
