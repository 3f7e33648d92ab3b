use tracing::{debug, info, instrument};

use super::board::{Board, WinningLine};
use super::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished(Player),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("invalid column")]
    InvalidColumn,
    #[error("game is over")]
    GameOver,
}

/// Where a piece landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

/// Result of an accepted move. `winner` is set when the move ended the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub placement: Placement,
    pub winner: Option<Player>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    move_count: usize,
}

impl GameState {
    /// Create initial game state on the standard board
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// Start a game on the given board. The board is expected to be empty.
    pub fn with_board(board: Board) -> Self {
        info!(width = board.width(), height = board.height(), "new game");
        GameState {
            board,
            current_player: Player::One,
            status: GameStatus::InProgress,
            move_count: 0,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Hand the turn to the other player
    pub fn advance_turn(&mut self) {
        self.current_player = self.current_player.other();
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished(_))
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Finished(player) => Some(player),
            GameStatus::InProgress => None,
        }
    }

    /// The four-in-a-row that ended the game, if any
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winner()
            .and_then(|player| self.board.winning_line(player))
    }

    /// Number of pieces placed so far
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// True when no column can take another piece. A full board without a
    /// winner does not finish the game; every further drop is rejected.
    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// Get list of columns that accept a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_finished() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `column`.
    #[instrument(level = "debug", skip(self), fields(player = %self.current_player))]
    pub fn drop_piece(&mut self, column: usize) -> Result<MoveResult, MoveError> {
        if self.is_finished() {
            debug!("rejected: game over");
            return Err(MoveError::GameOver);
        }
        if column >= self.board.width() {
            debug!("rejected: invalid column");
            return Err(MoveError::InvalidColumn);
        }

        let Some(row) = self.board.lowest_empty_row(column) else {
            debug!("rejected: column full");
            return Err(MoveError::ColumnFull);
        };

        let player = self.current_player;
        self.board.place(row, column, player);
        self.move_count += 1;
        debug!(row, "piece placed");

        let placement = Placement {
            row,
            column,
            player,
        };

        if self.board.check_win(player) {
            self.status = GameStatus::Finished(player);
            info!(%player, moves = self.move_count, "game won");
            debug!("final board:\n{}", self.board);
            return Ok(MoveResult {
                placement,
                winner: Some(player),
            });
        }

        self.advance_turn();
        Ok(MoveResult {
            placement,
            winner: None,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
