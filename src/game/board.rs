use std::fmt;

use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of consecutive pieces needed to win.
pub const RUN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions must be positive (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },
}

/// The four directions a winning run can extend from its start cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// (dy, dx) step between consecutive cells of a run
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// A four-in-a-row found on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub start: (usize, usize),
    pub direction: Direction,
    pub cells: [(usize, usize); RUN_LENGTH],
}

impl WinningLine {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }
}

/// Grid of cells indexed `[row][col]`. Row 0 is the top, the last row is the
/// bottom where pieces land first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Create a new empty board of the standard 7x6 size
    pub fn new() -> Self {
        Board {
            width: COLS,
            height: ROWS,
            cells: vec![vec![Cell::Empty; COLS]; ROWS],
        }
    }

    /// Create an empty board with the given number of columns and rows
    pub fn with_size(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Board {
            width,
            height,
            cells: vec![vec![Cell::Empty; width]; height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Row a piece dropped into `col` would land on, or `None` if the column
    /// is full. Panics if `col` is out of range.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        (0..self.height)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Write `player` into an empty cell.
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        debug_assert_eq!(
            self.cells[row][col],
            Cell::Empty,
            "cell ({row}, {col}) is already occupied"
        );
        self.cells[row][col] = player.to_cell();
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.lowest_empty_row(col).is_none()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// Check whether `player` has four in a row anywhere on the board
    pub fn check_win(&self, player: Player) -> bool {
        self.winning_line(player).is_some()
    }

    /// Scan every cell as the start of a run in each direction and return the
    /// first run made entirely of `player`'s pieces.
    pub fn winning_line(&self, player: Player) -> Option<WinningLine> {
        let target = player.to_cell();

        for row in 0..self.height {
            for col in 0..self.width {
                for direction in Direction::ALL {
                    let Some(cells) = self.run_from(row, col, direction) else {
                        continue;
                    };
                    if cells.iter().all(|&(r, c)| self.cells[r][c] == target) {
                        return Some(WinningLine {
                            start: (row, col),
                            direction,
                            cells,
                        });
                    }
                }
            }
        }

        None
    }

    /// Coordinates of the run starting at (row, col), or `None` if any of
    /// them fall off the board.
    fn run_from(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Option<[(usize, usize); RUN_LENGTH]> {
        let (dy, dx) = direction.offset();
        let mut cells = [(0, 0); RUN_LENGTH];

        for (i, slot) in cells.iter_mut().enumerate() {
            let r = row as isize + dy * i as isize;
            let c = col as isize + dx * i as isize;
            if r < 0 || c < 0 || r as usize >= self.height || c as usize >= self.width {
                return None;
            }
            *slot = (r as usize, c as usize);
        }

        Some(cells)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => '.',
                    Cell::Player1 => 'X',
                    Cell::Player2 => 'O',
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drop a piece the way the engine does: into the lowest empty row.
    fn drop_into(board: &mut Board, col: usize, player: Player) -> usize {
        let row = board.lowest_empty_row(col).unwrap();
        board.place(row, col, player);
        row
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.width(), 7);
        assert_eq!(board.height(), 6);
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_with_size() {
        let board = Board::with_size(4, 5).unwrap();
        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 5);
        assert_eq!(board.lowest_empty_row(3), Some(4));
    }

    #[test]
    fn test_with_size_rejects_zero() {
        assert_eq!(
            Board::with_size(0, 6),
            Err(BoardError::InvalidDimensions { width: 0, height: 6 })
        );
        assert!(Board::with_size(7, 0).is_err());
    }

    #[test]
    fn test_lowest_empty_row_walks_up_the_column() {
        let mut board = Board::new();
        for expected in (0..ROWS).rev() {
            assert_eq!(board.lowest_empty_row(3), Some(expected));
            board.place(expected, 3, Player::One);
        }
        assert_eq!(board.lowest_empty_row(3), None);
        assert!(board.is_column_full(3));
        assert!(!board.is_column_full(2));
    }

    #[test]
    fn test_lowest_empty_row_does_not_mutate() {
        let board = Board::new();
        let before = board.clone();
        let _ = board.lowest_empty_row(0);
        assert_eq!(board, before);
    }

    #[test]
    #[should_panic]
    fn test_lowest_empty_row_out_of_range_panics() {
        Board::new().lowest_empty_row(COLS);
    }

    #[test]
    fn test_place() {
        let mut board = Board::new();
        assert_eq!(drop_into(&mut board, 3, Player::One), 5);
        assert_eq!(board.get(5, 3), Cell::Player1);
        assert_eq!(drop_into(&mut board, 3, Player::Two), 4);
        assert_eq!(board.get(4, 3), Cell::Player2);
        assert_eq!(board.get(5, 3), Cell::Player1);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                drop_into(&mut board, col, Player::One);
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_empty_board_has_no_win() {
        let board = Board::new();
        assert!(!board.check_win(Player::One));
        assert!(!board.check_win(Player::Two));
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 0..4 {
            drop_into(&mut board, col, Player::One);
        }
        let line = board.winning_line(Player::One).unwrap();
        assert_eq!(line.direction, Direction::Horizontal);
        assert_eq!(line.cells, [(5, 0), (5, 1), (5, 2), (5, 3)]);
        assert!(!board.check_win(Player::Two));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            drop_into(&mut board, 3, Player::Two);
        }
        let line = board.winning_line(Player::Two).unwrap();
        assert_eq!(line.direction, Direction::Vertical);
        assert_eq!(line.start, (2, 3));
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place(2 + i, 1 + i, Player::Two);
        }
        let line = board.winning_line(Player::Two).unwrap();
        assert_eq!(line.direction, Direction::DiagonalDownRight);
        assert_eq!(line.start, (2, 1));
        assert!(line.contains(5, 4));
        assert!(!board.check_win(Player::One));
    }

    #[test]
    fn test_diagonal_down_left_win() {
        let mut board = Board::new();
        // (2,6) -> (5,3)
        for i in 0..4 {
            board.place(2 + i, 6 - i, Player::One);
        }
        let line = board.winning_line(Player::One).unwrap();
        assert_eq!(line.direction, Direction::DiagonalDownLeft);
        assert_eq!(line.cells, [(2, 6), (3, 5), (4, 4), (5, 3)]);
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            drop_into(&mut board, col, Player::One);
        }
        assert!(!board.check_win(Player::One));
    }

    #[test]
    fn test_run_does_not_wrap_across_rows() {
        let mut board = Board::new();
        // Two pieces at the right edge of the bottom row, two at the left
        // edge of the row above: contiguous in memory order only.
        board.place(5, 5, Player::One);
        board.place(5, 6, Player::One);
        board.place(4, 0, Player::One);
        board.place(4, 1, Player::One);
        assert!(!board.check_win(Player::One));
    }

    #[test]
    fn test_mixed_run_is_not_a_win() {
        let mut board = Board::new();
        drop_into(&mut board, 0, Player::One);
        drop_into(&mut board, 1, Player::One);
        drop_into(&mut board, 2, Player::Two);
        drop_into(&mut board, 3, Player::One);
        assert!(!board.check_win(Player::One));
    }

    #[test]
    fn test_small_board_cannot_win() {
        let mut board = Board::with_size(3, 3).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                board.place(row, col, Player::One);
            }
        }
        assert!(!board.check_win(Player::One));
    }

    #[test]
    fn test_full_board_without_a_run() {
        // Columns alternate in pairs so no four line up in any direction.
        let pattern = ["XXOOXXO", "OOXXOOX", "XXOOXXO", "OOXXOOX", "XXOOXXO", "OOXXOOX"];
        let board = board_from(&pattern);
        assert!(board.is_full());
        assert!(!board.check_win(Player::One));
        assert!(!board.check_win(Player::Two));
    }

    #[test]
    fn test_display() {
        let mut board = Board::with_size(4, 2).unwrap();
        board.place(1, 0, Player::One);
        board.place(1, 1, Player::Two);
        assert_eq!(board.to_string(), "....\nXO..\n");
    }

    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::with_size(rows[0].len(), rows.len()).unwrap();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    'X' => board.place(row, col, Player::One),
                    'O' => board.place(row, col, Player::Two),
                    _ => {}
                }
            }
        }
        board
    }
}
