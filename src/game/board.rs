use std::fmt;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of aligned marks needed to win.
pub const CONNECT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Cell::Empty => '.',
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
        };
        write!(f, "{symbol}")
    }
}

/// The four scan axes through an anchor cell, as (row step, col step).
/// Row 0 is the top, so "/" rises towards the right with a negative row step.
const AXES: [(isize, isize); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (-1, 1), // diagonal "/"
    (1, 1),  // diagonal "\"
];

/// The raw grid. Knows about gravity and alignment, nothing about turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Cell at a position, `None` outside the grid.
    /// Row 0 is the top, row `ROWS - 1` is the bottom.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= COLS || !self.cells[0][col].is_empty()
    }

    /// Lowest empty row of a column, scanning bottom-up.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col].is_empty())
    }

    /// Settle `cell` into the lowest empty row of `col` and return that row.
    /// Returns `None` without touching the grid if the column is out of range
    /// or full; callers validate first and report the precise reason.
    pub(crate) fn drop_piece(&mut self, col: usize, cell: Cell) -> Option<usize> {
        let row = self.landing_row(col)?;
        self.cells[row][col] = cell;
        Some(row)
    }

    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Whether the mark at (row, col) completes a line of at least
    /// [`CONNECT`] along any axis.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        match self.get(row, col) {
            None | Some(Cell::Empty) => false,
            Some(cell) => AXES.iter().any(|&(dr, dc)| {
                1 + self.run_length(row, col, dr, dc, cell)
                    + self.run_length(row, col, -dr, -dc, cell)
                    >= CONNECT
            }),
        }
    }

    /// Consecutive `cell` marks starting one step away from the anchor.
    /// Stops at the first mismatch or at the grid edge.
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 0;
        let (mut r, mut c) = (row, col);
        loop {
            let (Some(next_r), Some(next_c)) = (r.checked_add_signed(dr), c.checked_add_signed(dc))
            else {
                break;
            };
            if self.get(next_r, next_c) != Some(cell) {
                break;
            }
            count += 1;
            r = next_r;
            c = next_c;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(board: &mut Board, moves: &[(usize, Cell)]) -> usize {
        let mut last = 0;
        for &(col, cell) in moves {
            last = board.drop_piece(col, cell).unwrap();
        }
        last
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Some(Cell::Empty));
            }
        }
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_get_outside_grid() {
        let board = Board::new();
        assert_eq!(board.get(ROWS, 0), None);
        assert_eq!(board.get(0, COLS), None);
    }

    #[test]
    fn test_drop_piece_settles_at_bottom() {
        let mut board = Board::new();

        let row = board.drop_piece(3, Cell::PlayerOne).unwrap();
        assert_eq!(row, ROWS - 1);
        assert_eq!(board.get(ROWS - 1, 3), Some(Cell::PlayerOne));

        let row = board.drop_piece(3, Cell::PlayerTwo).unwrap();
        assert_eq!(row, ROWS - 2);
        assert_eq!(board.get(ROWS - 2, 3), Some(Cell::PlayerTwo));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(0, Cell::PlayerOne).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.landing_row(0), None);
        assert_eq!(board.drop_piece(0, Cell::PlayerTwo), None);
        assert_eq!(board.occupied(), ROWS);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert!(board.is_column_full(COLS));
        assert_eq!(board.drop_piece(COLS, Cell::PlayerOne), None);
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::PlayerOne).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.occupied(), ROWS * COLS);
    }

    #[test]
    fn test_horizontal_win_from_middle_anchor() {
        let mut board = Board::new();
        for col in [0, 1, 3] {
            board.drop_piece(col, Cell::PlayerOne).unwrap();
        }
        assert!(!board.check_win(ROWS - 1, 3));
        let row = board.drop_piece(2, Cell::PlayerOne).unwrap();
        assert!(board.check_win(row, 2));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        let row = fill(&mut board, &[(3, Cell::PlayerTwo); 4]);
        assert_eq!(row, ROWS - 4);
        assert!(board.check_win(row, 3));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        let row = fill(
            &mut board,
            &[
                (0, Cell::PlayerOne),
                (1, Cell::PlayerTwo),
                (1, Cell::PlayerOne),
                (2, Cell::PlayerTwo),
                (2, Cell::PlayerTwo),
                (2, Cell::PlayerOne),
                (3, Cell::PlayerTwo),
                (3, Cell::PlayerTwo),
                (3, Cell::PlayerTwo),
                (3, Cell::PlayerOne),
            ],
        );
        assert!(board.check_win(row, 3));
        // Every cell on the line sees the same run.
        assert!(board.check_win(ROWS - 1, 0));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        let row = fill(
            &mut board,
            &[
                (6, Cell::PlayerOne),
                (5, Cell::PlayerTwo),
                (5, Cell::PlayerOne),
                (4, Cell::PlayerTwo),
                (4, Cell::PlayerTwo),
                (4, Cell::PlayerOne),
                (3, Cell::PlayerTwo),
                (3, Cell::PlayerTwo),
                (3, Cell::PlayerTwo),
                (3, Cell::PlayerOne),
            ],
        );
        assert!(board.check_win(row, 3));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::PlayerOne).unwrap();
        }
        assert!(!board.check_win(ROWS - 1, 1));
    }

    #[test]
    fn test_run_interrupted_by_other_player() {
        let mut board = Board::new();
        fill(
            &mut board,
            &[
                (0, Cell::PlayerOne),
                (1, Cell::PlayerOne),
                (2, Cell::PlayerTwo),
                (3, Cell::PlayerOne),
                (4, Cell::PlayerOne),
            ],
        );
        assert!(!board.check_win(ROWS - 1, 4));
    }

    #[test]
    fn test_check_win_on_empty_or_outside() {
        let board = Board::new();
        assert!(!board.check_win(0, 0));
        assert!(!board.check_win(ROWS, COLS));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::PlayerOne).unwrap();
        board.drop_piece(6, Cell::PlayerTwo).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ROWS);
        assert_eq!(lines[0], ".......");
        assert_eq!(lines[ROWS - 1], "X.....O");
    }
}
