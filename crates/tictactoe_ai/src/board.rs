//! The 3x3 board and its win/draw rules.

use crate::error::MoveError;
use crate::mark::{Cell, Mark};
use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Index triples of the eight winning lines.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order (0-8). Strategies search by cloning
/// the board, so it is a plain `Copy` value with no shared state.
///
/// Serializes as a 9-element array of `null | "X" | "O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<Option<Mark>>", try_from = "Vec<Option<Mark>>")]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from a sequence of optional marks.
    ///
    /// Missing trailing cells are left empty; anything past the ninth
    /// entry is ignored.
    pub fn from_spaces<I>(spaces: I) -> Self
    where
        I: IntoIterator<Item = Option<Mark>>,
    {
        let mut board = Self::new();
        for (cell, space) in board.cells.iter_mut().zip(spaces) {
            *cell = Cell::from(space);
        }
        board
    }

    /// Returns the cells in the wire shape (`None` for empty).
    pub fn spaces(&self) -> [Option<Mark>; CELL_COUNT] {
        self.cells.map(Cell::mark)
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Gets the cell at `index`, or `None` off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Indices of all empty cells, ascending.
    pub fn open_spaces(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.cells[i].is_empty()).collect()
    }

    /// Returns true if `index` is on the board and empty.
    pub fn is_open(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Places `mark` at `index` if the cell is open.
    ///
    /// Returns false and leaves the board untouched otherwise.
    pub fn mark(&mut self, index: usize, mark: Mark) -> bool {
        self.try_mark(index, mark).is_ok()
    }

    /// Places `mark` at `index`, reporting why the move was refused.
    pub fn try_mark(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        match self.get(index) {
            None => Err(MoveError::InvalidPosition(index)),
            Some(Cell::Occupied(_)) => Err(MoveError::OccupiedCell(index)),
            Some(Cell::Empty) => {
                self.cells[index] = Cell::Occupied(mark);
                Ok(())
            }
        }
    }

    /// Returns a copy of the board with `mark` placed at `index`.
    ///
    /// Used by the search strategies; an illegal placement yields an
    /// unchanged copy.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut next = *self;
        next.mark(index, mark);
        next
    }

    /// Checks if the board is full (all cells occupied).
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns true if `mark` holds all three cells of any winning line.
    pub fn has_win(&self, mark: Mark) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i].is(mark)))
    }

    /// Returns the winning side, checking X before O.
    pub fn winner(&self) -> Option<Mark> {
        [Mark::X, Mark::O].into_iter().find(|&mark| self.has_win(mark))
    }

    /// Returns true if the game on this board is over.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Counts cells held by `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|cell| cell.is(mark)).count()
    }
}

impl std::fmt::Display for Board {
    /// Renders the board as a grid, showing empty cells by their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => write!(f, "{}", pos + 1)?,
                    Cell::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Board wire array longer than nine entries.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Board has {} spaces, expected at most {}", _0, CELL_COUNT)]
pub struct TooManySpaces(pub usize);

impl std::error::Error for TooManySpaces {}

impl TryFrom<Vec<Option<Mark>>> for Board {
    type Error = TooManySpaces;

    fn try_from(spaces: Vec<Option<Mark>>) -> Result<Self, Self::Error> {
        if spaces.len() > CELL_COUNT {
            return Err(TooManySpaces(spaces.len()));
        }
        Ok(Self::from_spaces(spaces))
    }
}

impl From<Board> for Vec<Option<Mark>> {
    fn from(board: Board) -> Self {
        board.spaces().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(board.winner(), None);
        assert_eq!(board.open_spaces(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        for i in [0, 1, 2] {
            assert!(board.mark(i, Mark::O));
        }
        assert!(board.has_win(Mark::O));
        assert!(!board.has_win(Mark::X));
        assert_eq!(board.winner(), Some(Mark::O));
    }

    #[test]
    fn test_mark_rejects_off_board_and_occupied() {
        let mut board = Board::new();
        assert!(!board.mark(9, Mark::X));
        assert!(board.mark(3, Mark::X));
        let before = board;
        assert!(!board.mark(3, Mark::O));
        assert_eq!(board, before);
        assert_eq!(board.try_mark(3, Mark::O), Err(MoveError::OccupiedCell(3)));
        assert_eq!(board.try_mark(42, Mark::O), Err(MoveError::InvalidPosition(42)));
    }

    #[test]
    fn test_is_open_out_of_range() {
        let board = Board::new();
        assert!(!board.is_open(9));
        assert!(!board.is_open(usize::MAX));
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(4, Mark::X);
        assert!(board.is_open(4));
        assert!(!next.is_open(4));
    }

    #[test]
    fn test_display_grid() {
        let board = Board::from_spaces([Some(Mark::X), None, Some(Mark::O)]);
        assert_eq!(board.to_string(), "X|2|O\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_wire_round_trip_pads_short_arrays() {
        let board: Board = serde_json::from_str(r#"[null, "X"]"#).unwrap();
        assert_eq!(board.get(1), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.open_spaces().len(), 8);
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"[null,"X",null,null,null,null,null,null,null]"#);
    }

    #[test]
    fn test_wire_rejects_long_arrays() {
        let wire = serde_json::to_string(&[None::<Mark>; 10]).unwrap();
        let result: Result<Board, _> = serde_json::from_str(&wire);
        assert!(result.is_err());
    }
}
