//! Side markers and cell contents.

use serde::{Deserialize, Serialize};

/// One of the two sides in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player X (moves first).
    X,
    /// Player O.
    O,
}

impl Mark {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Contents of a single board cell.
///
/// Empty is a first-class state of the game, so cells are a tri-state
/// rather than an `Option<Mark>`. On the wire a cell is `null`, `"X"`
/// or `"O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<Mark>", into = "Option<Mark>")]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Cell claimed by a side.
    Occupied(Mark),
}

impl Cell {
    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Returns true if nobody has claimed the cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns true if `mark` occupies the cell.
    pub fn is(self, mark: Mark) -> bool {
        self == Cell::Occupied(mark)
    }
}

impl From<Option<Mark>> for Cell {
    fn from(value: Option<Mark>) -> Self {
        value.map_or(Cell::Empty, Cell::Occupied)
    }
}

impl From<Cell> for Option<Mark> {
    fn from(cell: Cell) -> Self {
        cell.mark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent().opponent(), Mark::O);
    }

    #[test]
    fn test_cell_wire_shape() {
        assert_eq!(serde_json::to_string(&Cell::Empty).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Cell::Occupied(Mark::O)).unwrap(), "\"O\"");
        let cell: Cell = serde_json::from_str("\"X\"").unwrap();
        assert_eq!(cell, Cell::Occupied(Mark::X));
    }

    #[test]
    fn test_mark_parses_from_letter() {
        assert_eq!("X".parse::<Mark>().unwrap(), Mark::X);
        assert!("Z".parse::<Mark>().is_err());
    }
}
