//! Board cells and the validated path.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What happens when a piece lands on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Start,
    Path,
    Star,
    Trap,
    End,
}

/// One addressable location on the board.
///
/// `id` equals the cell's index along the path and doubles as the position
/// value stored for each player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub id: usize,
    pub x: i32,
    pub y: i32,
    pub kind: CellKind,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(id: usize, x: i32, y: i32, kind: CellKind) -> Self {
        Self { id, x, y, kind }
    }
}

/// Board invariant violations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board needs at least 2 cells, got {0}")]
    TooShort(usize),
    #[error("cell at index {index} has id {id}")]
    IdMismatch { index: usize, id: usize },
    #[error("first cell must be start, found {0:?}")]
    BadStart(CellKind),
    #[error("last cell must be end, found {0:?}")]
    BadEnd(CellKind),
    #[error("start/end kind at interior index {0}")]
    MisplacedTerminal(usize),
    #[error("{requested} special cells requested but only {available} interior cells exist")]
    TooManySpecials { requested: usize, available: usize },
    #[error("board needs at least one column")]
    NoColumns,
}

/// An ordered, immutable sequence of cells from start to end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardParts")]
pub struct BoardPath {
    cells: Vec<Cell>,
}

/// Unchecked wire form, validated through `BoardPath::new`.
#[derive(Deserialize)]
struct BoardParts {
    cells: Vec<Cell>,
}

impl TryFrom<BoardParts> for BoardPath {
    type Error = BoardError;

    fn try_from(parts: BoardParts) -> Result<Self, Self::Error> {
        Self::new(parts.cells)
    }
}

impl BoardPath {
    /// Validate and wrap a cell sequence.
    pub fn new(cells: Vec<Cell>) -> Result<Self, BoardError> {
        if cells.len() < 2 {
            return Err(BoardError::TooShort(cells.len()));
        }
        for (index, cell) in cells.iter().enumerate() {
            if cell.id != index {
                return Err(BoardError::IdMismatch { index, id: cell.id });
            }
        }

        let first = cells[0].kind;
        let last = cells[cells.len() - 1].kind;
        if first != CellKind::Start {
            return Err(BoardError::BadStart(first));
        }
        if last != CellKind::End {
            return Err(BoardError::BadEnd(last));
        }
        if let Some(cell) = cells[1..cells.len() - 1]
            .iter()
            .find(|c| matches!(c.kind, CellKind::Start | CellKind::End))
        {
            return Err(BoardError::MisplacedTerminal(cell.id));
        }

        Ok(Self { cells })
    }

    /// Build a straight board from kinds alone, laid out along `y = 0`.
    ///
    /// ```
    /// use path_duel::board::{BoardPath, CellKind};
    ///
    /// let board = BoardPath::from_kinds(&[CellKind::Start, CellKind::Star, CellKind::End]).unwrap();
    /// assert_eq!(board.last_index(), 2);
    /// assert_eq!(board.kind_at(1), CellKind::Star);
    /// ```
    pub fn from_kinds(kinds: &[CellKind]) -> Result<Self, BoardError> {
        let cells = kinds
            .iter()
            .enumerate()
            .map(|(id, &kind)| Cell::new(id, id as i32, 0, kind))
            .collect();
        Self::new(cells)
    }

    /// A start, `len - 2` plain cells and an end.
    pub fn plain(len: usize) -> Result<Self, BoardError> {
        let kinds: Vec<_> = (0..len)
            .map(|i| match i {
                0 => CellKind::Start,
                i if i + 1 == len => CellKind::End,
                _ => CellKind::Path,
            })
            .collect();
        Self::from_kinds(&kinds)
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a validated board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Index of the end cell.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.cells.len() - 1
    }

    /// Cell at `index`, if on the board.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Kind of the cell at `index`. Positions are clamped, so an index past
    /// the end reads as the end cell.
    #[must_use]
    pub fn kind_at(&self, index: usize) -> CellKind {
        self.cells[index.min(self.last_index())].kind
    }

    /// All cells in path order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Indices of all cells of a kind.
    pub fn indices_of(&self, kind: CellKind) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().filter(move |c| c.kind == kind).map(|c| c.id)
    }
}
