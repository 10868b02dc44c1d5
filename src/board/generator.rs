//! Board generators.
//!
//! The session asks its generator for a board once when it is created and
//! again at every game start. The path shape is fixed by the generator's
//! parameters; special-cell placement may draw from the RNG.

use super::path::{BoardError, BoardPath, Cell, CellKind};
use crate::core::GameRng;

/// Produces a fresh board path.
pub trait BoardGenerator {
    /// Generate a validated board.
    fn generate(&mut self, rng: &mut GameRng) -> Result<BoardPath, BoardError>;
}

/// Always returns the same board. Useful for tests and fixed layouts.
#[derive(Clone, Debug)]
pub struct FixedBoard {
    board: BoardPath,
}

impl FixedBoard {
    pub fn new(board: BoardPath) -> Self {
        Self { board }
    }
}

impl BoardGenerator for FixedBoard {
    fn generate(&mut self, _rng: &mut GameRng) -> Result<BoardPath, BoardError> {
        Ok(self.board.clone())
    }
}

/// Snake layout over a grid: row 0 runs left to right, row 1 right to left,
/// and so on. Stars and traps are scattered over distinct interior cells.
#[derive(Clone, Debug)]
pub struct SerpentineGenerator {
    pub length: usize,
    pub columns: usize,
    pub stars: usize,
    pub traps: usize,
}

impl Default for SerpentineGenerator {
    fn default() -> Self {
        Self {
            length: 30,
            columns: 6,
            stars: 4,
            traps: 4,
        }
    }
}

impl SerpentineGenerator {
    /// Grid coordinates of the `index`-th cell.
    fn coordinates(&self, index: usize) -> (i32, i32) {
        let row = index / self.columns;
        let offset = index % self.columns;
        let col = if row % 2 == 0 {
            offset
        } else {
            self.columns - 1 - offset
        };
        (col as i32, row as i32)
    }
}

impl BoardGenerator for SerpentineGenerator {
    fn generate(&mut self, rng: &mut GameRng) -> Result<BoardPath, BoardError> {
        if self.columns == 0 {
            return Err(BoardError::NoColumns);
        }
        if self.length < 2 {
            return Err(BoardError::TooShort(self.length));
        }

        let interior = self.length - 2;
        let requested = self.stars + self.traps;
        if requested > interior {
            return Err(BoardError::TooManySpecials {
                requested,
                available: interior,
            });
        }

        let mut kinds = vec![CellKind::Path; self.length];
        kinds[0] = CellKind::Start;
        kinds[self.length - 1] = CellKind::End;

        let mut slots: Vec<usize> = (1..self.length - 1).collect();
        rng.shuffle(&mut slots);
        for &slot in &slots[..self.stars] {
            kinds[slot] = CellKind::Star;
        }
        for &slot in &slots[self.stars..requested] {
            kinds[slot] = CellKind::Trap;
        }

        let cells = kinds
            .into_iter()
            .enumerate()
            .map(|(id, kind)| {
                let (x, y) = self.coordinates(id);
                Cell::new(id, x, y, kind)
            })
            .collect();

        BoardPath::new(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serpentine_shape() {
        let mut generator = SerpentineGenerator {
            length: 12,
            columns: 4,
            stars: 2,
            traps: 3,
        };
        let board = generator.generate(&mut GameRng::new(1)).unwrap();

        assert_eq!(board.len(), 12);
        let coords: Vec<_> = board.cells().iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(&coords[..8], &[
            (0, 0), (1, 0), (2, 0), (3, 0),
            (3, 1), (2, 1), (1, 1), (0, 1),
        ]);
        assert_eq!(board.indices_of(CellKind::Star).count(), 2);
        assert_eq!(board.indices_of(CellKind::Trap).count(), 3);
    }

    #[test]
    fn test_serpentine_is_deterministic() {
        let mut generator = SerpentineGenerator::default();
        let a = generator.generate(&mut GameRng::new(5)).unwrap();
        let b = generator.generate(&mut GameRng::new(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_serpentine_rejects_crowded_board() {
        let mut generator = SerpentineGenerator {
            length: 5,
            columns: 5,
            stars: 2,
            traps: 2,
        };
        let err = generator.generate(&mut GameRng::new(0)).unwrap_err();
        assert_eq!(err, BoardError::TooManySpecials { requested: 4, available: 3 });
    }

    #[test]
    fn test_fixed_board() {
        let board = BoardPath::plain(6).unwrap();
        let mut generator = FixedBoard::new(board.clone());
        assert_eq!(generator.generate(&mut GameRng::new(0)).unwrap(), board);
    }
}
