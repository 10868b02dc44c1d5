//! The board: an ordered path of cells from start to end.
//!
//! A `BoardPath` is produced by a `BoardGenerator` and stays immutable for
//! the whole game. Cell ids equal their index along the path, so a player's
//! position is just a cell id.

mod generator;
mod path;

pub use generator::{BoardGenerator, FixedBoard, SerpentineGenerator};
pub use path::{BoardError, BoardPath, Cell, CellKind};
