//! Session orchestration.

mod game_session;

pub use game_session::{GameError, GameSession};
