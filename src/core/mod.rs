//! Core types: players, state, commands, RNG, configuration.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{ActionKind, ActionRecord, Command, TaskOutcome};
pub use config::{ConfigError, GameConfig};
pub use player::{PlayerColor, PlayerMap};
pub use rng::GameRng;
pub use state::{GamePhase, GameState};
