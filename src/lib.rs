//! # path-duel
//!
//! A two-player board-traversal game engine. Players take turns rolling a
//! die and walking a shared path from the start cell to the end cell. Stars,
//! traps and collisions hand out physical challenges whose reported results
//! move pieces forward or back. The first player to land exactly on the end
//! cell wins.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every rule is a function from `&GameState` to a
//!    new state plus an `EffectBatch`. Timers, text and screens live outside.
//!
//! 2. **One timeline**: animation steps and delayed transitions are timers on
//!    a single virtual clock, so a session is fully deterministic for a seed.
//!
//! 3. **Content at the edges**: boards, task texts and translations come from
//!    traits the host implements.
//!
//! ## Modules
//!
//! - `core`: players, state, commands, RNG, configuration
//! - `board`: cells, the validated path, board generators
//! - `movement`: positions, overshoot/bounce planning, animation jobs
//! - `events`: landing classification
//! - `tasks`: task queue, executor assignment, content providers
//! - `outcome`: rewards, penalties and collision consequences
//! - `effects`: effects and structured messages
//! - `rules`: transitions and the turn manager
//! - `schedule`: the tick scheduler
//! - `content`: modes, languages and translation bundles
//! - `session`: `GameSession`, tying it all together

pub mod core;
pub mod board;
pub mod movement;
pub mod events;
pub mod tasks;
pub mod outcome;
pub mod effects;
pub mod rules;
pub mod schedule;
pub mod content;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    PlayerColor, PlayerMap,
    GameRng,
    GameConfig, ConfigError,
    Command, TaskOutcome, ActionKind, ActionRecord,
    GamePhase, GameState,
};

pub use crate::board::{BoardError, BoardGenerator, BoardPath, Cell, CellKind, FixedBoard, SerpentineGenerator};

pub use crate::movement::{AnimationJob, Completion, PositionStore, Trajectory};

pub use crate::events::{LandingEvent, TaskEvent};

pub use crate::tasks::{CurrentTask, JsonTaskProvider, StaticTaskProvider, TaskProvider, TaskQueue};

pub use crate::outcome::OutcomePlan;

pub use crate::effects::{Deferred, Effect, EffectBatch, Message};

pub use crate::rules::{Rules, Transition, TurnTracker};

pub use crate::schedule::{ScheduledJob, TickScheduler};

pub use crate::content::{
    BuiltinLocalizer, ContentError, GameMode, JsonLocalizer, Language, Localizer, TranslationBundle,
};

pub use crate::session::{GameError, GameSession};
