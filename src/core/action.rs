//! Player commands and the action history.
//!
//! `Command` is everything a user-facing control can ask of a session.
//! Accepted rolls and task reports are kept as `ActionRecord`s so a finished
//! game can be inspected turn by turn.

use serde::{Deserialize, Serialize};

use super::player::PlayerColor;
use crate::content::{GameMode, Language};

/// Result of a challenge task, as reported by the players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskOutcome {
    Completed,
    Failed,
}

/// A user-facing control input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Start a game in the given mode. Only valid from the start screen.
    StartGame(GameMode),
    /// Roll the die for the current player.
    Roll,
    /// Use a die value rolled outside the session (a physical die).
    SubmitRoll(u8),
    /// Report the active task's result.
    ReportTask(TaskOutcome),
    /// Abort and return to the start screen.
    Restart,
    /// Switch language; reloads task content, keeps the game state.
    SwitchLanguage(Language),
}

/// What an accepted action did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    Rolled(u8),
    Reported(TaskOutcome),
}

/// A recorded action with the turn it happened on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player whose turn it was.
    pub player: PlayerColor,

    /// The action taken.
    pub kind: ActionKind,

    /// Turn number when the action was taken.
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerColor, kind: ActionKind, turn: u32) -> Self {
        Self { player, kind, turn }
    }
}
