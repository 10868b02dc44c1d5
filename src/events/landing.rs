//! Landing classification.

use serde::{Deserialize, Serialize};

use crate::board::{BoardPath, CellKind};

/// Board events that start a challenge task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskEvent {
    Star,
    Trap,
    Collision,
}

/// Result of classifying a dice-move landing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandingEvent {
    /// Landed on the opponent, away from start and end.
    Collision,
    /// Landed exactly on the end cell.
    Win,
    Star,
    Trap,
    /// Plain cell: the turn passes.
    Plain,
}

impl LandingEvent {
    /// The task this landing triggers, if any.
    #[must_use]
    pub fn task_event(self) -> Option<TaskEvent> {
        match self {
            LandingEvent::Collision => Some(TaskEvent::Collision),
            LandingEvent::Star => Some(TaskEvent::Star),
            LandingEvent::Trap => Some(TaskEvent::Trap),
            LandingEvent::Win | LandingEvent::Plain => None,
        }
    }
}

/// Classify a landing. First match wins: collision, win, star, trap, plain.
///
/// ```
/// use path_duel::board::{BoardPath, CellKind};
/// use path_duel::events::{classify_landing, LandingEvent};
///
/// let board = BoardPath::from_kinds(&[
///     CellKind::Start, CellKind::Star, CellKind::Path, CellKind::End,
/// ]).unwrap();
///
/// assert_eq!(classify_landing(&board, 1, 0), LandingEvent::Star);
/// // The opponent on the same star cell turns it into a collision.
/// assert_eq!(classify_landing(&board, 1, 1), LandingEvent::Collision);
/// assert_eq!(classify_landing(&board, 3, 3), LandingEvent::Win);
/// ```
#[must_use]
pub fn classify_landing(board: &BoardPath, landing: usize, opponent: usize) -> LandingEvent {
    let last = board.last_index();

    if landing == opponent && landing != 0 && landing != last {
        return LandingEvent::Collision;
    }
    if landing == last {
        return LandingEvent::Win;
    }
    match board.kind_at(landing) {
        CellKind::Star => LandingEvent::Star,
        CellKind::Trap => LandingEvent::Trap,
        CellKind::Start | CellKind::Path | CellKind::End => LandingEvent::Plain,
    }
}
