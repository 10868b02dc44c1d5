//! Game state aggregate.
//!
//! Everything the state machine reads or writes lives in one `GameState`:
//! phase, board, positions, turn, task queue, the active task and animation,
//! history, and the RNG. Transitions take `&GameState` and return a new one,
//! so `im` collections and an `Arc`'d board keep those clones cheap.

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::player::PlayerColor;
use super::rng::GameRng;
use crate::board::BoardPath;
use crate::content::{GameMode, Language};
use crate::movement::{AnimationJob, PositionStore};
use crate::rules::TurnTracker;
use crate::tasks::{CurrentTask, TaskQueue};

/// Top-level game phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// Mode selection, no game running.
    #[default]
    Start,
    /// Waiting for the current player to roll.
    Playing,
    /// A task waits for its result.
    Task,
    /// A piece is walking, or a deferred transition is pending.
    Moving,
    /// Game over until restart.
    Win,
}

/// Complete game state.
#[derive(Clone, Debug)]
pub struct GameState {
    pub phase: GamePhase,

    /// Current board, shared between state snapshots.
    pub board: Arc<BoardPath>,

    pub positions: PositionStore,

    pub turn: TurnTracker,

    pub tasks: TaskQueue,

    /// Present only while `phase == Task`.
    pub current_task: Option<CurrentTask>,

    /// The single active movement, if any.
    pub animation: Option<AnimationJob>,

    /// The die is spinning.
    pub rolling: bool,

    pub last_roll: Option<u8>,

    pub winner: Option<PlayerColor>,

    pub mode: Option<GameMode>,

    pub language: Language,

    /// Accepted rolls and task reports.
    pub history: Vector<ActionRecord>,

    /// Deterministic RNG.
    pub rng: GameRng,
}

impl GameState {
    /// A fresh state on the start screen.
    #[must_use]
    pub fn new(board: BoardPath, language: Language, rng: GameRng) -> Self {
        let positions = PositionStore::new(board.last_index());
        Self {
            phase: GamePhase::Start,
            board: Arc::new(board),
            positions,
            turn: TurnTracker::new(),
            tasks: TaskQueue::new(),
            current_task: None,
            animation: None,
            rolling: false,
            last_roll: None,
            winner: None,
            mode: None,
            language,
            history: Vector::new(),
            rng,
        }
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerColor {
        self.turn.current()
    }

    /// Cell of `player`.
    #[must_use]
    pub fn position(&self, player: PlayerColor) -> usize {
        self.positions.get(player)
    }

    /// Index of the end cell.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.board.last_index()
    }

    /// Whether a game has been started and not yet restarted.
    #[must_use]
    pub fn in_game(&self) -> bool {
        self.phase != GamePhase::Start
    }

    /// Whether a roll would be accepted now.
    #[must_use]
    pub fn can_roll(&self) -> bool {
        self.phase == GamePhase::Playing
            && !self.rolling
            && self.animation.is_none()
            && self.current_task.is_none()
    }

    /// Whether a task report would be accepted now.
    #[must_use]
    pub fn can_report(&self) -> bool {
        self.phase == GamePhase::Task && self.current_task.is_some() && self.animation.is_none()
    }

    /// Put a new board in place and move both pieces to its start.
    pub(crate) fn replace_board(&mut self, board: BoardPath) {
        self.positions = PositionStore::new(board.last_index());
        self.board = Arc::new(board);
    }

    pub(crate) fn record(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ActionKind;

    fn state() -> GameState {
        GameState::new(BoardPath::plain(10).unwrap(), Language::default(), GameRng::new(42))
    }

    #[test]
    fn test_new_state() {
        let state = state();

        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.current_player(), PlayerColor::Red);
        assert_eq!(state.position(PlayerColor::Red), 0);
        assert_eq!(state.position(PlayerColor::Blue), 0);
        assert_eq!(state.last_index(), 9);
        assert!(!state.in_game());
        assert!(!state.can_roll());
        assert!(!state.can_report());
    }

    #[test]
    fn test_roll_gating() {
        let mut state = state();
        state.phase = GamePhase::Playing;
        assert!(state.can_roll());

        state.rolling = true;
        assert!(!state.can_roll());
        state.rolling = false;

        state.phase = GamePhase::Moving;
        assert!(!state.can_roll());
    }

    #[test]
    fn test_replace_board_resets_positions() {
        let mut state = state();
        state.positions.set(PlayerColor::Red, 5);

        state.replace_board(BoardPath::plain(20).unwrap());
        assert_eq!(state.last_index(), 19);
        assert_eq!(state.position(PlayerColor::Red), 0);
    }

    #[test]
    fn test_clone_shares_board() {
        let mut state = state();
        state.record(ActionRecord::new(PlayerColor::Red, ActionKind::Rolled(3), 1));

        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.board, &cloned.board));
        assert_eq!(cloned.history.len(), 1);
    }
}
