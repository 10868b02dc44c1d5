//! Task outcome resolution.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameRng, PlayerColor, TaskOutcome};
use crate::effects::Message;
use crate::events::TaskEvent;
use crate::movement::{PositionStore, Trajectory};
use crate::tasks::CurrentTask;

/// What a reported task result does to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomePlan {
    /// Completed star/trap with a non-zero reward.
    Advance { player: PlayerColor, reward: u8, trajectory: Trajectory },
    /// Completed star/trap with a reward of 0.
    Stay { player: PlayerColor },
    /// Failed star/trap.
    Retreat { player: PlayerColor, penalty: u8, trajectory: Trajectory },
    /// Completed collision: nothing moves.
    Hold { player: PlayerColor },
    /// Failed collision: the executor goes back to the start cell.
    SendToStart { player: PlayerColor },
}

impl OutcomePlan {
    /// The player the plan acts on.
    #[must_use]
    pub fn player(&self) -> PlayerColor {
        match *self {
            OutcomePlan::Advance { player, .. }
            | OutcomePlan::Stay { player }
            | OutcomePlan::Retreat { player, .. }
            | OutcomePlan::Hold { player }
            | OutcomePlan::SendToStart { player } => player,
        }
    }

    /// Walk to animate, if the position changes through the movement engine.
    #[must_use]
    pub fn relocation(&self) -> Option<Trajectory> {
        match *self {
            OutcomePlan::Advance { trajectory, .. } | OutcomePlan::Retreat { trajectory, .. }
                if !trajectory.is_stationary() =>
            {
                Some(trajectory)
            }
            _ => None,
        }
    }

    /// Message announcing the result.
    #[must_use]
    pub fn message(&self) -> Message {
        match *self {
            OutcomePlan::Advance { player, reward, .. } => Message::MovedForward { player, steps: reward },
            OutcomePlan::Stay { player } => Message::StayedInPlace { player },
            OutcomePlan::Retreat { player, penalty, .. } => Message::MovedBack { player, steps: penalty },
            OutcomePlan::Hold { player } => Message::CollisionCleared { player },
            OutcomePlan::SendToStart { player } => Message::SentToStart { player },
        }
    }
}

/// Decide what `outcome` does for `task`.
///
/// Rewards and penalties apply to the task's executor. Rewards use the
/// same forward/bounce planner as dice moves; penalties walk back and stop
/// at the start cell.
pub fn resolve_outcome(
    task: &CurrentTask,
    outcome: TaskOutcome,
    positions: &PositionStore,
    config: &GameConfig,
    rng: &mut GameRng,
) -> OutcomePlan {
    let player = task.executor;
    let current = positions.get(player);

    match (task.event, outcome) {
        (TaskEvent::Star | TaskEvent::Trap, TaskOutcome::Completed) => {
            let reward = rng.gen_inclusive(config.reward_min, config.reward_max);
            if reward == 0 {
                OutcomePlan::Stay { player }
            } else {
                OutcomePlan::Advance {
                    player,
                    reward,
                    trajectory: Trajectory::advance(current, reward as usize, positions.last()),
                }
            }
        }
        (TaskEvent::Star | TaskEvent::Trap, TaskOutcome::Failed) => {
            let penalty = rng.gen_inclusive(config.penalty_min, config.penalty_max);
            OutcomePlan::Retreat {
                player,
                penalty,
                trajectory: Trajectory::retreat(current, penalty as usize),
            }
        }
        (TaskEvent::Collision, TaskOutcome::Completed) => OutcomePlan::Hold { player },
        (TaskEvent::Collision, TaskOutcome::Failed) => OutcomePlan::SendToStart { player },
    }
}
