//! Task assignment.

use serde::{Deserialize, Serialize};

use super::queue::TaskQueue;
use crate::core::PlayerColor;
use crate::events::TaskEvent;

/// Description handed out when the queue has nothing to offer.
pub const EMPTY_QUEUE_TASK: &str = "No challenges available. Free pass!";

/// The challenge waiting for a result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentTask {
    pub description: String,
    /// Who performs the task.
    pub executor: PlayerColor,
    /// Whose move triggered it.
    pub target: PlayerColor,
    pub event: TaskEvent,
}

/// Who performs the task for `event` triggered by `player_on_cell`.
///
/// Stars and collisions go to the other player; traps to the lander.
#[must_use]
pub fn executor_for(event: TaskEvent, player_on_cell: PlayerColor) -> PlayerColor {
    match event {
        TaskEvent::Star | TaskEvent::Collision => player_on_cell.opponent(),
        TaskEvent::Trap => player_on_cell,
    }
}

/// Take the next task from the queue and address it.
///
/// An empty queue yields the fixed placeholder, addressed to
/// `player_on_cell` as both executor and target.
pub fn assign(queue: &mut TaskQueue, event: TaskEvent, player_on_cell: PlayerColor) -> CurrentTask {
    match queue.rotate() {
        Some(description) => CurrentTask {
            description,
            executor: executor_for(event, player_on_cell),
            target: player_on_cell,
            event,
        },
        None => CurrentTask {
            description: EMPTY_QUEUE_TASK.to_string(),
            executor: player_on_cell,
            target: player_on_cell,
            event,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue() -> TaskQueue {
        TaskQueue::from_texts(vec!["sing".to_string(), "dance".to_string()])
    }

    #[test]
    fn test_executor_rules() {
        for player in PlayerColor::ALL {
            assert_eq!(executor_for(TaskEvent::Star, player), player.opponent());
            assert_eq!(executor_for(TaskEvent::Trap, player), player);
            assert_eq!(executor_for(TaskEvent::Collision, player), player.opponent());
        }
    }

    #[test]
    fn test_assign_star() {
        let mut queue = queue();
        let task = assign(&mut queue, TaskEvent::Star, PlayerColor::Red);

        assert_eq!(task.description, "sing");
        assert_eq!(task.executor, PlayerColor::Blue);
        assert_eq!(task.target, PlayerColor::Red);
        assert_eq!(task.event, TaskEvent::Star);
        assert_eq!(queue.peek().map(String::as_str), Some("dance"));
    }

    #[test]
    fn test_assign_trap() {
        let mut queue = queue();
        let task = assign(&mut queue, TaskEvent::Trap, PlayerColor::Blue);

        assert_eq!(task.executor, PlayerColor::Blue);
        assert_eq!(task.target, PlayerColor::Blue);
    }

    #[test]
    fn test_assign_rotates() {
        let mut queue = queue();
        let seq: Vec<_> = (0..4)
            .map(|_| assign(&mut queue, TaskEvent::Trap, PlayerColor::Red).description)
            .collect();
        assert_eq!(seq, vec!["sing", "dance", "sing", "dance"]);
    }

    #[test]
    fn test_empty_queue_placeholder() {
        let mut queue = TaskQueue::new();
        let task = assign(&mut queue, TaskEvent::Collision, PlayerColor::Blue);

        assert_eq!(task.description, EMPTY_QUEUE_TASK);
        assert_eq!(task.executor, PlayerColor::Blue);
        assert_eq!(task.target, PlayerColor::Blue);
        assert_eq!(task.event, TaskEvent::Collision);
    }
}
