//! Side effects requested by state transitions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::message::Message;
use crate::content::Language;
use crate::core::PlayerColor;
use crate::movement::Trajectory;
use crate::tasks::CurrentTask;

/// A transition to run later, after the configured delay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deferred {
    /// The die stops spinning and the move begins.
    RevealRoll { player: PlayerColor, value: u8 },
    /// Present the assigned task.
    EnterTask(CurrentTask),
    /// Animate a task reward or penalty.
    BeginRelocation { player: PlayerColor, trajectory: Trajectory },
    /// End the game.
    DeclareWin(PlayerColor),
}

/// A single requested side effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Show a message.
    Announce(Message),
    /// Step the active animation after `delay_ms`.
    ScheduleTick { delay_ms: u64 },
    /// Run a deferred transition after `delay_ms`.
    Schedule { delay_ms: u64, deferred: Deferred },
    /// The die started spinning.
    RollStarted { player: PlayerColor },
    /// A piece begins walking.
    AnimationStarted { player: PlayerColor, from: usize, to: usize },
    /// A piece now shows on `position`.
    PositionChanged { player: PlayerColor, position: usize },
    /// A task is waiting for its result.
    TaskAssigned(CurrentTask),
    /// The active player changed.
    TurnChanged(PlayerColor),
    /// The game is over.
    GameWon(PlayerColor),
    /// All state went back to the start screen.
    GameReset,
    /// Messages and tasks now come from this language.
    LanguageChanged(Language),
}

/// Ordered list of effects from one transition.
///
/// Most transitions produce a handful of effects; SmallVec keeps them off
/// the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectBatch {
    effects: SmallVec<[Effect; 4]>,
}

impl EffectBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an effect.
    pub fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Append a message.
    pub fn announce(&mut self, message: Message) {
        self.effects.push(Effect::Announce(message));
    }

    /// Append all effects of another batch.
    pub fn extend(&mut self, other: EffectBatch) {
        self.effects.extend(other.effects);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }

    /// Messages in order.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.effects.iter().filter_map(|e| match e {
            Effect::Announce(m) => Some(m),
            _ => None,
        })
    }

    /// The deferred transition scheduled by this batch, if any.
    #[must_use]
    pub fn deferred(&self) -> Option<&Deferred> {
        self.effects.iter().find_map(|e| match e {
            Effect::Schedule { deferred, .. } => Some(deferred),
            _ => None,
        })
    }

    /// Whether an animation tick was scheduled.
    #[must_use]
    pub fn schedules_tick(&self) -> bool {
        self.effects.iter().any(|e| matches!(e, Effect::ScheduleTick { .. }))
    }
}

impl IntoIterator for EffectBatch {
    type Item = Effect;
    type IntoIter = smallvec::IntoIter<[Effect; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_basics() {
        let mut batch = EffectBatch::new();
        assert!(batch.is_empty());

        batch.announce(Message::TurnOf { player: PlayerColor::Blue });
        batch.push(Effect::ScheduleTick { delay_ms: 100 });
        batch.push(Effect::Schedule {
            delay_ms: 500,
            deferred: Deferred::DeclareWin(PlayerColor::Red),
        });

        assert_eq!(batch.len(), 3);
        assert_eq!(batch.messages().count(), 1);
        assert!(batch.schedules_tick());
        assert_eq!(batch.deferred(), Some(&Deferred::DeclareWin(PlayerColor::Red)));
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut first = EffectBatch::new();
        first.push(Effect::TurnChanged(PlayerColor::Blue));

        let mut second = EffectBatch::new();
        second.push(Effect::GameWon(PlayerColor::Red));
        second.push(Effect::GameReset);

        first.extend(second);
        let effects: Vec<_> = first.into_iter().collect();
        assert_eq!(effects, vec![
            Effect::TurnChanged(PlayerColor::Blue),
            Effect::GameWon(PlayerColor::Red),
            Effect::GameReset,
        ]);
    }

    #[test]
    fn test_effect_serialization() {
        let effect = Effect::AnimationStarted { player: PlayerColor::Red, from: 6, to: 7 };
        let json = serde_json::to_string(&effect).unwrap();
        let back: Effect = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, back);
    }
}
