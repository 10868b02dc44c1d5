//! Language-agnostic player-facing messages.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::content::GameMode;
use crate::core::PlayerColor;

/// Value interpolated into a message template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgValue {
    /// Rendered through the bundle's `player.<color>` entry.
    Player(PlayerColor),
    Count(u64),
    Text(String),
}

/// A named template argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageArg {
    pub name: &'static str,
    pub value: ArgValue,
}

impl MessageArg {
    fn player(name: &'static str, player: PlayerColor) -> Self {
        Self { name, value: ArgValue::Player(player) }
    }

    fn count(name: &'static str, count: impl Into<u64>) -> Self {
        Self { name, value: ArgValue::Count(count.into()) }
    }
}

/// Something to tell the players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    GameStarted { mode: GameMode },
    Rolled { player: PlayerColor, value: u8 },
    Bounced { player: PlayerColor, steps: usize },
    StarLanding { player: PlayerColor, executor: PlayerColor },
    TrapLanding { player: PlayerColor },
    Collision { player: PlayerColor, executor: PlayerColor },
    MovedForward { player: PlayerColor, steps: u8 },
    StayedInPlace { player: PlayerColor },
    MovedBack { player: PlayerColor, steps: u8 },
    SentToStart { player: PlayerColor },
    CollisionCleared { player: PlayerColor },
    TurnOf { player: PlayerColor },
    Winner { player: PlayerColor },
}

impl Message {
    /// Translation key.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Message::GameStarted { .. } => "message.game_started",
            Message::Rolled { .. } => "message.rolled",
            Message::Bounced { .. } => "message.bounced",
            Message::StarLanding { .. } => "message.star",
            Message::TrapLanding { .. } => "message.trap",
            Message::Collision { .. } => "message.collision",
            Message::MovedForward { .. } => "message.moved_forward",
            Message::StayedInPlace { .. } => "message.stayed",
            Message::MovedBack { .. } => "message.moved_back",
            Message::SentToStart { .. } => "message.sent_to_start",
            Message::CollisionCleared { .. } => "message.collision_cleared",
            Message::TurnOf { .. } => "message.turn",
            Message::Winner { .. } => "message.winner",
        }
    }

    /// Template arguments.
    #[must_use]
    pub fn args(&self) -> SmallVec<[MessageArg; 2]> {
        match *self {
            Message::GameStarted { ref mode } => smallvec![MessageArg {
                name: "mode",
                value: ArgValue::Text(mode.name().to_string()),
            }],
            Message::Rolled { player, value } => {
                smallvec![MessageArg::player("player", player), MessageArg::count("value", value)]
            }
            Message::Bounced { player, steps } => smallvec![
                MessageArg::player("player", player),
                MessageArg::count("steps", steps as u64),
            ],
            Message::StarLanding { player, executor } | Message::Collision { player, executor } => {
                smallvec![
                    MessageArg::player("player", player),
                    MessageArg::player("executor", executor),
                ]
            }
            Message::MovedForward { player, steps } | Message::MovedBack { player, steps } => {
                smallvec![MessageArg::player("player", player), MessageArg::count("steps", steps)]
            }
            Message::TrapLanding { player }
            | Message::StayedInPlace { player }
            | Message::SentToStart { player }
            | Message::CollisionCleared { player }
            | Message::TurnOf { player }
            | Message::Winner { player } => smallvec![MessageArg::player("player", player)],
        }
    }
}
