//! Effects: what a state transition asks the outside world to do.
//!
//! Transitions never touch timers, screens or text directly. They return an
//! `EffectBatch` next to the new state, and the session turns each effect
//! into a scheduled timer or an observable event.

mod effect;
mod message;

pub use effect::{Deferred, Effect, EffectBatch};
pub use message::{ArgValue, Message, MessageArg};
