//! Movement engine: positions, trajectory planning and animation jobs.
//!
//! ## Overshoot rule
//!
//! With `last` the end cell and `target = current + distance`:
//! - `target <= last`: walk forward to `target`.
//! - `target > last`: walk forward to `last`, then back to
//!   `max(0, last - (target - last))`.
//!
//! Task penalties walk backward only and stop at 0.
//!
//! Only one `AnimationJob` exists at a time; it lives in the game state and
//! is stepped by the tick scheduler.

mod animation;
mod positions;
mod trajectory;

pub use animation::{AnimationJob, Completion};
pub use positions::PositionStore;
pub use trajectory::{landing_cell, Trajectory};
