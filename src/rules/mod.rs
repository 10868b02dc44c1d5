//! Game rules: pure transitions over `GameState` and the turn manager.
//!
//! ## State machine
//!
//! ```text
//! start -> playing -> moving -> playing            (plain landing)
//!                           -> task -> moving? -> playing
//!                           -> win                (exact end landing)
//! any   -> start                                  (restart)
//! ```

pub mod engine;
pub mod turn;

pub use engine::{Rules, Transition};
pub use turn::TurnTracker;
