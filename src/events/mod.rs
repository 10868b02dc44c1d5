//! Event resolver.
//!
//! Runs once per dice move, on the final landing cell only. Intermediate
//! cells passed during the walk never trigger anything, and task-outcome
//! relocations are not classified at all.

mod landing;

pub use landing::{classify_landing, LandingEvent, TaskEvent};
