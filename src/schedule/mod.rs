//! Tick scheduler: animation steps and delayed transitions on one timeline.

mod scheduler;

pub use scheduler::{ScheduledJob, TickScheduler};
