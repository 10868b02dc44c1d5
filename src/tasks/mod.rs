//! Task dispatcher: the rotating task queue, executor assignment and the
//! content providers that fill the queue.
//!
//! The queue is rebuilt, freshly shuffled, at every game start and on every
//! language change during a game. Lookups fall back from the requested
//! language to the default language to a built-in placeholder list, so a
//! started game always has tasks.

mod dispatcher;
mod provider;
mod queue;

pub use dispatcher::{assign, executor_for, CurrentTask, EMPTY_QUEUE_TASK};
pub use provider::{load_tasks, JsonTaskProvider, StaticTaskProvider, TaskProvider, PLACEHOLDER_TASKS};
pub use queue::TaskQueue;
