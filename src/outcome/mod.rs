//! Outcome resolver: turns a reported task result into a reward, a penalty,
//! or a collision consequence.

mod resolver;

pub use resolver::{resolve_outcome, OutcomePlan};
