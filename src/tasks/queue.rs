//! Round-robin task queue.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Task texts consumed round-robin: the front is taken and pushed to the
/// back, so contents repeat but never run out.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskQueue {
    items: Vector<String>,
}

impl TaskQueue {
    /// An empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// A queue in the given order.
    pub fn from_texts(texts: impl IntoIterator<Item = String>) -> Self {
        Self {
            items: texts.into_iter().collect(),
        }
    }

    /// A freshly shuffled queue.
    pub fn shuffled(texts: Vec<String>, rng: &mut GameRng) -> Self {
        let mut texts = texts;
        rng.shuffle(&mut texts);
        Self::from_texts(texts)
    }

    /// Take the front text and re-enqueue it at the back.
    pub fn rotate(&mut self) -> Option<String> {
        let front = self.items.pop_front()?;
        self.items.push_back(front.clone());
        Some(front)
    }

    /// The text the next `rotate` returns.
    #[must_use]
    pub fn peek(&self) -> Option<&String> {
        self.items.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.items.iter()
    }
}
