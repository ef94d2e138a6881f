//! Lane queues (the "random area").
//!
//! A lane is an ordered queue of face-up tiles drawn from the front. Only
//! the head is clickable in normal play; the reveal skill opens up every
//! slot.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::TileId;

/// A single lane queue, front first.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Lane {
    queue: VecDeque<TileId>,
}

impl Lane {
    /// Create a lane from front-first tile ids.
    #[must_use]
    pub fn new(ids: Vec<TileId>) -> Self {
        Self {
            queue: ids.into(),
        }
    }

    /// The tile at the front, if any.
    #[must_use]
    pub fn head(&self) -> Option<TileId> {
        self.queue.front().copied()
    }

    /// The tile at a given slot (0 = head).
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<TileId> {
        self.queue.get(slot).copied()
    }

    /// Remove and return the tile at a given slot.
    pub fn take(&mut self, slot: usize) -> Option<TileId> {
        self.queue.remove(slot)
    }

    /// Number of tiles still queued.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Is the lane drained?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Iterate the queue front to back.
    pub fn tiles(&self) -> impl Iterator<Item = TileId> + '_ {
        self.queue.iter().copied()
    }
}
