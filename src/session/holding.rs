//! The slot holding area.
//!
//! Held tiles are grouped by symbol: groups keep the order they first
//! appeared in, and tiles within a group keep arrival order. The display
//! array flattens the groups and pads with `None` up to capacity, so the
//! host always renders a fixed-width row with matching tiles adjacent.

use serde::{Deserialize, Serialize};

use crate::core::{SymbolId, TileId};

/// Limited-capacity staging area for clicked tiles.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HoldingArea {
    capacity: usize,
    /// Symbol groups in first-appearance order; FIFO within a group.
    groups: Vec<(SymbolId, Vec<TileId>)>,
}

impl HoldingArea {
    /// Create an empty holding area with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            groups: Vec::new(),
        }
    }

    /// Slot capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.groups.iter().map(|(_, tiles)| tiles.len()).sum()
    }

    /// Is every slot taken?
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied() >= self.capacity
    }

    /// Add a tile to its symbol group, creating the group if new.
    pub fn insert(&mut self, symbol: SymbolId, tile: TileId) {
        if let Some((_, tiles)) = self.groups.iter_mut().find(|(s, _)| *s == symbol) {
            tiles.push(tile);
        } else {
            self.groups.push((symbol, vec![tile]));
        }
    }

    /// How many tiles of a symbol are currently held.
    #[must_use]
    pub fn group_len(&self, symbol: SymbolId) -> usize {
        self.groups
            .iter()
            .find(|(s, _)| *s == symbol)
            .map_or(0, |(_, tiles)| tiles.len())
    }

    /// If the symbol's group has reached `threshold`, remove exactly
    /// `threshold` tiles (oldest first) and return them.
    pub fn take_match(&mut self, symbol: SymbolId, threshold: usize) -> Option<Vec<TileId>> {
        let idx = self.groups.iter().position(|(s, _)| *s == symbol)?;
        if self.groups[idx].1.len() < threshold {
            return None;
        }
        let matched: Vec<TileId> = self.groups[idx].1.drain(..threshold).collect();
        if self.groups[idx].1.is_empty() {
            self.groups.remove(idx);
        }
        Some(matched)
    }

    /// Remove one specific tile (used by undo).
    ///
    /// Returns true if the tile was held.
    pub fn remove(&mut self, symbol: SymbolId, tile: TileId) -> bool {
        let Some(idx) = self.groups.iter().position(|(s, _)| *s == symbol) else {
            return false;
        };
        let tiles = &mut self.groups[idx].1;
        let Some(pos) = tiles.iter().position(|&t| t == tile) else {
            return false;
        };
        tiles.remove(pos);
        if tiles.is_empty() {
            self.groups.remove(idx);
        }
        true
    }

    /// Fixed-width display array: groups flattened in stable order, padded
    /// with `None` to capacity.
    #[must_use]
    pub fn display(&self) -> Vec<Option<TileId>> {
        let mut slots: Vec<Option<TileId>> = self
            .groups
            .iter()
            .flat_map(|(_, tiles)| tiles.iter().copied().map(Some))
            .collect();
        while slots.len() < self.capacity {
            slots.push(None);
        }
        slots
    }

    /// Iterate every held tile in display order.
    pub fn tiles(&self) -> impl Iterator<Item = TileId> + '_ {
        self.groups.iter().flat_map(|(_, tiles)| tiles.iter().copied())
    }
}
