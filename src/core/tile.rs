//! Tile identity and lifecycle.
//!
//! Every tile on the board has a stable `TileId`. Tiles live in an arena
//! (`Vec<Tile>` indexed by id), and the occlusion relation is stored as id
//! lists on each tile rather than as direct references, so the mutual
//! covers/covered-by edges never form ownership cycles.
//!
//! ## Usage
//!
//! ```
//! use tilepile::core::{SymbolId, Tile, TileId, TileStatus};
//!
//! let tile = Tile::new(TileId(0), SymbolId::new(2));
//!
//! assert_eq!(tile.status, TileStatus::Ready);
//! assert!(tile.is_free()); // nothing stacked on top yet
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Unique identifier for a tile.
///
/// Ids are allocated densely by the board generator (`0..total`) and double
/// as indices into the session's tile arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the tile arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Symbol identifier. Hosts define what symbols exist.
///
/// The engine doesn't interpret symbols - they're opaque identifiers
/// compared for equality when matching. Hosts map them to emoji, images,
/// or strings however they like.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u16);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Tile lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileStatus {
    /// On the board (or in a lane), not yet picked up.
    Ready,
    /// Sitting in the holding area, waiting to complete a match.
    Held,
    /// Matched and removed from play.
    Cleared,
}

/// A single tile.
///
/// The footprint is a `BLOCK_UNIT x BLOCK_UNIT` square of grid cells with
/// its origin at `(x, y)`. `covers` lists the tiles this one pins down;
/// `covered_by` lists the tiles pinning this one. A level-area tile is
/// clickable iff it is `Ready` and `covered_by` is empty.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tile {
    /// Stable identifier, also the arena index.
    pub id: TileId,

    /// Footprint origin, grid units.
    pub x: u16,

    /// Footprint origin, grid units.
    pub y: u16,

    /// Stacking height, computed at placement. Higher = placed above.
    /// An unobstructed tile gets level 1; 0 means not yet placed.
    pub level: u16,

    /// Matching identity.
    pub symbol: SymbolId,

    /// Lifecycle state.
    pub status: TileStatus,

    /// Tiles below that this tile renders unclickable.
    /// SmallVec keeps the common few-neighbor case off the heap.
    pub covers: SmallVec<[TileId; 4]>,

    /// Tiles above that must go before this one becomes clickable.
    pub covered_by: SmallVec<[TileId; 4]>,
}

impl Tile {
    /// Create an unplaced tile with the given identity.
    #[must_use]
    pub fn new(id: TileId, symbol: SymbolId) -> Self {
        Self {
            id,
            x: 0,
            y: 0,
            level: 0,
            symbol,
            status: TileStatus::Ready,
            covers: SmallVec::new(),
            covered_by: SmallVec::new(),
        }
    }

    /// Is this tile on the board with nothing stacked on top?
    ///
    /// For level-area tiles this is exactly the clickability condition.
    /// Lane tiles use queue position instead and ignore this.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.status == TileStatus::Ready && self.covered_by.is_empty()
    }

    /// Drop `other` from this tile's `covered_by` list.
    ///
    /// Returns true if this tile is free afterwards.
    pub fn uncover(&mut self, other: TileId) -> bool {
        self.covered_by.retain(|&mut t| t != other);
        self.is_free()
    }
}
