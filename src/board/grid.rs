//! Board occupancy grid and placement bounds.
//!
//! The board is a fixed `BOARD_UNIT x BOARD_UNIT` cell space. Each tile
//! occupies a `BLOCK_UNIT x BLOCK_UNIT` footprint, so valid footprint
//! origins range over `0..=MAX_ORIGIN` on both axes. Each cell tracks the
//! ordered stack of tiles whose *origin* is that cell, in placement order;
//! because a tile's level is always strictly above everything it lands on,
//! the last entry of a stack is also the topmost tile there. Two tiles
//! overlap iff their origins are within `BLOCK_UNIT - 1` of each other on
//! both axes, so origin stacks are all the occlusion scan needs.

use serde::{Deserialize, Serialize};

use crate::core::TileId;

/// Total grid span, in cells.
pub const BOARD_UNIT: u16 = 24;

/// Tile footprint side length, in cells.
pub const BLOCK_UNIT: u16 = 3;

/// Largest valid footprint origin on either axis.
pub const MAX_ORIGIN: u16 = BOARD_UNIT - BLOCK_UNIT;

/// Inclusive origin bounds for placing a batch of tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: u16,
    pub min_y: u16,
    pub max_x: u16,
    pub max_y: u16,
}

impl Bounds {
    /// The full valid origin range.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            min_x: 0,
            min_y: 0,
            max_x: MAX_ORIGIN,
            max_y: MAX_ORIGIN,
        }
    }

    /// Number of distinct origins inside these bounds.
    #[must_use]
    pub fn area(&self) -> usize {
        let w = (self.max_x - self.min_x + 1) as usize;
        let h = (self.max_y - self.min_y + 1) as usize;
        w * h
    }

    /// Does `(x, y)` fall inside these bounds?
    #[must_use]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }
}

/// Spawn bounds for a given level.
///
/// Later levels shrink by `shrink_step` per completed level, rotating the
/// shrunk edge through left, top, right, bottom, so each level nests
/// visually inside the previous ones. Shrinking clamps so the bounds never
/// invert; a saturated axis simply stops shrinking.
#[must_use]
pub fn placement_bounds(shrink_step: u16, level_index: usize) -> Bounds {
    let mut bounds = Bounds::full();
    if shrink_step == 0 {
        return bounds;
    }

    for edge in 0..level_index {
        match edge % 4 {
            0 => bounds.min_x = bounds.min_x.saturating_add(shrink_step).min(bounds.max_x),
            1 => bounds.min_y = bounds.min_y.saturating_add(shrink_step).min(bounds.max_y),
            2 => bounds.max_x = bounds.max_x.saturating_sub(shrink_step).max(bounds.min_x),
            _ => bounds.max_y = bounds.max_y.saturating_sub(shrink_step).max(bounds.min_y),
        }
    }

    bounds
}

/// Per-cell tile stacks over the whole board.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BoardGrid {
    /// Row-major `BOARD_UNIT x BOARD_UNIT` cells; each holds the ids of
    /// tiles whose footprint origin is that cell, in placement order.
    cells: Vec<Vec<TileId>>,
}

impl BoardGrid {
    /// Create an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: vec![Vec::new(); (BOARD_UNIT as usize) * (BOARD_UNIT as usize)],
        }
    }

    fn cell_index(x: u16, y: u16) -> usize {
        (y as usize) * (BOARD_UNIT as usize) + (x as usize)
    }

    /// Register a tile at its footprint origin cell.
    pub fn occupy(&mut self, tile: TileId, x: u16, y: u16) {
        self.cells[Self::cell_index(x, y)].push(tile);
    }

    /// The topmost tile whose origin is this cell, if any.
    #[must_use]
    pub fn top_at(&self, x: u16, y: u16) -> Option<TileId> {
        self.cells[Self::cell_index(x, y)].last().copied()
    }

    /// The full origin stack at a cell, bottom to top.
    #[must_use]
    pub fn stack_at(&self, x: u16, y: u16) -> &[TileId] {
        &self.cells[Self::cell_index(x, y)]
    }
}
