//! Tile graph builder: random placement plus occlusion wiring.
//!
//! A batch of tiles (one stacked level) is placed tile by tile. Each tile
//! draws a uniform random origin inside the batch bounds, rejecting origins
//! already used *by this batch*, so no two tiles of one level fully
//! coincide. Tiles from different batches may coincide; that is how
//! cross-level stacking happens.
//!
//! Batch ordering is sequential: a tile placed later in the batch sees all
//! earlier batch members already on the grid, so same-batch tiles that
//! overlap do occlude each other.

use rustc_hash::FxHashSet;

use crate::core::{GameRng, Tile, TileId};

use super::grid::{BoardGrid, Bounds, BLOCK_UNIT, MAX_ORIGIN};

/// Place a batch of tiles inside `bounds`, wiring occlusion edges against
/// everything already on the grid.
///
/// Tiles are looked up by id in `tiles`; their position, level, and
/// `covers`/`covered_by` lists are filled in here.
pub fn place_batch(
    tiles: &mut [Tile],
    batch: &[TileId],
    grid: &mut BoardGrid,
    bounds: &Bounds,
    rng: &mut GameRng,
) {
    let mut taken: FxHashSet<(u16, u16)> = FxHashSet::default();

    for &id in batch {
        if taken.len() >= bounds.area() {
            // More tiles than distinct origins; reset the dedup set so
            // placement still terminates.
            log::warn!(
                "batch saturated its {}-origin bounds, allowing coincident origins",
                bounds.area()
            );
            taken.clear();
        }

        let (x, y) = loop {
            let x = rng.gen_origin(bounds.min_x, bounds.max_x);
            let y = rng.gen_origin(bounds.min_y, bounds.max_y);
            if taken.insert((x, y)) {
                break (x, y);
            }
        };

        tiles[id.index()].x = x;
        tiles[id.index()].y = y;
        wire_occlusion(tiles, id, grid);
        grid.occupy(id, x, y);
    }
}

/// Compute the new tile's stacking level and covers/covered-by edges.
///
/// Examines every origin cell within `BLOCK_UNIT - 1` of the tile's own
/// origin, which is exactly the set of origins whose footprints overlap
/// this one, and takes the topmost tile per non-empty cell. The tile
/// itself is registered on the grid only afterwards, so every stack top
/// found here is a genuine neighbor below it.
fn wire_occlusion(tiles: &mut [Tile], id: TileId, grid: &BoardGrid) {
    let x = tiles[id.index()].x;
    let y = tiles[id.index()].y;

    let min_x = x.saturating_sub(BLOCK_UNIT - 1);
    let min_y = y.saturating_sub(BLOCK_UNIT - 1);
    let max_x = (x + BLOCK_UNIT - 1).min(MAX_ORIGIN);
    let max_y = (y + BLOCK_UNIT - 1).min(MAX_ORIGIN);

    // A neighbor tops several cells at once; dedup before wiring edges.
    let mut neighbors: FxHashSet<TileId> = FxHashSet::default();
    for cy in min_y..=max_y {
        for cx in min_x..=max_x {
            if let Some(top) = grid.top_at(cx, cy) {
                neighbors.insert(top);
            }
        }
    }

    let mut max_level = 0;
    for &n in &neighbors {
        max_level = max_level.max(tiles[n.index()].level);
    }
    tiles[id.index()].level = max_level + 1;

    for &n in &neighbors {
        tiles[id.index()].covers.push(n);
        tiles[n.index()].covered_by.push(id);
    }
}
