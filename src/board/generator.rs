//! Board generator: partitions tiles into lanes and levels.
//!
//! The generator guarantees solvability by construction: the total tile
//! count is rounded up to a multiple of `match_threshold x |palette|`, and
//! symbols are dealt round-robin before being shuffled, so every symbol's
//! total occurrence count is itself a multiple of the match threshold.
//!
//! Generation is pure with respect to the session: it returns a fully wired
//! `BoardLayout` and never touches game status.

use crate::core::{ConfigError, GameConfig, GameRng, SymbolId, Tile, TileId};

use super::builder::place_batch;
use super::grid::{placement_bounds, BoardGrid};

/// A fully generated puzzle instance.
///
/// `tiles` is the arena: `tiles[id.index()]` is the tile with that id.
/// Lane tiles keep `level == 0`; only level-area tiles are placed on the
/// grid.
#[derive(Clone, Debug)]
pub struct BoardLayout {
    /// Tile arena, indexed by `TileId`.
    pub tiles: Vec<Tile>,

    /// Cell occupancy for the level area.
    pub grid: BoardGrid,

    /// Level-area tile ids, in placement order.
    pub level_tiles: Vec<TileId>,

    /// Per-lane queued tile ids, front first.
    pub lane_tiles: Vec<Vec<TileId>>,

    /// Total tile count after rounding up to the solvability unit.
    pub total: usize,
}

/// Generate a board for `config` over the given symbol palette.
///
/// Fails fast on an invalid config; otherwise every one of the `total`
/// tiles ends up in exactly one lane or level batch.
pub fn generate(
    config: &GameConfig,
    palette: &[SymbolId],
    rng: &mut GameRng,
) -> Result<BoardLayout, ConfigError> {
    config.validate(palette.len())?;

    // Round the minimum up to a multiple of the solvability unit.
    let block_unit = config.match_threshold * palette.len();
    let lane_total = config.lane_total();
    let minimum = config.level_count * config.tiles_per_level + lane_total;
    let total = if minimum % block_unit == 0 {
        minimum
    } else {
        (minimum / block_unit + 1) * block_unit
    };

    log::debug!(
        "generating board: {} tiles ({} lane, {} level) over {} symbols",
        total,
        lane_total,
        total - lane_total,
        palette.len()
    );

    // Deal symbols round-robin, then decorrelate position from symbol.
    let mut symbols: Vec<SymbolId> = (0..total).map(|i| palette[i % palette.len()]).collect();
    rng.shuffle(&mut symbols);

    let mut tiles: Vec<Tile> = symbols
        .into_iter()
        .enumerate()
        .map(|(i, symbol)| Tile::new(TileId(i as u32), symbol))
        .collect();

    // Slice the shuffled sequence: lanes first, then level batches.
    let mut cursor = 0usize;
    let take = |cursor: &mut usize, n: usize| -> Vec<TileId> {
        let ids = (*cursor..*cursor + n).map(|i| TileId(i as u32)).collect();
        *cursor += n;
        ids
    };

    let mut lane_tiles = Vec::with_capacity(config.lane_sizes.len());
    for &size in &config.lane_sizes {
        lane_tiles.push(take(&mut cursor, size));
    }

    let mut grid = BoardGrid::new();
    let mut level_tiles = Vec::with_capacity(total - lane_total);
    let mut rest = total - lane_total;
    for level_index in 0..config.level_count {
        if rest == 0 {
            break;
        }
        let batch_size = if level_index == config.level_count - 1 {
            rest // last batch absorbs the rounding remainder
        } else {
            config.tiles_per_level.min(rest)
        };
        let batch = take(&mut cursor, batch_size);
        rest -= batch_size;

        let bounds = placement_bounds(config.bounds_shrink_step, level_index);
        place_batch(&mut tiles, &batch, &mut grid, &bounds, rng);
        level_tiles.extend(batch);
    }

    debug_assert_eq!(cursor, total, "every tile must land in a lane or level");

    Ok(BoardLayout {
        tiles,
        grid,
        level_tiles,
        lane_tiles,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn palette(n: u16) -> Vec<SymbolId> {
        (0..n).map(SymbolId::new).collect()
    }

    #[test]
    fn test_total_rounds_up_to_unit() {
        // 1 level x 1 tile + lane of 3 = 4, unit = 3 * 1 => total 6.
        let config = GameConfig::new(7, 3).with_levels(1, 1).with_lanes(vec![3]);
        let mut rng = GameRng::new(42);

        let layout = generate(&config, &palette(1), &mut rng).unwrap();

        assert_eq!(layout.total, 6);
        assert_eq!(layout.lane_tiles.len(), 1);
        assert_eq!(layout.lane_tiles[0].len(), 3);
        // The single level absorbs the rounding remainder.
        assert_eq!(layout.level_tiles.len(), 3);
    }

    #[test]
    fn test_exact_multiple_is_kept() {
        // 2 levels x 3 + lane of 3 = 9 = 3 * 3 symbols... unit = 3 * 1 = 3.
        let config = GameConfig::new(7, 3).with_levels(2, 3).with_lanes(vec![3]);
        let mut rng = GameRng::new(42);

        let layout = generate(&config, &palette(1), &mut rng).unwrap();

        assert_eq!(layout.total, 9);
    }

    #[test]
    fn test_solvability_invariant() {
        let config = GameConfig::hard();
        let symbols = palette(10);
        let mut rng = GameRng::new(42);

        let layout = generate(&config, &symbols, &mut rng).unwrap();

        assert_eq!(layout.total % (config.match_threshold * symbols.len()), 0);

        let mut counts: FxHashMap<SymbolId, usize> = FxHashMap::default();
        for tile in &layout.tiles {
            *counts.entry(tile.symbol).or_default() += 1;
        }
        for (&symbol, &count) in &counts {
            assert_eq!(
                count % config.match_threshold,
                0,
                "{symbol} appears {count} times"
            );
        }
    }

    #[test]
    fn test_every_tile_assigned_once() {
        let config = GameConfig::medium();
        let mut rng = GameRng::new(7);

        let layout = generate(&config, &palette(8), &mut rng).unwrap();

        let mut seen = vec![false; layout.total];
        for lane in &layout.lane_tiles {
            for id in lane {
                assert!(!seen[id.index()]);
                seen[id.index()] = true;
            }
        }
        for id in &layout.level_tiles {
            assert!(!seen[id.index()]);
            seen[id.index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_lane_tiles_stay_off_grid() {
        let config = GameConfig::easy();
        let mut rng = GameRng::new(3);

        let layout = generate(&config, &palette(6), &mut rng).unwrap();

        for lane in &layout.lane_tiles {
            for id in lane {
                let tile = &layout.tiles[id.index()];
                assert_eq!(tile.level, 0);
                assert!(tile.covers.is_empty());
                assert!(tile.covered_by.is_empty());
            }
        }
        for id in &layout.level_tiles {
            assert!(layout.tiles[id.index()].level >= 1);
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let config = GameConfig::easy();
        let symbols = palette(6);

        let a = generate(&config, &symbols, &mut GameRng::new(99)).unwrap();
        let b = generate(&config, &symbols, &mut GameRng::new(99)).unwrap();

        for (ta, tb) in a.tiles.iter().zip(&b.tiles) {
            assert_eq!(ta.symbol, tb.symbol);
            assert_eq!((ta.x, ta.y, ta.level), (tb.x, tb.y, tb.level));
        }
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let mut rng = GameRng::new(0);
        let config = GameConfig::new(7, 3).with_levels(1, 1);
        let err = generate(&config, &[], &mut rng).unwrap_err();
        assert_eq!(err, ConfigError::EmptyPalette);
    }
}
