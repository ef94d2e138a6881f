//! Property-based tests over random seeds and configurations.

use proptest::prelude::*;

use tilepile::board::generate;
use tilepile::core::{GameConfig, GameRng, SymbolId, TileStatus};
use tilepile::session::{GameStatus, LaneCoord, Session};

fn palette(n: u16) -> Vec<SymbolId> {
    (0..n).map(SymbolId::new).collect()
}

fn arb_config() -> impl Strategy<Value = GameConfig> {
    (
        3usize..=9,        // slot capacity
        1usize..=4,        // levels
        1usize..=16,       // tiles per level
        0usize..=6,        // lane size (two lanes when nonzero)
        0u16..=2,          // bounds shrink step
    )
        .prop_map(|(capacity, levels, per_level, lane, step)| {
            let lanes = if lane == 0 { vec![] } else { vec![lane, lane] };
            GameConfig::new(capacity, 3)
                .with_levels(levels, per_level)
                .with_lanes(lanes)
                .with_bounds_shrink_step(step)
        })
}

proptest! {
    /// Every symbol's tile count is a multiple of the match threshold.
    #[test]
    fn prop_generation_is_solvable(
        config in arb_config(),
        symbols in 1u16..=10,
        seed in any::<u64>(),
    ) {
        let palette = palette(symbols);
        let mut rng = GameRng::new(seed);
        let layout = generate(&config, &palette, &mut rng).unwrap();

        prop_assert_eq!(layout.total % (config.match_threshold * palette.len()), 0);

        let mut counts = vec![0usize; palette.len()];
        for tile in &layout.tiles {
            counts[tile.symbol.raw() as usize] += 1;
        }
        for count in counts {
            prop_assert_eq!(count % config.match_threshold, 0);
        }
    }

    /// Occlusion edges are symmetric and strictly ordered by level.
    #[test]
    fn prop_occlusion_graph_is_consistent(
        config in arb_config(),
        seed in any::<u64>(),
    ) {
        let palette = palette(6);
        let mut rng = GameRng::new(seed);
        let layout = generate(&config, &palette, &mut rng).unwrap();

        for tile in &layout.tiles {
            for &above in &tile.covered_by {
                let above_tile = &layout.tiles[above.index()];
                prop_assert!(above_tile.covers.contains(&tile.id));
                prop_assert!(above_tile.level > tile.level);
            }
            for &below in &tile.covers {
                let below_tile = &layout.tiles[below.index()];
                prop_assert!(below_tile.covered_by.contains(&tile.id));
                prop_assert!(below_tile.level < tile.level);
            }
        }
    }

    /// Stacked tiles overlap; the cover relation implies footprint overlap.
    #[test]
    fn prop_covers_implies_overlap(
        config in arb_config(),
        seed in any::<u64>(),
    ) {
        let palette = palette(6);
        let mut rng = GameRng::new(seed);
        let layout = generate(&config, &palette, &mut rng).unwrap();

        let unit = tilepile::BLOCK_UNIT as i32;
        for tile in &layout.tiles {
            for &above in &tile.covered_by {
                let a = &layout.tiles[above.index()];
                prop_assert!((i32::from(a.x) - i32::from(tile.x)).abs() < unit);
                prop_assert!((i32::from(a.y) - i32::from(tile.y)).abs() < unit);
            }
        }
    }

    /// However the player clicks, the holding area never exceeds capacity
    /// and the status transitions stay coherent.
    #[test]
    fn prop_random_play_respects_invariants(
        seed in any::<u64>(),
        choices in proptest::collection::vec(any::<usize>(), 1..120),
    ) {
        let config = GameConfig::new(5, 3)
            .with_levels(2, 9)
            .with_lanes(vec![3]);
        let mut session = Session::start(config, &palette(4), seed).unwrap();

        for &choice in &choices {
            if session.status() != GameStatus::Playing {
                break;
            }
            // Alternate between free level tiles and lane heads.
            let free: Vec<_> = session
                .level_tiles()
                .filter(|t| t.is_free())
                .map(|t| t.id)
                .collect();
            let lane_head = session.lanes().first().and_then(|l| l.head());
            let delta = if !free.is_empty() && (choice % 3 != 0 || lane_head.is_none()) {
                session.click_tile(free[choice % free.len()], None)
            } else if let Some(head) = lane_head {
                session.click_tile(head, Some(LaneCoord { lane: 0, slot: 0 }))
            } else {
                break;
            };
            prop_assert!(delta.accepted);

            prop_assert!(session.holding_occupied() <= 5);
            prop_assert!(session.cleared_count() <= session.total_count());
            match session.status() {
                GameStatus::Failed => prop_assert_eq!(session.holding_occupied(), 5),
                GameStatus::Succeeded => {
                    prop_assert_eq!(session.cleared_count(), session.total_count());
                    prop_assert_eq!(session.holding_occupied(), 0);
                }
                _ => {}
            }
        }
    }

    /// Clicked tiles always leave the Ready state exactly once.
    #[test]
    fn prop_click_moves_tile_out_of_ready(
        seed in any::<u64>(),
        picks in proptest::collection::vec(any::<usize>(), 1..40),
    ) {
        let config = GameConfig::new(7, 3).with_levels(2, 8);
        let mut session = Session::start(config, &palette(3), seed).unwrap();

        for &pick in &picks {
            if session.status() != GameStatus::Playing {
                break;
            }
            let free: Vec<_> = session
                .level_tiles()
                .filter(|t| t.is_free())
                .map(|t| t.id)
                .collect();
            if free.is_empty() {
                break;
            }
            let id = free[pick % free.len()];
            prop_assert!(session.click_tile(id, None).accepted);
            let status = session.tile(id).unwrap().status;
            prop_assert!(status == TileStatus::Held || status == TileStatus::Cleared);
            prop_assert!(!session.click_tile(id, None).accepted);
        }
    }
}
