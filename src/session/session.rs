//! Game session: the click state machine.
//!
//! A `Session` owns everything for one puzzle instance: the tile arena,
//! the occupancy grid, the lanes, the holding area, the undo stack, and
//! the RNG. Sessions are created fresh per game start and mutated only
//! through `click_tile` and the skill methods; restart means building a
//! new session.
//!
//! Every operation is synchronous and runs to completion. Misclicks
//! (buried tile, non-head lane slot, full holding area, already-handled
//! tile) are silent no-ops returning an unchanged-state delta - routine
//! user input, not errors.
//!
//! ```
//! use tilepile::core::{GameConfig, SymbolId};
//! use tilepile::session::{GameStatus, Session};
//!
//! let config = GameConfig::new(7, 3).with_levels(1, 3);
//! let palette = [SymbolId::new(0), SymbolId::new(1)];
//! let mut session = Session::start(config, &palette, 42).unwrap();
//!
//! assert_eq!(session.status(), GameStatus::Playing);
//!
//! // Click the first unburied level tile.
//! let free = session.level_tiles().find(|t| t.is_free()).unwrap().id;
//! let delta = session.click_tile(free, None);
//! assert!(delta.accepted);
//! ```

use serde::{Deserialize, Serialize};

use crate::board::{generate, BoardGrid};
use crate::core::{ConfigError, GameConfig, GameRng, GameRngState, SymbolId, Tile, TileId, TileStatus};

use super::holding::HoldingArea;
use super::lane::Lane;

/// Session lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Created but not yet populated.
    Ready,
    /// Accepting clicks and skills.
    Playing,
    /// Holding area overflowed. Terminal, except for undo.
    Failed,
    /// Every tile cleared. Terminal.
    Succeeded,
}

/// Addresses a tile inside a lane: `lane` indexes the lane, `slot` the
/// queue position (0 = head).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneCoord {
    pub lane: usize,
    pub slot: usize,
}

/// What a click changed.
///
/// A rejected click reports `accepted == false` and no tile changes; the
/// host can ignore it entirely.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickDelta {
    /// Whether the click was accepted.
    pub accepted: bool,

    /// The clicked tile, when accepted.
    pub tile: Option<TileId>,

    /// Level-area tiles that became clickable because this tile left the
    /// board.
    pub freed: Vec<TileId>,

    /// Tiles removed by an auto-clear triggered by this click.
    pub cleared: Vec<TileId>,

    /// Session status after the click.
    pub status: GameStatus,
}

impl ClickDelta {
    /// An unchanged-state delta for a rejected click.
    #[must_use]
    pub fn rejected(status: GameStatus) -> Self {
        Self {
            accepted: false,
            tile: None,
            freed: Vec::new(),
            cleared: Vec::new(),
            status,
        }
    }

    /// Did this click complete a match?
    #[must_use]
    pub fn is_clear(&self) -> bool {
        !self.cleared.is_empty()
    }
}

/// One running puzzle instance.
#[derive(Debug)]
pub struct Session {
    pub(crate) config: GameConfig,
    /// Tile arena; `TileId` indexes directly into it.
    pub(crate) tiles: Vec<Tile>,
    pub(crate) grid: BoardGrid,
    pub(crate) level_tiles: Vec<TileId>,
    pub(crate) lanes: Vec<Lane>,
    pub(crate) holding: HoldingArea,
    /// Reversible level-area clicks, most recent last.
    pub(crate) undo_stack: Vec<TileId>,
    pub(crate) total: usize,
    pub(crate) cleared: usize,
    pub(crate) status: GameStatus,
    pub(crate) reveal: bool,
    pub(crate) rng: GameRng,
}

impl Session {
    /// Generate a board and start playing.
    ///
    /// Fails fast on a config that cannot produce a playable board; the
    /// host must not proceed to render in that case.
    pub fn start(config: GameConfig, palette: &[SymbolId], seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, palette, GameRng::new(seed))
    }

    /// Like `start`, but with an injected RNG (deterministic hosts,
    /// mid-game reconstruction).
    pub fn with_rng(
        config: GameConfig,
        palette: &[SymbolId],
        mut rng: GameRng,
    ) -> Result<Self, ConfigError> {
        let layout = generate(&config, palette, &mut rng)?;
        Ok(Self {
            holding: HoldingArea::new(config.slot_capacity),
            tiles: layout.tiles,
            grid: layout.grid,
            level_tiles: layout.level_tiles,
            lanes: layout.lane_tiles.into_iter().map(Lane::new).collect(),
            total: layout.total,
            cleared: 0,
            status: GameStatus::Playing,
            reveal: false,
            undo_stack: Vec::new(),
            config,
            rng,
        })
    }

    /// Handle a click on a tile.
    ///
    /// Pass `lane` when the tile sits in a lane; level-area clicks pass
    /// `None`. Rejected clicks (wrong state, buried tile, full holding
    /// area, non-head lane slot without reveal) return an unchanged-state
    /// delta.
    pub fn click_tile(&mut self, tile: TileId, lane: Option<LaneCoord>) -> ClickDelta {
        if self.status != GameStatus::Playing || self.holding.is_full() {
            return ClickDelta::rejected(self.status);
        }
        let Some(clicked) = self.tiles.get(tile.index()) else {
            return ClickDelta::rejected(self.status);
        };
        if clicked.status != TileStatus::Ready {
            return ClickDelta::rejected(self.status);
        }

        match lane {
            Some(coord) => {
                let Some(queue) = self.lanes.get(coord.lane) else {
                    return ClickDelta::rejected(self.status);
                };
                if queue.get(coord.slot) != Some(tile) {
                    return ClickDelta::rejected(self.status);
                }
                if coord.slot != 0 && !self.reveal {
                    return ClickDelta::rejected(self.status);
                }
            }
            None => {
                // Lane tiles are never placed, so level 0 marks them; they
                // must come in through their lane coordinate.
                if clicked.level == 0 || !clicked.covered_by.is_empty() {
                    return ClickDelta::rejected(self.status);
                }
            }
        }

        let symbol = clicked.symbol;
        self.tiles[tile.index()].status = TileStatus::Held;

        let mut freed = Vec::new();
        match lane {
            Some(coord) => {
                self.lanes[coord.lane].take(coord.slot);
                // Lane draws are not reversible.
                self.undo_stack.clear();
            }
            None => {
                self.undo_stack.push(tile);
                let covers = self.tiles[tile.index()].covers.clone();
                for below in covers {
                    if self.tiles[below.index()].uncover(tile) {
                        freed.push(below);
                    }
                }
            }
        }

        self.holding.insert(symbol, tile);
        let mut cleared = Vec::new();
        if let Some(matched) = self.holding.take_match(symbol, self.config.match_threshold) {
            for &id in &matched {
                self.tiles[id.index()].status = TileStatus::Cleared;
            }
            self.cleared += matched.len();
            // A completed match is final.
            self.undo_stack.clear();
            cleared = matched;
        }

        // The clear above ran first, so a final match that empties the
        // holding area never counts as an overflow.
        if self.holding.is_full() {
            self.status = GameStatus::Failed;
        } else if self.cleared >= self.total {
            self.status = GameStatus::Succeeded;
        }

        ClickDelta {
            accepted: true,
            tile: Some(tile),
            freed,
            cleared,
            status: self.status,
        }
    }

    // === Read-only queries ===

    /// Current session status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Tiles cleared so far.
    #[must_use]
    pub fn cleared_count(&self) -> usize {
        self.cleared
    }

    /// Total tiles this session started with.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.total
    }

    /// Is the reveal skill active?
    #[must_use]
    pub fn reveal_active(&self) -> bool {
        self.reveal
    }

    /// Look up a tile by id.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// Level-area tiles in placement order, all lifecycle states included.
    ///
    /// Clickability is `Tile::is_free`.
    pub fn level_tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.level_tiles.iter().map(|id| &self.tiles[id.index()])
    }

    /// The lane queues.
    #[must_use]
    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    /// The origin-stack grid, for spatial queries by the host.
    #[must_use]
    pub fn grid(&self) -> &BoardGrid {
        &self.grid
    }

    /// Fixed-width holding display: grouped tiles padded with `None`.
    #[must_use]
    pub fn holding_display(&self) -> Vec<Option<TileId>> {
        self.holding.display()
    }

    /// Occupied holding slots.
    #[must_use]
    pub fn holding_occupied(&self) -> usize {
        self.holding.occupied()
    }

    /// How many clicks can currently be undone.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// The configuration this session was started with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// RNG state snapshot, for reconstructing the session.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
