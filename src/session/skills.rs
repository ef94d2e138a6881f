//! Player skills: reshuffle, reveal, undo, force-clear.
//!
//! Skills mutate the session in place, like clicks. The engine does not
//! meter skill usage; hosts decide how many charges each skill gets and
//! simply stop calling a method once it is spent.

use rustc_hash::FxHashMap;

use crate::core::{SymbolId, TileId, TileStatus};

use super::session::{GameStatus, Session};

impl Session {
    /// Redistribute symbols among the remaining level-area tiles.
    ///
    /// Positions, levels, and the occlusion graph are untouched; only the
    /// symbol assignment changes, so the solvability invariant over the
    /// remaining tiles is preserved. Returns how many tiles were
    /// reassigned.
    pub fn reshuffle(&mut self) -> usize {
        if self.status != GameStatus::Playing {
            return 0;
        }
        let ids: Vec<TileId> = self
            .level_tiles
            .iter()
            .copied()
            .filter(|id| self.tiles[id.index()].status == TileStatus::Ready)
            .collect();
        let mut symbols: Vec<SymbolId> = ids
            .iter()
            .map(|id| self.tiles[id.index()].symbol)
            .collect();
        self.rng.shuffle(&mut symbols);
        for (id, symbol) in ids.iter().zip(symbols) {
            self.tiles[id.index()].symbol = symbol;
        }
        log::debug!("reshuffled {} level tiles", ids.len());
        ids.len()
    }

    /// Make every lane slot clickable, not just the head.
    ///
    /// The flag is sticky for the rest of the session. Returns false if
    /// the session is not playing.
    pub fn reveal(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        self.reveal = true;
        true
    }

    /// Take back the most recent undoable click.
    ///
    /// Only level-area clicks are undoable, and the stack is wiped by lane
    /// clicks and by clears, so undo never splits a completed match. The
    /// tile returns to the board with its occlusion edges restored. Undo
    /// works from `Failed` too: taking back the overflowing click resumes
    /// play.
    pub fn undo(&mut self) -> Option<TileId> {
        if self.status != GameStatus::Playing && self.status != GameStatus::Failed {
            return None;
        }
        let tile = self.undo_stack.pop()?;
        let symbol = self.tiles[tile.index()].symbol;
        let removed = self.holding.remove(symbol, tile);
        debug_assert!(removed, "undoable tile must still be held");

        self.tiles[tile.index()].status = TileStatus::Ready;
        let covers = self.tiles[tile.index()].covers.clone();
        for below in covers {
            let covered_by = &mut self.tiles[below.index()].covered_by;
            if !covered_by.contains(&tile) {
                covered_by.push(tile);
            }
        }

        if self.status == GameStatus::Failed {
            self.status = GameStatus::Playing;
        }
        Some(tile)
    }

    /// Clear a matchable group straight off the board.
    ///
    /// Scans level-area tiles in placement order and picks the first
    /// symbol whose on-board group reaches the match threshold, buried
    /// tiles included. The whole group is cleared, its occlusion edges
    /// detached in both directions. Returns the cleared tiles, empty when
    /// no group qualifies.
    pub fn force_clear(&mut self) -> Vec<TileId> {
        if self.status != GameStatus::Playing {
            return Vec::new();
        }

        let mut groups: FxHashMap<SymbolId, Vec<TileId>> = FxHashMap::default();
        let mut chosen: Option<SymbolId> = None;
        for &id in &self.level_tiles {
            let tile = &self.tiles[id.index()];
            if tile.status != TileStatus::Ready {
                continue;
            }
            let group = groups.entry(tile.symbol).or_default();
            group.push(id);
            if chosen.is_none() && group.len() >= self.config.match_threshold {
                chosen = Some(tile.symbol);
            }
        }
        let Some(symbol) = chosen else {
            return Vec::new();
        };
        let group = groups.remove(&symbol).unwrap_or_default();

        for &id in &group {
            let covers = std::mem::take(&mut self.tiles[id.index()].covers);
            for below in covers {
                self.tiles[below.index()].uncover(id);
            }
            let covered_by = std::mem::take(&mut self.tiles[id.index()].covered_by);
            for above in covered_by {
                self.tiles[above.index()].covers.retain(|&mut t| t != id);
            }
            self.tiles[id.index()].status = TileStatus::Cleared;
        }

        self.cleared += group.len();
        self.undo_stack.clear();
        if self.cleared >= self.total {
            self.status = GameStatus::Succeeded;
        }

        log::debug!("force-cleared {} tiles of {symbol}", group.len());
        group
    }
}
