//! # tilepile
//!
//! A headless match-3 tile-pile puzzle engine ("sheep" style): stacked
//! tiles on a grid, lane queues on the side, a limited holding area, and
//! clear-on-three matching.
//!
//! ## Design Principles
//!
//! 1. **Headless**: No rendering, input handling, or timers. The engine
//!    exposes state and deltas; hosts (TUI, web, tests) draw and schedule.
//!
//! 2. **Deterministic**: All randomness flows through a seeded `GameRng`.
//!    The same config, palette, and seed always produce the same board and
//!    the same responses to the same clicks.
//!
//! 3. **Solvable By Construction**: Every symbol's tile count is a
//!    multiple of the match threshold, so a perfect player is never
//!    stranded with unmatched tiles.
//!
//! 4. **Configuration Over Convention**: Board shape, lanes, capacity,
//!    threshold, and difficulty all come from `GameConfig`; the symbol
//!    palette is host-defined and opaque to the engine.
//!
//! ## Modules
//!
//! - `core`: Tile and symbol IDs, configuration, RNG, errors
//! - `board`: Occupancy grid, occlusion wiring, board generation
//! - `session`: Lanes, holding area, the click state machine, skills
//!
//! ## Usage
//!
//! ```
//! use tilepile::core::{GameConfig, SymbolId};
//! use tilepile::session::{GameStatus, Session};
//!
//! let palette: Vec<SymbolId> = (0..6).map(SymbolId::new).collect();
//! let mut session = Session::start(GameConfig::easy(), &palette, 1234).unwrap();
//!
//! // Click every currently-free tile of one symbol.
//! let target = session.level_tiles().find(|t| t.is_free()).unwrap().symbol;
//! let free: Vec<_> = session
//!     .level_tiles()
//!     .filter(|t| t.is_free() && t.symbol == target)
//!     .map(|t| t.id)
//!     .collect();
//! for id in free {
//!     session.click_tile(id, None);
//! }
//!
//! assert_eq!(session.status(), GameStatus::Playing);
//! ```

pub mod board;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameRng, GameRngState, SymbolId, Tile, TileId, TileStatus,
};

pub use crate::board::{
    generate, placement_bounds, BoardGrid, BoardLayout, Bounds, BLOCK_UNIT, BOARD_UNIT, MAX_ORIGIN,
};

pub use crate::session::{ClickDelta, GameStatus, HoldingArea, Lane, LaneCoord, Session};
