//! Core engine types: tiles, symbols, configuration, errors, RNG.
//!
//! This module contains the fundamental building blocks that every other
//! part of the engine is written in terms of. Hosts configure the engine
//! via `GameConfig` rather than modifying the core.

pub mod config;
pub mod error;
pub mod rng;
pub mod tile;

pub use config::GameConfig;
pub use error::ConfigError;
pub use rng::{GameRng, GameRngState};
pub use tile::{SymbolId, Tile, TileId, TileStatus};
