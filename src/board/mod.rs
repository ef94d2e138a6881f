//! Board generation: occupancy grid, occlusion wiring, tile partitioning.

pub mod builder;
pub mod generator;
pub mod grid;

pub use builder::place_batch;
pub use generator::{generate, BoardLayout};
pub use grid::{placement_bounds, BoardGrid, Bounds, BLOCK_UNIT, BOARD_UNIT, MAX_ORIGIN};
