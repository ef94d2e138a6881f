//! Game configuration.
//!
//! Hosts configure a session at startup by providing a `GameConfig` plus a
//! symbol palette. The config is plain structured data: the engine defines
//! no wire format, and hosts may serialize it however they wish (serde
//! derives are provided).
//!
//! Validation happens once, at `Session::start`. A config that cannot
//! produce a playable board fails fast with a `ConfigError`.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Complete puzzle configuration.
///
/// ## Example
///
/// ```
/// use tilepile::core::GameConfig;
///
/// let config = GameConfig::new(7, 3)
///     .with_levels(6, 10)
///     .with_lanes(vec![4, 4])
///     .with_bounds_shrink_step(1);
///
/// assert!(config.validate(10).is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Holding area capacity; filling every slot without a clear loses.
    pub slot_capacity: usize,

    /// How many identical tiles trigger a clear.
    pub match_threshold: usize,

    /// Approximate batch size per stacked level.
    pub tiles_per_level: usize,

    /// Number of stacked levels. The last level absorbs whatever rounding
    /// added, so the real count per level may differ.
    pub level_count: usize,

    /// One entry per lane; the value is that lane's queue length.
    pub lane_sizes: Vec<usize>,

    /// How far the spawn bounds shrink per completed level (rotating
    /// edges). Zero keeps every level full-board.
    pub bounds_shrink_step: u16,
}

impl GameConfig {
    /// Create a configuration with no levels or lanes yet.
    #[must_use]
    pub fn new(slot_capacity: usize, match_threshold: usize) -> Self {
        Self {
            slot_capacity,
            match_threshold,
            tiles_per_level: 0,
            level_count: 0,
            lane_sizes: Vec::new(),
            bounds_shrink_step: 0,
        }
    }

    /// Set the stacked-level layout.
    #[must_use]
    pub fn with_levels(mut self, level_count: usize, tiles_per_level: usize) -> Self {
        self.level_count = level_count;
        self.tiles_per_level = tiles_per_level;
        self
    }

    /// Set the lane layout.
    #[must_use]
    pub fn with_lanes(mut self, lane_sizes: Vec<usize>) -> Self {
        self.lane_sizes = lane_sizes;
        self
    }

    /// Set the per-level bounds shrink step.
    #[must_use]
    pub fn with_bounds_shrink_step(mut self, step: u16) -> Self {
        self.bounds_shrink_step = step;
        self
    }

    /// Total number of tiles queued across all lanes.
    #[must_use]
    pub fn lane_total(&self) -> usize {
        self.lane_sizes.iter().sum()
    }

    /// Check that this config can produce a playable board for a palette
    /// of `symbol_count` symbols.
    pub fn validate(&self, symbol_count: usize) -> Result<(), ConfigError> {
        if symbol_count == 0 {
            return Err(ConfigError::EmptyPalette);
        }
        if self.match_threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        if self.slot_capacity < self.match_threshold {
            return Err(ConfigError::CapacityBelowThreshold {
                capacity: self.slot_capacity,
                threshold: self.match_threshold,
            });
        }
        // Rounding up to the solvability unit can add tiles beyond the
        // configured batches, and only levels can absorb them.
        if self.level_count == 0 {
            return Err(ConfigError::NoLevels);
        }
        if self.level_count * self.tiles_per_level + self.lane_total() == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        Ok(())
    }

    // === Difficulty presets ===

    /// Easy: 6 levels of ~10 tiles, two lanes of 4.
    #[must_use]
    pub fn easy() -> Self {
        Self::new(7, 3)
            .with_levels(6, 10)
            .with_lanes(vec![4, 4])
            .with_bounds_shrink_step(1)
    }

    /// Medium: 7 levels of ~12 tiles, two lanes of 5.
    #[must_use]
    pub fn medium() -> Self {
        Self::new(7, 3)
            .with_levels(7, 12)
            .with_lanes(vec![5, 5])
            .with_bounds_shrink_step(1)
    }

    /// Hard: 8 levels of ~16 tiles, two lanes of 6.
    #[must_use]
    pub fn hard() -> Self {
        Self::new(7, 3)
            .with_levels(8, 16)
            .with_lanes(vec![6, 6])
            .with_bounds_shrink_step(1)
    }

    /// Hell: 10 levels of ~20 tiles, two lanes of 8, fast-shrinking bounds.
    #[must_use]
    pub fn hell() -> Self {
        Self::new(7, 3)
            .with_levels(10, 20)
            .with_lanes(vec![8, 8])
            .with_bounds_shrink_step(2)
    }
}
