//! Configuration errors.
//!
//! The engine has no I/O, so the only fallible operation is validating a
//! `GameConfig` against a symbol palette at session start. Everything that
//! can go wrong mid-game (misclicks, empty undo stack, no matchable group)
//! is a silent no-op, not an error.

use thiserror::Error;

/// A `GameConfig` that cannot produce a playable board.
///
/// Returned by `Session::start` before any tiles are generated; the host
/// must not proceed to render.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("symbol palette is empty")]
    EmptyPalette,

    #[error("match threshold must be at least 1")]
    ZeroThreshold,

    #[error("slot capacity {capacity} cannot hold a match of {threshold}")]
    CapacityBelowThreshold { capacity: usize, threshold: usize },

    #[error("at least one level is required to place stacked tiles")]
    NoLevels,

    #[error("board would contain no tiles")]
    EmptyBoard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ConfigError::CapacityBelowThreshold {
            capacity: 2,
            threshold: 3,
        };
        assert_eq!(
            err.to_string(),
            "slot capacity 2 cannot hold a match of 3"
        );
        assert_eq!(ConfigError::EmptyPalette.to_string(), "symbol palette is empty");
    }
}
