//! Error types for map configuration.

use std::error::Error;
use std::fmt;

/// Errors detected while validating a layout or map configuration.
///
/// Everything the grid and pathfinder do at query time is total; the only
/// rejections happen when a configuration is built.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Hex size is NaN, infinite, zero, or negative.
    InvalidHexSize {
        /// The rejected size.
        value: f64,
    },
    /// The configured map would hold more than `u32::MAX` cells.
    CellCountOverflow {
        /// Predicted cell count.
        value: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHexSize { value } => {
                write!(f, "hex size must be finite and positive, got {value}")
            }
            Self::CellCountOverflow { value } => {
                write!(f, "cell count {value} exceeds u32::MAX")
            }
        }
    }
}

impl Error for ConfigError {}
