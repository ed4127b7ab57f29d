//! The [`Cell`] value type.

use crate::coord::{AxialCoord, CoordKey};
use std::fmt;

/// One hexagonal tile: its coordinate plus an obstacle flag.
///
/// Cells are plain values. A grid never hands out references into its
/// index; changing the obstacle flag means building a new cell with
/// [`with_obstacle`](Self::with_obstacle) and swapping it in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    coord: AxialCoord,
    is_obstacle: bool,
}

impl Cell {
    /// A passable cell at `coord`.
    pub const fn new(coord: AxialCoord) -> Self {
        Self {
            coord,
            is_obstacle: false,
        }
    }

    /// An obstacle cell at `coord`.
    pub const fn obstacle(coord: AxialCoord) -> Self {
        Self {
            coord,
            is_obstacle: true,
        }
    }

    /// Axial coordinate (the cell's identity).
    pub const fn coord(&self) -> AxialCoord {
        self.coord
    }

    /// Index key of this cell.
    pub fn key(&self) -> CoordKey {
        self.coord.key()
    }

    /// Whether the cell blocks movement.
    pub const fn is_obstacle(&self) -> bool {
        self.is_obstacle
    }

    /// Copy of this cell with the obstacle flag set to `is_obstacle`.
    pub const fn with_obstacle(self, is_obstacle: bool) -> Self {
        Self {
            coord: self.coord,
            is_obstacle,
        }
    }

    /// Copy of this cell with the obstacle flag inverted.
    pub const fn toggled(self) -> Self {
        self.with_obstacle(!self.is_obstacle)
    }
}

impl From<AxialCoord> for Cell {
    fn from(coord: AxialCoord) -> Self {
        Self::new(coord)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.coord.q, self.coord.r)
    }
}
