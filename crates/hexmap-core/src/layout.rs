//! [`HexLayout`]: the hex size a caller draws and clicks with.

use crate::coord::{AxialCoord, FractionalAxial, Point};
use crate::error::ConfigError;
use crate::transform;

/// World-space layout of a pointy-top hex grid.
///
/// Wraps the validated hex circumradius so the transforms in
/// [`transform`](crate::transform) can be called without re-checking it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexLayout {
    size: f64,
}

impl HexLayout {
    /// Circumradius used when none is configured.
    pub const DEFAULT_SIZE: f64 = 30.0;

    /// Create a layout with circumradius `size`.
    ///
    /// Returns `Err(ConfigError::InvalidHexSize)` unless `size` is finite
    /// and strictly positive.
    pub fn new(size: f64) -> Result<Self, ConfigError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(ConfigError::InvalidHexSize { value: size });
        }
        Ok(Self { size })
    }

    /// Hex circumradius in world units.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Fractional axial coordinate of a world point.
    pub fn to_axial(&self, point: Point) -> FractionalAxial {
        transform::world_to_axial(point, self.size)
    }

    /// World-space center of a cell.
    pub fn to_world(&self, coord: AxialCoord) -> Point {
        transform::axial_to_world(coord, self.size)
    }

    /// Coordinate of the cell containing a world point.
    pub fn resolve(&self, point: Point) -> AxialCoord {
        transform::world_to_cell(point, self.size)
    }

    /// Corner points of a cell, for drawing.
    pub fn corners(&self, coord: AxialCoord) -> [Point; 6] {
        transform::hex_corners(coord, self.size)
    }
}

impl Default for HexLayout {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
        }
    }
}
