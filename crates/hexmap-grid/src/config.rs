//! Map configuration: shape plus layout, validated before building.
//!
//! [`MapConfig`] is the builder-input for a [`HexGrid`]. Shape parameters
//! follow the generators' total semantics (a negative radius is an empty
//! map, not an error); only the layout and the overall size are checked.

use crate::generate::{
    generate_hexagonal_map, generate_rectangle_map, hexagon_cell_count, rectangle_cell_count,
};
use crate::grid::HexGrid;
use hexmap_core::{ConfigError, HexLayout};

// ── MapShape ───────────────────────────────────────────────────────

/// Footprint of a generated map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapShape {
    /// All cells within `radius` steps of the origin.
    Hexagon {
        /// Ring count around the origin. Default: 5.
        radius: i32,
    },
    /// `height` offset rows of `width` cells each.
    Rectangle {
        /// Cells per row.
        width: i32,
        /// Number of rows.
        height: i32,
    },
}

impl MapShape {
    /// Number of cells this shape generates.
    pub fn cell_count(&self) -> u64 {
        match *self {
            Self::Hexagon { radius } => hexagon_cell_count(radius),
            Self::Rectangle { width, height } => rectangle_cell_count(width, height),
        }
    }

    /// Generate a grid of this shape with every cell passable.
    ///
    /// Does not check the cell count; use [`MapConfig::build`] for
    /// untrusted dimensions.
    pub fn generate(&self) -> HexGrid {
        let cells = match *self {
            Self::Hexagon { radius } => generate_hexagonal_map(radius),
            Self::Rectangle { width, height } => generate_rectangle_map(width, height),
        };
        HexGrid::from_cells(cells)
    }
}

impl Default for MapShape {
    fn default() -> Self {
        Self::Hexagon { radius: 5 }
    }
}

// ── MapConfig ──────────────────────────────────────────────────────

/// Everything needed to build a map and map clicks onto it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapConfig {
    /// Map footprint.
    pub shape: MapShape,
    /// World-space hex size.
    pub layout: HexLayout,
}

impl MapConfig {
    /// Config with the given shape and the default layout.
    pub fn with_shape(shape: MapShape) -> Self {
        Self {
            shape,
            layout: HexLayout::default(),
        }
    }

    /// Check structural invariants.
    ///
    /// The layout size is re-checked because `HexLayout` values can be
    /// copied out of any source; the cell count must fit in `u32`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        HexLayout::new(self.layout.size())?;
        let count = self.shape.cell_count();
        if count > u32::MAX as u64 {
            return Err(ConfigError::CellCountOverflow { value: count });
        }
        Ok(())
    }

    /// Validate, then generate the grid.
    pub fn build(&self) -> Result<HexGrid, ConfigError> {
        self.validate()?;
        Ok(self.shape.generate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_radius_five_size_thirty() {
        let config = MapConfig::default();
        assert_eq!(config.shape, MapShape::Hexagon { radius: 5 });
        assert_eq!(config.layout.size(), 30.0);
        assert_eq!(config.build().unwrap().len(), 91);
    }

    #[test]
    fn rectangle_builds_width_times_height() {
        let config = MapConfig::with_shape(MapShape::Rectangle {
            width: 7,
            height: 3,
        });
        assert_eq!(config.build().unwrap().len(), 21);
    }

    #[test]
    fn negative_radius_builds_empty_grid() {
        let config = MapConfig::with_shape(MapShape::Hexagon { radius: -4 });
        let grid = config.build().unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn oversized_map_rejected_before_allocation() {
        let config = MapConfig::with_shape(MapShape::Hexagon { radius: 1_000_000 });
        assert!(matches!(
            config.build(),
            Err(ConfigError::CellCountOverflow { .. })
        ));
        let config = MapConfig::with_shape(MapShape::Rectangle {
            width: i32::MAX,
            height: 4,
        });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CellCountOverflow { value }) if value == i32::MAX as u64 * 4
        ));
    }
}
