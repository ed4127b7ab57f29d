//! hexmap: a hexagonal map index with A* pathfinding.
//!
//! This is the facade crate that re-exports the public API of the hexmap
//! sub-crates and adds [`RoutePlanner`], a small stateful helper for
//! interactive use (pick a start, pick a goal, toggle obstacles, read the
//! route).
//!
//! # Quick start
//!
//! ```rust
//! use hexmap::prelude::*;
//!
//! // Radius-1 map: the origin and its six neighbours.
//! let grid = HexGrid::hexagon(1).with_obstacle_toggled(AxialCoord::new(1, 0));
//! assert_eq!(grid.len(), 7);
//!
//! // Clicks arrive in world space; resolve them to cells.
//! let layout = HexLayout::default();
//! let click = Point::new(0.0, 0.0);
//! let origin = grid.resolve_point(click, &layout).unwrap();
//! assert_eq!(origin.coord(), AxialCoord::ORIGIN);
//!
//! let path = find_path(&grid, AxialCoord::new(0, -1), AxialCoord::new(0, 1)).unwrap();
//! assert_eq!(path.steps(), 2);
//! assert!(!path.contains(AxialCoord::new(1, 0)));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `hexmap-core` | Coordinates, cells, transforms, layout |
//! | [`grid`] | `hexmap-grid` | Grid snapshots, generators, map config |
//! | [`search`] | `hexmap-search` | A* and the `Path` result |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod planner;

/// Coordinates, cells, and world-space transforms (`hexmap-core`).
pub use hexmap_core as types;

/// Grid snapshots, map generators, and configuration (`hexmap-grid`).
pub use hexmap_grid as grid;

/// A* search and the [`search::Path`] result (`hexmap-search`).
pub use hexmap_search as search;

pub use planner::RoutePlanner;

/// Common imports for typical hexmap usage.
///
/// ```rust
/// use hexmap::prelude::*;
/// ```
pub mod prelude {
    // Core values
    pub use hexmap_core::{AxialCoord, Cell, HexDirection, HexLayout, Point};

    // Errors
    pub use hexmap_core::ConfigError;

    // Grid
    pub use hexmap_grid::{HexGraph, HexGrid, MapConfig, MapShape};

    // Search
    pub use hexmap_search::{find_path, Path};

    // Planner
    pub use crate::planner::RoutePlanner;
}
