//! Hex grid storage for hexmap.
//!
//! This crate defines [`HexGrid`], an immutable coordinate-indexed set of
//! cells, along with the generators that produce initial maps and the
//! [`HexGraph`] trait through which searches read a cell set.
//!
//! # Snapshots
//!
//! Grids never change after construction. Toggling an obstacle returns a
//! new grid with a fresh [`GridId`]; toggling a coordinate outside the grid
//! returns an identical clone.
//!
//! # Generators
//!
//! - [`generate_hexagonal_map`]: hexagon of a given radius (`3n² + 3n + 1` cells)
//! - [`generate_rectangle_map`]: offset-row rectangle
//!
//! [`MapConfig`] bundles a [`MapShape`] with a world-space layout and
//! validates both before building.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod generate;
pub mod graph;
pub mod grid;
pub mod id;

#[cfg(test)]
pub(crate) mod compliance;

pub use config::{MapConfig, MapShape};
pub use generate::{generate_hexagonal_map, generate_rectangle_map};
pub use graph::HexGraph;
pub use grid::HexGrid;
pub use id::GridId;
