//! Core value types for hexmap.
//!
//! The leaf crate of the workspace. It defines axial coordinates and their
//! packed lookup key, the [`Cell`] value type, and the pure transforms
//! between world space and axial hex coordinates.
//!
//! # Coordinates
//!
//! Cells are addressed by [`AxialCoord`] `(q, r)` on a pointy-top layout.
//! [`CoordKey`] packs a coordinate into a collision-free `u64` used as the
//! grid index key.
//!
//! # Transforms
//!
//! - [`world_to_axial`] / [`axial_to_world`]: affine inverses of each other
//! - [`resolve_axial`]: cube rounding from fractional to integer coordinates
//! - [`HexLayout`]: a validated hex size bundling the above

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod coord;
pub mod error;
pub mod layout;
pub mod transform;

pub use cell::Cell;
pub use coord::{hex_distance, AxialCoord, CoordKey, FractionalAxial, HexDirection, Point};
pub use error::ConfigError;
pub use layout::HexLayout;
pub use transform::{axial_to_world, hex_corners, resolve_axial, world_to_axial, world_to_cell};
