//! Shortest-path search over hex grids.
//!
//! [`find_path`] runs A* with the hex-distance heuristic over anything
//! implementing [`HexGraph`](hexmap_grid::HexGraph) and returns a
//! [`Path`] or `None`. An unreachable goal, a missing endpoint, and an
//! obstacle endpoint all report `None`; nothing in this crate fails.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod astar;
pub mod path;

pub use astar::{find_path, find_path_with_stats, SearchStats};
pub use path::Path;
