//! Benchmark profiles for hexmap.
//!
//! - [`reference_grid`]: radius-30 hexagon (2791 cells) with ~25% obstacles
//! - [`corner_pairs`]: deterministic far-apart query pairs on that grid

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use hexmap_core::AxialCoord;
use hexmap_grid::HexGrid;
use hexmap_test_utils::scatter_obstacles;

/// Radius of the reference benchmark map.
pub const REFERENCE_RADIUS: i32 = 30;

/// Opposite corners of the reference hexagon, kept clear of obstacles.
pub fn corner_pairs() -> Vec<(AxialCoord, AxialCoord)> {
    let n = REFERENCE_RADIUS;
    vec![
        (AxialCoord::new(-n, 0), AxialCoord::new(n, 0)),
        (AxialCoord::new(0, -n), AxialCoord::new(0, n)),
        (AxialCoord::new(n, -n), AxialCoord::new(-n, n)),
    ]
}

/// Build the reference grid: radius 30, obstacle density 0.25, fixed seed.
pub fn reference_grid(seed: u64) -> HexGrid {
    let keep: Vec<AxialCoord> = corner_pairs()
        .into_iter()
        .flat_map(|(a, b)| [a, b])
        .collect();
    scatter_obstacles(&HexGrid::hexagon(REFERENCE_RADIUS), 0.25, seed, &keep)
}
