//! Initial cell sets for the supported map shapes.

use hexmap_core::{AxialCoord, Cell};

/// Number of cells in a hexagon of the given radius: `3n² + 3n + 1`.
///
/// Zero for negative radii.
pub fn hexagon_cell_count(radius: i32) -> u64 {
    if radius < 0 {
        return 0;
    }
    let n = radius as u64;
    3 * n * n + 3 * n + 1
}

/// Number of cells in a `width × height` rectangle map.
pub fn rectangle_cell_count(width: i32, height: i32) -> u64 {
    if width <= 0 || height <= 0 {
        return 0;
    }
    width as u64 * height as u64
}

/// Every cell within hex distance `radius` of the origin.
///
/// Ordered by `q` ascending, then `r` ascending. All cells are passable.
/// A negative radius produces no cells.
pub fn generate_hexagonal_map(radius: i32) -> Vec<Cell> {
    if radius < 0 {
        return Vec::new();
    }
    let mut cells = Vec::with_capacity(hexagon_cell_count(radius) as usize);
    for q in -radius..=radius {
        let r_lo = (-radius).max(-q - radius);
        let r_hi = radius.min(-q + radius);
        for r in r_lo..=r_hi {
            cells.push(Cell::new(AxialCoord::new(q, r)));
        }
    }
    cells
}

/// A rectangle of `height` rows by `width` columns.
///
/// Each row `r` is shifted left by `⌊r / 2⌋` in `q` so the rows stack
/// into a rectangle on screen rather than a parallelogram. Ordered row by
/// row. Non-positive dimensions produce no cells.
pub fn generate_rectangle_map(width: i32, height: i32) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(rectangle_cell_count(width, height) as usize);
    for r in 0..height.max(0) {
        let offset = r.div_euclid(2);
        for q in -offset..width - offset {
            cells.push(Cell::new(AxialCoord::new(q, r)));
        }
    }
    cells
}
