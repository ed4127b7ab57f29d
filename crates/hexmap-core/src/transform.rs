//! Pointy-top transforms between world space and axial coordinates.
//!
//! `size` is the hex circumradius in world units. The forward and inverse
//! transforms are exact affine inverses of each other:
//!
//! ```text
//! x = size * (√3·q + √3/2·r)        q = (√3/3·x − 1/3·y) / size
//! y = size * (3/2·r)                r = (2/3·y) / size
//! ```

use crate::coord::{AxialCoord, FractionalAxial, Point};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Map a world-space point to fractional axial coordinates.
pub fn world_to_axial(point: Point, size: f64) -> FractionalAxial {
    let q = (SQRT_3 / 3.0 * point.x - point.y / 3.0) / size;
    let r = (2.0 / 3.0 * point.y) / size;
    FractionalAxial::new(q, r)
}

/// Map an axial coordinate to the world-space center of its cell.
pub fn axial_to_world(coord: AxialCoord, size: f64) -> Point {
    let q = coord.q as f64;
    let r = coord.r as f64;
    Point::new(size * (SQRT_3 * q + SQRT_3 / 2.0 * r), size * (1.5 * r))
}

/// Round a fractional axial coordinate to the cell containing it.
///
/// Cube rounding: `q`, `r` and `s = -q - r` are rounded independently and
/// the component with the largest rounding error is recomputed from the
/// other two, restoring `q + r + s = 0`. Rounding `q` and `r` alone picks
/// the wrong cell near hex corners.
///
/// Halves round toward positive infinity on every component, so a point
/// on a shared edge goes to the same side of it wherever it lies on the
/// map.
pub fn resolve_axial(frac: FractionalAxial) -> AxialCoord {
    let s = -frac.q - frac.r;

    let mut rq = round_half_up(frac.q);
    let mut rr = round_half_up(frac.r);
    let rs = round_half_up(s);

    let q_diff = (rq - frac.q).abs();
    let r_diff = (rr - frac.r).abs();
    let s_diff = (rs - s).abs();

    if q_diff > r_diff && q_diff > s_diff {
        rq = -rr - rs;
    } else if r_diff > s_diff {
        rr = -rq - rs;
    }
    // Otherwise `s` absorbs the error; it is not stored.

    AxialCoord::new(rq as i32, rr as i32)
}

/// Nearest integer, with exact halves going up.
fn round_half_up(v: f64) -> f64 {
    let floor = v.floor();
    if v - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Resolve a world-space point straight to the containing cell coordinate.
pub fn world_to_cell(point: Point, size: f64) -> AxialCoord {
    resolve_axial(world_to_axial(point, size))
}

/// The six corner points of the cell at `coord`.
///
/// Pointy-top corners sit at `60°·i − 30°` for `i` in `0..6`, starting
/// right of the top vertex and proceeding clockwise in screen space.
pub fn hex_corners(coord: AxialCoord, size: f64) -> [Point; 6] {
    let center = axial_to_world(coord, size);
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f64 - 30.0).to_radians();
        Point::new(
            center.x + size * angle.cos(),
            center.y + size * angle.sin(),
        )
    })
}
