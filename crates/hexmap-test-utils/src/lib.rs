//! Test fixtures and oracles for hexmap development.
//!
//! - [`scatter_obstacles`]: deterministic random obstacle placement
//! - [`bfs_distance`]: brute-force shortest-path oracle for A* checks
//! - [`wall`]: a straight obstacle line for hand-written scenarios

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::{HashMap, VecDeque};

use hexmap_core::{AxialCoord, CoordKey, HexDirection};
use hexmap_grid::{HexGraph, HexGrid};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Mark each cell of `grid` as an obstacle with probability `density`.
///
/// Seeded ChaCha8, so the same `(grid, density, seed)` always yields the
/// same obstacle set. Cells listed in `keep_clear` are never blocked.
pub fn scatter_obstacles(
    grid: &HexGrid,
    density: f64,
    seed: u64,
    keep_clear: &[AxialCoord],
) -> HexGrid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let density = density.clamp(0.0, 1.0);
    let cells: Vec<_> = grid
        .cells()
        .map(|cell| {
            let block = rng.random_bool(density) && !keep_clear.contains(&cell.coord());
            cell.with_obstacle(block)
        })
        .collect();
    HexGrid::from_cells(cells)
}

/// Breadth-first step count from `start` to `goal`, or `None`.
///
/// Applies the same endpoint rules as A*: a missing or blocked endpoint is
/// unreachable, and `start == goal` is zero steps.
pub fn bfs_distance<G: HexGraph + ?Sized>(
    graph: &G,
    start: AxialCoord,
    goal: AxialCoord,
) -> Option<usize> {
    if !graph.is_passable(start) || !graph.is_passable(goal) {
        return None;
    }
    let mut dist: HashMap<CoordKey, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start.key(), 0);
    queue.push_back(start);
    while let Some(coord) = queue.pop_front() {
        let d = dist[&coord.key()];
        if coord == goal {
            return Some(d);
        }
        for nb in graph.passable_neighbours(coord) {
            if !dist.contains_key(&nb.key()) {
                dist.insert(nb.key(), d + 1);
                queue.push_back(nb.coord());
            }
        }
    }
    None
}

/// `len` coordinates from `from` stepping in `direction`, stopping early at
/// the edge of the `i32` range.
pub fn wall(from: AxialCoord, direction: HexDirection, len: usize) -> Vec<AxialCoord> {
    std::iter::successors(Some(from), |c| c.checked_neighbour(direction))
        .take(len)
        .collect()
}

/// Apply obstacle flags at every coordinate in `coords`.
pub fn block_all(grid: &HexGrid, coords: &[AxialCoord]) -> HexGrid {
    coords
        .iter()
        .fold(grid.clone(), |g, &coord| g.with_obstacle(coord, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_is_deterministic() {
        let grid = HexGrid::hexagon(4);
        let a = scatter_obstacles(&grid, 0.3, 7, &[]);
        let b = scatter_obstacles(&grid, 0.3, 7, &[]);
        assert_eq!(a.cells().collect::<Vec<_>>(), b.cells().collect::<Vec<_>>());
    }

    #[test]
    fn scatter_respects_keep_clear() {
        let grid = HexGrid::hexagon(3);
        let keep = [AxialCoord::ORIGIN];
        let blocked = scatter_obstacles(&grid, 1.0, 1, &keep);
        assert_eq!(blocked.obstacle_count(), grid.len() - 1);
        assert!(!blocked.lookup(AxialCoord::ORIGIN).unwrap().is_obstacle());
    }

    #[test]
    fn bfs_counts_steps() {
        let grid = HexGrid::hexagon(2);
        assert_eq!(bfs_distance(&grid, AxialCoord::new(-2, 0), AxialCoord::new(2, 0)), Some(4));
        assert_eq!(bfs_distance(&grid, AxialCoord::ORIGIN, AxialCoord::ORIGIN), Some(0));
        assert_eq!(bfs_distance(&grid, AxialCoord::ORIGIN, AxialCoord::new(5, 0)), None);
    }

    #[test]
    fn wall_steps_in_direction() {
        let w = wall(AxialCoord::new(0, -2), HexDirection::SouthEast, 3);
        assert_eq!(
            w,
            vec![AxialCoord::new(0, -2), AxialCoord::new(0, -1), AxialCoord::new(0, 0)]
        );
    }
}
