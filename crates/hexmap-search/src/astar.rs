//! A* shortest paths on unit-cost hex graphs.
//!
//! Moves between adjacent passable cells cost 1. The heuristic is
//! [`hex_distance`], which never overestimates and is consistent, so the
//! first time the goal leaves the open set its path is shortest and a cell
//! once expanded is never improved.
//!
//! The open set is a binary min-heap on `f = g + h` with lazy deletion:
//! an improved cell is pushed again and the stale entry is skipped when
//! popped. Among equal `f`, lower `h` (closer to the goal) pops first, then
//! the smaller coordinate. Only path length is guaranteed across graphs;
//! which of several shortest paths is returned is an artefact of that
//! tie-break.

use crate::path::Path;
use hexmap_core::{hex_distance, AxialCoord, Cell, CoordKey};
use hexmap_grid::HexGraph;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use tracing::{debug, trace};

/// Counters from one search, for logging and benchmarking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells removed from the open set and expanded.
    pub expanded: usize,
    /// Largest open-set size seen, stale entries included.
    pub max_open: usize,
}

/// Heap entry; ordered so that `BinaryHeap` pops the lowest `f` first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OpenEntry {
    f: u32,
    h: u32,
    g: u32,
    cell: Cell,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.cell.coord().cmp(&self.cell.coord()))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest path from `start` to `goal`, or `None` if there is none.
///
/// - `start == goal` on a passable member yields the single-cell path.
/// - A start or goal that is an obstacle or not in the graph yields `None`;
///   such endpoints are treated as disconnected, not as errors.
///
/// # Examples
///
/// ```
/// use hexmap_core::AxialCoord;
/// use hexmap_grid::HexGrid;
/// use hexmap_search::find_path;
///
/// let grid = HexGrid::hexagon(3).with_obstacle_toggled(AxialCoord::ORIGIN);
/// let path = find_path(&grid, AxialCoord::new(-1, 0), AxialCoord::new(1, 0)).unwrap();
/// assert_eq!(path.steps(), 3);
/// assert!(!path.contains(AxialCoord::ORIGIN));
/// ```
pub fn find_path<G: HexGraph + ?Sized>(
    graph: &G,
    start: AxialCoord,
    goal: AxialCoord,
) -> Option<Path> {
    find_path_with_stats(graph, start, goal).0
}

/// [`find_path`], also returning the search counters.
pub fn find_path_with_stats<G: HexGraph + ?Sized>(
    graph: &G,
    start: AxialCoord,
    goal: AxialCoord,
) -> (Option<Path>, SearchStats) {
    let mut stats = SearchStats::default();

    let endpoints = graph
        .cell(start)
        .zip(graph.cell(goal))
        .filter(|(s, g)| !s.is_obstacle() && !g.is_obstacle());
    let Some((start_cell, goal_cell)) = endpoints else {
        debug!(%start, %goal, "endpoint missing or blocked; no path");
        return (None, stats);
    };

    let mut open = BinaryHeap::new();
    let mut g_score: HashMap<CoordKey, u32> = HashMap::new();
    let mut came_from: HashMap<CoordKey, Cell> = HashMap::new();
    let mut closed: HashSet<CoordKey> = HashSet::new();

    let h0 = hex_distance(start, goal);
    open.push(OpenEntry {
        f: h0,
        h: h0,
        g: 0,
        cell: start_cell,
    });
    g_score.insert(start_cell.key(), 0);
    stats.max_open = 1;

    while let Some(entry) = open.pop() {
        let current = entry.cell;
        let key = current.key();

        if closed.contains(&key) || g_score.get(&key).is_some_and(|&g| entry.g > g) {
            continue;
        }

        if current.coord() == goal {
            let path = reconstruct(&came_from, goal_cell);
            debug!(
                %start,
                %goal,
                steps = path.steps(),
                expanded = stats.expanded,
                max_open = stats.max_open,
                "path found"
            );
            return (Some(path), stats);
        }

        closed.insert(key);
        stats.expanded += 1;
        trace!(coord = %current.coord(), g = entry.g, f = entry.f, "expand");

        for neighbour in graph.passable_neighbours(current.coord()) {
            let nkey = neighbour.key();
            let tentative = entry.g.saturating_add(1);
            if g_score.get(&nkey).is_some_and(|&g| tentative >= g) {
                continue;
            }
            came_from.insert(nkey, current);
            g_score.insert(nkey, tentative);
            let h = hex_distance(neighbour.coord(), goal);
            open.push(OpenEntry {
                f: tentative.saturating_add(h),
                h,
                g: tentative,
                cell: neighbour,
            });
        }
        stats.max_open = stats.max_open.max(open.len());
    }

    debug!(
        %start,
        %goal,
        expanded = stats.expanded,
        "open set exhausted; no path"
    );
    (None, stats)
}

/// Follow predecessor links back from `goal` and reverse.
fn reconstruct(came_from: &HashMap<CoordKey, Cell>, goal: Cell) -> Path {
    let mut cells = vec![goal];
    let mut cursor = goal.key();
    while let Some(&prev) = came_from.get(&cursor) {
        cells.push(prev);
        cursor = prev.key();
    }
    cells.reverse();
    Path::from_cells(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexmap_grid::HexGrid;

    fn c(q: i32, r: i32) -> AxialCoord {
        AxialCoord::new(q, r)
    }

    // ── Endpoints ───────────────────────────────────────────────

    #[test]
    fn start_equals_goal_is_single_cell() {
        let grid = HexGrid::hexagon(2);
        let path = find_path(&grid, c(1, -1), c(1, -1)).unwrap();
        assert_eq!(path.coords().collect::<Vec<_>>(), vec![c(1, -1)]);
        assert_eq!(path.steps(), 0);
    }

    #[test]
    fn absent_endpoints_yield_none() {
        let grid = HexGrid::hexagon(2);
        assert!(find_path(&grid, c(9, 9), c(0, 0)).is_none());
        assert!(find_path(&grid, c(0, 0), c(9, 9)).is_none());
        assert!(find_path(&grid, c(9, 9), c(9, 9)).is_none());
    }

    #[test]
    fn obstacle_endpoints_yield_none() {
        let grid = HexGrid::hexagon(2).with_obstacle_toggled(c(0, 0));
        assert!(find_path(&grid, c(0, 0), c(2, 0)).is_none());
        assert!(find_path(&grid, c(2, 0), c(0, 0)).is_none());
        assert!(find_path(&grid, c(0, 0), c(0, 0)).is_none());
    }

    // ── Routing ─────────────────────────────────────────────────

    #[test]
    fn straight_line_on_open_grid() {
        let grid = HexGrid::hexagon(3);
        let path = find_path(&grid, c(-3, 0), c(3, 0)).unwrap();
        assert_eq!(path.steps(), 6);
        assert!(path.is_valid_in(&grid));
        assert_eq!(path.start().coord(), c(-3, 0));
        assert_eq!(path.goal().coord(), c(3, 0));
    }

    #[test]
    fn radius_one_detour_around_obstacle() {
        // (0,-1) and (0,1) are two apart either through the origin or
        // around it; blocking (1,0) leaves the origin route open.
        let grid = HexGrid::hexagon(1).with_obstacle_toggled(c(1, 0));
        let path = find_path(&grid, c(0, -1), c(0, 1)).unwrap();
        assert_eq!(path.steps(), 2);
        assert!(!path.contains(c(1, 0)));
        assert!(path.is_valid_in(&grid));
    }

    #[test]
    fn radius_one_forced_around_blocked_center() {
        let grid = HexGrid::hexagon(1)
            .with_obstacle_toggled(c(0, 0))
            .with_obstacle_toggled(c(1, 0));
        let path = find_path(&grid, c(0, -1), c(0, 1)).unwrap();
        // Only the west side remains: (0,-1) -> (-1,0) -> (-1,1) -> (0,1).
        assert_eq!(
            path.coords().collect::<Vec<_>>(),
            vec![c(0, -1), c(-1, 0), c(-1, 1), c(0, 1)]
        );
    }

    #[test]
    fn walled_off_goal_yields_none() {
        let mut grid = HexGrid::hexagon(3);
        for n in c(2, 0).neighbours() {
            grid = grid.with_obstacle_toggled(n);
        }
        let (path, stats) = find_path_with_stats(&grid, c(-2, 0), c(2, 0));
        assert!(path.is_none());
        assert!(stats.expanded > 0);
    }

    #[test]
    fn heuristic_keeps_open_grid_search_narrow() {
        let grid = HexGrid::hexagon(10);
        let (path, stats) = find_path_with_stats(&grid, c(-10, 0), c(10, 0));
        assert_eq!(path.unwrap().steps(), 20);
        // Straight run: far fewer expansions than the 331-cell map.
        assert!(stats.expanded < 100, "expanded {}", stats.expanded);
    }

    #[test]
    fn routes_at_i32_edge() {
        let (edge, inner) = (c(i32::MAX, 0), c(i32::MAX - 1, 0));
        let grid = HexGrid::from_cells([Cell::new(edge), Cell::new(inner)]);
        let path = find_path(&grid, edge, inner).unwrap();
        assert_eq!(path.coords().collect::<Vec<_>>(), vec![edge, inner]);

        let far = HexGrid::from_cells([Cell::new(c(i32::MIN, 0)), Cell::new(edge)]);
        assert!(find_path(&far, c(i32::MIN, 0), edge).is_none());
    }

    #[test]
    fn path_outlives_grid() {
        let path = {
            let grid = HexGrid::hexagon(2);
            find_path(&grid, c(0, -2), c(0, 2)).unwrap()
        };
        assert_eq!(path.steps(), 4);
    }

    #[test]
    fn heap_pops_lowest_f_then_lowest_h() {
        let mut heap = BinaryHeap::new();
        let e = |f, h| OpenEntry {
            f,
            h,
            g: f - h,
            cell: Cell::new(c(f as i32, h as i32)),
        };
        heap.push(e(5, 1));
        heap.push(e(4, 3));
        heap.push(e(4, 1));
        heap.push(e(6, 0));
        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|x| (x.f, x.h))).collect();
        assert_eq!(order, vec![(4, 1), (4, 3), (5, 1), (6, 0)]);
    }
}
