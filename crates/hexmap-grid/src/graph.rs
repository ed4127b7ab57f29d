//! The [`HexGraph`] trait: what a search needs from a cell set.

use hexmap_core::{AxialCoord, Cell};
use smallvec::SmallVec;

/// Read-only graph view over a set of hex cells.
///
/// Pathfinding and test oracles are written against this trait rather
/// than [`HexGrid`](crate::HexGrid) so that alternative cell stores can be
/// searched without copying into a grid.
pub trait HexGraph {
    /// The cell at `coord`, or `None` if it is not part of the graph.
    fn cell(&self, coord: AxialCoord) -> Option<Cell>;

    /// Members adjacent to `coord` that are not obstacles.
    ///
    /// Returned in [`HexDirection::ALL`](hexmap_core::HexDirection::ALL)
    /// order. `coord` itself need not be a member. Offsets outside the
    /// `i32` coordinate range are skipped.
    fn passable_neighbours(&self, coord: AxialCoord) -> SmallVec<[Cell; 6]> {
        coord
            .checked_neighbours()
            .filter_map(|n| self.cell(n))
            .filter(|cell| !cell.is_obstacle())
            .collect()
    }

    /// Whether `coord` is a member that is not an obstacle.
    fn is_passable(&self, coord: AxialCoord) -> bool {
        self.cell(coord).is_some_and(|cell| !cell.is_obstacle())
    }
}
