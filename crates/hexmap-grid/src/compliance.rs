//! Grid invariant checks shared by the test modules.

use crate::graph::HexGraph;
use crate::grid::HexGrid;
use hexmap_core::hex_distance;
use indexmap::IndexSet;

/// Assert that every indexed coordinate is unique and resolves to itself.
pub fn assert_lookup_consistent(grid: &HexGrid) {
    let unique: IndexSet<_> = grid.coords().collect();
    assert_eq!(unique.len(), grid.len(), "grid has duplicate coordinates");
    for cell in grid.cells() {
        assert_eq!(
            grid.lookup(cell.coord()),
            Some(cell),
            "lookup({}) disagrees with enumeration",
            cell.coord()
        );
    }
}

/// Assert that neighbours are adjacent, passable members, and at most six.
pub fn assert_neighbours_well_formed(grid: &HexGrid) {
    for cell in grid.cells() {
        let neighbours = grid.neighbours(&cell);
        assert!(neighbours.len() <= 6, "{cell} has {} neighbours", neighbours.len());
        for nb in &neighbours {
            assert_eq!(hex_distance(cell.coord(), nb.coord()), 1, "{nb} not adjacent to {cell}");
            assert!(!nb.is_obstacle(), "obstacle {nb} listed as neighbour of {cell}");
            assert!(grid.contains(nb.coord()), "{nb} listed but not a member");
        }
    }
}

/// Assert that adjacency between passable cells is symmetric.
pub fn assert_neighbours_symmetric(grid: &HexGrid) {
    for cell in grid.cells().filter(|c| !c.is_obstacle()) {
        for nb in grid.neighbours(&cell) {
            assert!(
                grid.passable_neighbours(nb.coord()).contains(&cell),
                "neighbour symmetry violated: {nb} in N({cell}) but {cell} not in N({nb})"
            );
        }
    }
}

/// Run all grid compliance checks.
pub fn run_full_compliance(grid: &HexGrid) {
    assert_lookup_consistent(grid);
    assert_neighbours_well_formed(grid);
    assert_neighbours_symmetric(grid);
}
