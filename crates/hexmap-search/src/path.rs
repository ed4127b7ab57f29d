//! The [`Path`] result value.

use hexmap_core::{hex_distance, AxialCoord, Cell};
use hexmap_grid::HexGraph;
use std::fmt;

/// A route from start to goal, both inclusive.
///
/// Always holds at least one cell: a search whose start is its goal
/// returns the single-cell path. Cells are copies; a path stays valid after
/// the grid it was computed on is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    /// Wrap a non-empty cell sequence produced by a search.
    pub(crate) fn from_cells(cells: Vec<Cell>) -> Self {
        debug_assert!(!cells.is_empty(), "a path holds at least its start");
        Self { cells }
    }

    /// Cells from start to goal.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Coordinates from start to goal.
    pub fn coords(&self) -> impl Iterator<Item = AxialCoord> + '_ {
        self.cells.iter().map(Cell::coord)
    }

    /// Number of cells, including both endpoints.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`: a path holds at least its start cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of moves: one less than [`len`](Self::len).
    pub fn steps(&self) -> usize {
        self.cells.len() - 1
    }

    /// First cell.
    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    /// Last cell.
    pub fn goal(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Whether the path passes through `coord`.
    pub fn contains(&self, coord: AxialCoord) -> bool {
        self.coords().any(|c| c == coord)
    }

    /// Consume the path, returning its cells.
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    /// Check the path against `graph`.
    ///
    /// True when every cell is a passable member and each consecutive pair
    /// is adjacent.
    pub fn is_valid_in<G: HexGraph + ?Sized>(&self, graph: &G) -> bool {
        self.cells.iter().all(|cell| graph.is_passable(cell.coord()))
            && self
                .cells
                .windows(2)
                .all(|pair| hex_distance(pair[0].coord(), pair[1].coord()) == 1)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
