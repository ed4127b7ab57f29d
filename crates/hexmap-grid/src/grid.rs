//! [`HexGrid`]: an immutable, coordinate-indexed set of hex cells.

use crate::graph::HexGraph;
use crate::id::GridId;
use hexmap_core::{AxialCoord, Cell, CoordKey, HexLayout, Point};
use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

/// A finite set of hex cells indexed by coordinate.
///
/// A grid is a snapshot: nothing mutates it after construction. Obstacle
/// changes produce a new grid via [`with_obstacle_toggled`] or
/// [`with_obstacle`], each with a fresh [`GridId`]. Holders of the old
/// grid keep observing the old cells.
///
/// Iteration order is insertion order, so enumeration is deterministic for
/// a given construction sequence.
///
/// # Examples
///
/// ```
/// use hexmap_core::AxialCoord;
/// use hexmap_grid::HexGrid;
///
/// let grid = HexGrid::hexagon(1);
/// assert_eq!(grid.len(), 7);
///
/// let origin = grid.lookup(AxialCoord::ORIGIN).unwrap();
/// assert_eq!(grid.neighbours(&origin).len(), 6);
///
/// let blocked = grid.with_obstacle_toggled(AxialCoord::new(1, 0));
/// assert_eq!(blocked.neighbours(&origin).len(), 5);
/// assert_ne!(blocked.id(), grid.id());
/// ```
///
/// [`with_obstacle_toggled`]: Self::with_obstacle_toggled
/// [`with_obstacle`]: Self::with_obstacle
#[derive(Clone, Debug)]
pub struct HexGrid {
    cells: IndexMap<CoordKey, Cell>,
    id: GridId,
}

impl HexGrid {
    /// Index an explicit list of cells.
    ///
    /// A coordinate listed twice keeps the last cell given for it, in the
    /// position where it first appeared.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let cells: IndexMap<CoordKey, Cell> =
            cells.into_iter().map(|cell| (cell.key(), cell)).collect();
        let grid = Self {
            cells,
            id: GridId::next(),
        };
        debug!(grid = %grid.id, cells = grid.len(), "indexed hex grid");
        grid
    }

    /// Hexagon-shaped grid of the given radius, all cells passable.
    ///
    /// Negative radii yield an empty grid.
    pub fn hexagon(radius: i32) -> Self {
        Self::from_cells(crate::generate::generate_hexagonal_map(radius))
    }

    /// Parallelogram-offset rectangular grid, all cells passable.
    pub fn rectangle(width: i32, height: i32) -> Self {
        Self::from_cells(crate::generate::generate_rectangle_map(width, height))
    }

    /// Snapshot identity of this grid.
    pub fn id(&self) -> GridId {
        self.id
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at `coord`, if it belongs to the grid.
    pub fn lookup(&self, coord: AxialCoord) -> Option<Cell> {
        self.cells.get(&coord.key()).copied()
    }

    /// Whether `coord` belongs to the grid.
    pub fn contains(&self, coord: AxialCoord) -> bool {
        self.cells.contains_key(&coord.key())
    }

    /// Passable members adjacent to `cell`, in
    /// [`HexDirection::ALL`](hexmap_core::HexDirection::ALL) order.
    ///
    /// Offsets that fall outside the grid or land on an obstacle are
    /// skipped, so the result holds at most six cells.
    pub fn neighbours(&self, cell: &Cell) -> SmallVec<[Cell; 6]> {
        self.passable_neighbours(cell.coord())
    }

    /// Resolve a world-space point to the cell containing it.
    ///
    /// Returns `None` when the point falls in a hex that is not part of
    /// the grid.
    pub fn resolve_point(&self, point: Point, layout: &HexLayout) -> Option<Cell> {
        self.lookup(layout.resolve(point))
    }

    /// All cells in index order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.values().copied()
    }

    /// All coordinates in index order.
    pub fn coords(&self) -> impl Iterator<Item = AxialCoord> + '_ {
        self.cells.values().map(Cell::coord)
    }

    /// Obstacle cells in index order.
    pub fn obstacles(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(Cell::is_obstacle)
    }

    /// Number of obstacle cells.
    pub fn obstacle_count(&self) -> usize {
        self.obstacles().count()
    }

    /// Every cell paired with its passable neighbours.
    pub fn adjacency(&self) -> Vec<(Cell, SmallVec<[Cell; 6]>)> {
        self.cells()
            .map(|cell| (cell, self.neighbours(&cell)))
            .collect()
    }

    /// A new grid with the obstacle flag at `coord` inverted.
    ///
    /// Toggling a coordinate outside the grid is a no-op: the result is a
    /// clone of `self`, sharing its id.
    pub fn with_obstacle_toggled(&self, coord: AxialCoord) -> Self {
        match self.lookup(coord) {
            Some(cell) => self.replaced(cell.toggled()),
            None => {
                trace!(grid = %self.id, %coord, "toggle outside grid ignored");
                self.clone()
            }
        }
    }

    /// A new grid with the obstacle flag at `coord` set to `is_obstacle`.
    ///
    /// Returns a clone of `self` when `coord` is absent or already has the
    /// requested flag.
    pub fn with_obstacle(&self, coord: AxialCoord, is_obstacle: bool) -> Self {
        match self.lookup(coord) {
            Some(cell) if cell.is_obstacle() != is_obstacle => {
                self.replaced(cell.with_obstacle(is_obstacle))
            }
            _ => self.clone(),
        }
    }

    /// A new grid with the same cells and no obstacles.
    pub fn with_obstacles_cleared(&self) -> Self {
        Self::from_cells(self.cells().map(|cell| cell.with_obstacle(false)))
    }

    /// Copy the index and swap in `cell` at its own key.
    fn replaced(&self, cell: Cell) -> Self {
        let mut cells = self.cells.clone();
        // Key already present: insert keeps its index position.
        cells.insert(cell.key(), cell);
        let grid = Self {
            cells,
            id: GridId::next(),
        };
        debug!(
            from = %self.id,
            to = %grid.id,
            coord = %cell.coord(),
            obstacle = cell.is_obstacle(),
            "derived grid snapshot"
        );
        grid
    }
}

impl HexGraph for HexGrid {
    fn cell(&self, coord: AxialCoord) -> Option<Cell> {
        self.lookup(coord)
    }
}

impl Default for HexGrid {
    fn default() -> Self {
        Self::from_cells(std::iter::empty())
    }
}

impl FromIterator<Cell> for HexGrid {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self::from_cells(iter)
    }
}
