//! [`RoutePlanner`]: one map, two endpoints, and the current route.

use hexmap_core::{AxialCoord, Cell, ConfigError, HexLayout, Point};
use hexmap_grid::{HexGrid, MapConfig, MapShape};
use hexmap_search::{find_path, Path};
use tracing::debug;

/// Caller-side state for interactive route planning.
///
/// Holds the current grid snapshot and optional start and goal
/// coordinates. Every obstacle change swaps in a new snapshot, so a
/// [`grid`](Self::grid) reference taken earlier stays consistent.
///
/// The start and goal cells are protected: toggling an obstacle on either
/// is refused.
///
/// # Examples
///
/// ```
/// use hexmap::prelude::*;
///
/// let mut planner = RoutePlanner::new(MapConfig::with_shape(MapShape::Hexagon { radius: 1 })).unwrap();
/// assert!(planner.set_start(AxialCoord::new(0, -1)));
/// assert!(planner.set_goal(AxialCoord::new(0, 1)));
/// assert!(planner.toggle_obstacle(AxialCoord::ORIGIN));
///
/// let path = planner.path().unwrap();
/// assert_eq!(path.steps(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct RoutePlanner {
    config: MapConfig,
    grid: HexGrid,
    start: Option<AxialCoord>,
    goal: Option<AxialCoord>,
}

impl RoutePlanner {
    /// Validate `config` and generate its map.
    pub fn new(config: MapConfig) -> Result<Self, ConfigError> {
        let grid = config.build()?;
        Ok(Self {
            config,
            grid,
            start: None,
            goal: None,
        })
    }

    /// Current grid snapshot.
    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    /// World-space layout used by [`resolve`](Self::resolve).
    pub fn layout(&self) -> &HexLayout {
        &self.config.layout
    }

    /// Active configuration.
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Selected start cell, as it is in the current snapshot.
    pub fn start(&self) -> Option<Cell> {
        self.start.and_then(|c| self.grid.lookup(c))
    }

    /// Selected goal cell, as it is in the current snapshot.
    pub fn goal(&self) -> Option<Cell> {
        self.goal.and_then(|c| self.grid.lookup(c))
    }

    /// The map cell under a world-space point.
    pub fn resolve(&self, point: Point) -> Option<Cell> {
        self.grid.resolve_point(point, &self.config.layout)
    }

    /// Select the start cell. Returns `false` if `coord` is not on the map.
    pub fn set_start(&mut self, coord: AxialCoord) -> bool {
        let ok = self.grid.contains(coord);
        if ok {
            self.start = Some(coord);
        }
        ok
    }

    /// Select the goal cell. Returns `false` if `coord` is not on the map.
    pub fn set_goal(&mut self, coord: AxialCoord) -> bool {
        let ok = self.grid.contains(coord);
        if ok {
            self.goal = Some(coord);
        }
        ok
    }

    /// Forget the selected start and goal.
    pub fn clear_endpoints(&mut self) {
        self.start = None;
        self.goal = None;
    }

    /// Flip the obstacle flag at `coord`.
    ///
    /// Returns `false`, leaving the snapshot untouched, when `coord` is off
    /// the map or is the current start or goal.
    pub fn toggle_obstacle(&mut self, coord: AxialCoord) -> bool {
        if !self.grid.contains(coord) || self.start == Some(coord) || self.goal == Some(coord) {
            return false;
        }
        self.grid = self.grid.with_obstacle_toggled(coord);
        true
    }

    /// Shortest route between the selected endpoints on the current
    /// snapshot. `None` until both are set, or when they are disconnected.
    pub fn path(&self) -> Option<Path> {
        find_path(&self.grid, self.start?, self.goal?)
    }

    /// Replace the map shape, regenerating the grid and clearing endpoints.
    ///
    /// On error the planner is unchanged.
    pub fn set_shape(&mut self, shape: MapShape) -> Result<(), ConfigError> {
        let config = MapConfig { shape, ..self.config };
        let grid = config.build()?;
        debug!(?shape, cells = grid.len(), "map shape changed");
        self.config = config;
        self.grid = grid;
        self.clear_endpoints();
        Ok(())
    }

    /// Clear endpoints and all obstacles by regenerating the map.
    pub fn reset(&mut self) {
        self.clear_endpoints();
        self.grid = self.config.shape.generate();
        debug!(grid = %self.grid.id(), "planner reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(q: i32, r: i32) -> AxialCoord {
        AxialCoord::new(q, r)
    }

    fn planner(radius: i32) -> RoutePlanner {
        RoutePlanner::new(MapConfig::with_shape(MapShape::Hexagon { radius })).unwrap()
    }

    #[test]
    fn path_requires_both_endpoints() {
        let mut p = planner(2);
        assert!(p.path().is_none());
        p.set_start(c(-2, 0));
        assert!(p.path().is_none());
        p.set_goal(c(2, 0));
        assert_eq!(p.path().unwrap().steps(), 4);
    }

    #[test]
    fn endpoints_must_be_on_map() {
        let mut p = planner(1);
        assert!(!p.set_start(c(5, 5)));
        assert!(!p.set_goal(c(-5, 0)));
        assert!(p.start().is_none());
        assert!(p.goal().is_none());
    }

    #[test]
    fn endpoints_are_protected_from_toggles() {
        let mut p = planner(2);
        p.set_start(c(0, 0));
        p.set_goal(c(1, 0));
        let before = p.grid().id();
        assert!(!p.toggle_obstacle(c(0, 0)));
        assert!(!p.toggle_obstacle(c(1, 0)));
        assert!(!p.toggle_obstacle(c(9, 9)));
        assert_eq!(p.grid().id(), before);
        assert!(p.toggle_obstacle(c(-1, 0)));
        assert_ne!(p.grid().id(), before);
    }

    #[test]
    fn path_follows_latest_snapshot() {
        let mut p = planner(1);
        p.set_start(c(0, -1));
        p.set_goal(c(0, 1));
        assert_eq!(p.path().unwrap().steps(), 2);
        let snapshot = p.grid().clone();

        for coord in [c(0, 0), c(1, 0), c(-1, 1)] {
            assert!(p.toggle_obstacle(coord));
        }
        // West side: (0,-1) -> (-1,0) -> (-1,1) is now blocked at (-1,1).
        assert!(p.path().is_none());
        // The earlier snapshot is untouched.
        assert_eq!(snapshot.obstacle_count(), 0);
    }

    #[test]
    fn set_shape_clears_endpoints() {
        let mut p = planner(2);
        p.set_start(c(0, 0));
        p.toggle_obstacle(c(1, 1));
        p.set_shape(MapShape::Rectangle { width: 4, height: 4 }).unwrap();
        assert_eq!(p.grid().len(), 16);
        assert!(p.start().is_none());
        assert_eq!(p.grid().obstacle_count(), 0);
    }

    #[test]
    fn set_shape_rejects_oversized_and_keeps_state() {
        let mut p = planner(2);
        p.set_start(c(0, 0));
        let err = p.set_shape(MapShape::Hexagon { radius: 100_000 });
        assert!(matches!(err, Err(ConfigError::CellCountOverflow { .. })));
        assert_eq!(p.grid().len(), 19);
        assert!(p.start().is_some());
    }

    #[test]
    fn reset_clears_obstacles_and_endpoints() {
        let mut p = planner(2);
        p.set_start(c(0, 0));
        p.toggle_obstacle(c(1, 0));
        p.reset();
        assert_eq!(p.grid().obstacle_count(), 0);
        assert!(p.start().is_none());
        assert_eq!(p.grid().len(), 19);
    }

    #[test]
    fn resolve_uses_configured_layout() {
        let config = MapConfig {
            shape: MapShape::Hexagon { radius: 2 },
            layout: HexLayout::new(10.0).unwrap(),
        };
        let p = RoutePlanner::new(config).unwrap();
        let center = p.layout().to_world(c(-1, 2));
        assert_eq!(p.resolve(center).map(|cell| cell.coord()), Some(c(-1, 2)));
        assert!(p.resolve(Point::new(1000.0, 0.0)).is_none());
    }
}
