//! Route planning on a radius-5 map with a wall across the middle.
//!
//! Demonstrates:
//!   1. Building a map from a `MapConfig`
//!   2. Resolving world-space clicks to cells
//!   3. Toggling obstacles (endpoints are protected)
//!   4. Reading the route, the obstacle list, and a neighbour list
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example route_demo

use hexmap::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = MapConfig::default();
    let mut planner = match RoutePlanner::new(config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("invalid config: {e}");
            return;
        }
    };
    println!("map: {} cells, hex size {}", planner.grid().len(), planner.layout().size());

    // Clicks on the centers of (-4, 0) and (4, 0).
    let layout = *planner.layout();
    let Some(start) = planner.resolve(layout.to_world(AxialCoord::new(-4, 0))) else {
        println!("start click missed the map");
        return;
    };
    planner.set_start(start.coord());
    println!("start: {start}");

    let Some(goal) = planner.resolve(layout.to_world(AxialCoord::new(4, 0))) else {
        println!("goal click missed the map");
        return;
    };
    planner.set_goal(goal.coord());
    println!("goal: {goal}");

    // Wall along q = 0, leaving the bottom cell open.
    let mut wall = AxialCoord::new(0, -5);
    for _ in 0..10 {
        planner.toggle_obstacle(wall);
        wall = wall.neighbour(HexDirection::SouthEast);
    }

    match planner.path() {
        Some(path) => println!("path ({} steps): {path}", path.steps()),
        None => println!("no path"),
    }

    let obstacles: Vec<String> = planner.grid().obstacles().map(|c| c.to_string()).collect();
    println!("obstacles: {}", obstacles.join(" "));

    if let Some(origin) = planner.grid().lookup(AxialCoord::ORIGIN) {
        let neighbours: Vec<String> = planner
            .grid()
            .neighbours(&origin)
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("neighbours of {origin}: {}", neighbours.join(" "));
    }
}
