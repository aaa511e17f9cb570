//! Pathfinding strategies implementing the Strategy pattern.
//!
//! Each algorithm is encapsulated in its own unit struct behind the
//! [`PathfindingStrategy`] trait, so new algorithms can be added through the
//! registry without touching routing or lookup logic.

use std::fmt::Debug;

use crate::error::Result;
use crate::grid::{Grid, Point};
use crate::registry::StrategyRegistry;
use crate::search::{find_path_astar, find_path_dijkstra};

/// Trait for pathfinding strategies.
///
/// Implementations must be pure with respect to their inputs; strategies are
/// shared across concurrent callers and hold no per-search state.
pub trait PathfindingStrategy: Send + Sync + Debug {
    /// Stable identifier used in responses and logs.
    fn name(&self) -> &'static str;

    /// Compute a shortest path from `start` to `goal` on the grid.
    ///
    /// "No route" outcomes (unreachable goal, out-of-bounds or blocked
    /// endpoint) are signalled by an empty path, never an error.
    fn find_path(&self, grid: &Grid, start: Point, goal: Point) -> Vec<Point>;
}

/// A* search with a Manhattan-distance heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarStrategy;

impl PathfindingStrategy for AStarStrategy {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn find_path(&self, grid: &Grid, start: Point, goal: Point) -> Vec<Point> {
        find_path_astar(grid, start, goal)
    }
}

/// Dijkstra's algorithm; explores uniformly without a heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraStrategy;

impl PathfindingStrategy for DijkstraStrategy {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn find_path(&self, grid: &Grid, start: Point, goal: Point) -> Vec<Point> {
        find_path_dijkstra(grid, start, goal)
    }
}

/// Compute a single path with the named strategy over a freshly built grid.
///
/// This is the per-leg entry point consumed by service layers. The only
/// error it can raise is an unknown strategy name; every "no route" outcome
/// is the empty-path sentinel.
pub fn find_path(
    registry: &StrategyRegistry,
    width: i32,
    height: i32,
    obstacles: &[Point],
    start: Point,
    end: Point,
    algorithm: Option<&str>,
) -> Result<Vec<Point>> {
    let strategy = registry.get(algorithm)?;
    let grid = Grid::new(width, height, obstacles);
    Ok(strategy.find_path(&grid, start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategies_report_stable_names() {
        assert_eq!(AStarStrategy.name(), "A*");
        assert_eq!(DijkstraStrategy.name(), "Dijkstra");
    }

    #[test]
    fn find_path_resolves_default_strategy() {
        let registry = StrategyRegistry::default();
        let path = find_path(
            &registry,
            3,
            3,
            &[],
            Point::new(0, 0),
            Point::new(2, 0),
            None,
        )
        .expect("default strategy is registered");

        assert_eq!(path.len(), 3);
    }

    #[test]
    fn find_path_surfaces_unknown_strategy() {
        let registry = StrategyRegistry::default();
        let error = find_path(
            &registry,
            3,
            3,
            &[],
            Point::new(0, 0),
            Point::new(2, 0),
            Some("bogus"),
        )
        .expect_err("unregistered name");

        assert!(format!("{error}").contains("unknown pathfinding strategy"));
    }
}
