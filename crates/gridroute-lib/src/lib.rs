//! Gridroute library entry points.
//!
//! This crate exposes the grid model, the pluggable pathfinding strategies
//! (A* and Dijkstra), the strategy registry, the segmented waypoint router,
//! and the map/route validation checks. Higher-level consumers (CLI,
//! services) should only depend on the items exported here instead of
//! reimplementing behavior.
//!
//! Every operation is synchronous and pure with respect to its inputs; grids
//! and search state live for exactly one invocation, so concurrent callers
//! need no coordination.

#![deny(warnings)]

pub mod error;
pub mod grid;
pub mod registry;
pub mod router;
pub mod search;
pub mod strategy;
pub mod validate;

pub use error::{Error, Result};
pub use grid::{Grid, Point};
pub use registry::{StrategyRegistry, DEFAULT_STRATEGY};
pub use router::{plan_route, RoutePlan, RouteRequest};
pub use search::{find_path_astar, find_path_dijkstra};
pub use strategy::{find_path, AStarStrategy, DijkstraStrategy, PathfindingStrategy};
pub use validate::{
    check_dimensions, check_endpoints_clear, check_map_id, check_map_shape, check_route_clear,
    check_route_length, detect_cycles, Connection, DimensionLimits, MapConfig, Validation,
    MAX_ROUTE_LENGTH,
};
