//! Segmented route planning across an ordered waypoint sequence.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::grid::{Grid, Point};
use crate::registry::StrategyRegistry;
use crate::strategy::PathfindingStrategy;
use crate::validate::{check_dimensions, DimensionLimits};

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub width: i32,
    pub height: i32,
    pub obstacles: Vec<Point>,
    /// Intermediate stops visited in order between `start` and `end`.
    pub waypoints: Vec<Point>,
    pub start: Point,
    pub end: Point,
    /// Registered strategy name; `None` selects the registry default.
    pub algorithm: Option<String>,
}

impl RouteRequest {
    /// Convenience constructor for a direct route without waypoints.
    pub fn direct(width: i32, height: i32, start: Point, end: Point) -> Self {
        Self {
            width,
            height,
            obstacles: Vec::new(),
            waypoints: Vec::new(),
            start,
            end,
            algorithm: None,
        }
    }

    /// Attach obstacles to the request.
    pub fn with_obstacles(mut self, obstacles: Vec<Point>) -> Self {
        self.obstacles = obstacles;
        self
    }

    /// Attach ordered intermediate waypoints.
    pub fn with_waypoints(mut self, waypoints: Vec<Point>) -> Self {
        self.waypoints = waypoints;
        self
    }

    /// Select a specific algorithm by registered name.
    pub fn with_algorithm(mut self, name: impl Into<String>) -> Self {
        self.algorithm = Some(name.into());
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    /// Display name reported by the strategy that produced the path.
    pub algorithm: String,
    pub path: Vec<Point>,
    /// Number of edges travelled; `path.len() - 1` for non-empty paths.
    pub distance: usize,
}

impl RoutePlan {
    fn from_path(algorithm: &str, path: Vec<Point>) -> Self {
        let distance = path.len().saturating_sub(1);
        Self {
            algorithm: algorithm.to_string(),
            path,
            distance,
        }
    }
}

/// Compute one continuous path visiting start, every waypoint in order, and
/// end.
///
/// The via-point sequence is searched leg by leg with the selected strategy
/// over a freshly built [`Grid`], then stitched so shared junctions are not
/// duplicated. A leg with no path surfaces as [`Error::NoPathFound`] naming
/// the failing pair; blocked global endpoints are rejected before any search
/// runs.
pub fn plan_route(registry: &StrategyRegistry, request: &RouteRequest) -> Result<RoutePlan> {
    let dimensions = check_dimensions(request.width, request.height, DimensionLimits::default());
    if !dimensions.valid {
        return Err(Error::InvalidDimensions {
            width: request.width,
            height: request.height,
            reason: dimensions.reason.unwrap_or_default(),
        });
    }

    let strategy = registry.get(request.algorithm.as_deref())?;

    if request.start == request.end && request.waypoints.is_empty() {
        tracing::debug!(start = %request.start, "identical endpoints, skipping search");
        return Ok(RoutePlan::from_path(strategy.name(), vec![request.start]));
    }

    // Cheap rejection before any search runs.
    if request.obstacles.contains(&request.start) {
        return Err(Error::BlockedStart {
            point: request.start,
        });
    }
    if request.obstacles.contains(&request.end) {
        return Err(Error::BlockedEnd { point: request.end });
    }

    let mut sequence = Vec::with_capacity(request.waypoints.len() + 2);
    sequence.push(request.start);
    sequence.extend(request.waypoints.iter().copied());
    sequence.push(request.end);

    let path = stitch_legs(request, &sequence, strategy.as_ref())?;
    Ok(RoutePlan::from_path(strategy.name(), path))
}

/// Run each consecutive pair through the strategy and concatenate the legs,
/// dropping the first point of every leg after the first since it duplicates
/// the previous leg's junction.
fn stitch_legs(
    request: &RouteRequest,
    sequence: &[Point],
    strategy: &dyn PathfindingStrategy,
) -> Result<Vec<Point>> {
    let mut full_path: Vec<Point> = Vec::new();

    for pair in sequence.windows(2) {
        let (leg_start, leg_end) = (pair[0], pair[1]);
        let grid = Grid::new(request.width, request.height, &request.obstacles);
        let leg = strategy.find_path(&grid, leg_start, leg_end);

        if leg.is_empty() {
            tracing::warn!(from = %leg_start, to = %leg_end, "route leg has no path");
            return Err(Error::NoPathFound {
                from: leg_start,
                to: leg_end,
            });
        }

        let skip = usize::from(!full_path.is_empty());
        full_path.extend(leg.into_iter().skip(skip));

        tracing::debug!(
            from = %leg_start,
            to = %leg_end,
            stitched_length = full_path.len(),
            "route leg stitched"
        );
    }

    Ok(full_path)
}
