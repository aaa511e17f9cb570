use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Grid coordinate used for endpoints, waypoints, obstacles, and path steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another point.
    pub fn manhattan_distance(self, other: Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four cardinal neighbour offsets; diagonal movement is not supported.
const DIRECTIONS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Immutable snapshot of one query's traversable space.
///
/// Built once per search call from dimensions and an obstacle list; never
/// mutated or shared across queries. Obstacle membership is a hash set so
/// traversability answers in O(1) regardless of obstacle count.
#[derive(Debug, Clone)]
pub struct Grid {
    width: i32,
    height: i32,
    blocked: HashSet<Point>,
}

impl Grid {
    /// Build a grid from dimensions and an obstacle list.
    pub fn new(width: i32, height: i32, obstacles: &[Point]) -> Self {
        Self {
            width,
            height,
            blocked: obstacles.iter().copied().collect(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the point lies inside the grid extent.
    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0 && point.x < self.width && point.y >= 0 && point.y < self.height
    }

    /// Whether the point coincides with an obstacle.
    pub fn is_blocked(&self, point: Point) -> bool {
        self.blocked.contains(&point)
    }

    /// Whether the point may appear on a path.
    pub fn is_traversable(&self, point: Point) -> bool {
        self.in_bounds(point) && !self.is_blocked(point)
    }

    /// Number of cells, used to size per-search node storage.
    ///
    /// Callers must have established `width > 0 && height > 0` via a bounds
    /// check on some point before using flat indices.
    pub(crate) fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Flat node index for an in-bounds point.
    pub(crate) fn index_of(&self, point: Point) -> usize {
        point.y as usize * self.width as usize + point.x as usize
    }

    /// Inverse of [`Grid::index_of`].
    pub(crate) fn point_at(&self, index: usize) -> Point {
        let width = self.width as usize;
        Point::new((index % width) as i32, (index / width) as i32)
    }

    /// In-bounds 4-directional neighbours of a point.
    pub fn neighbours(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        DIRECTIONS
            .iter()
            .map(move |&(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|&candidate| self.in_bounds(candidate))
    }
}
