use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::grid::{Grid, Point};

/// Sentinel cost for cells the search has not reached yet.
const UNREACHABLE: u32 = u32::MAX;

/// Sentinel predecessor index marking the search origin.
const NO_PARENT: usize = usize::MAX;

/// Find a shortest path from `start` to `goal` using A* with a Manhattan
/// heuristic.
///
/// Returns the full path including both endpoints, ordered start to goal.
/// Returns an empty path when either endpoint lies outside the grid, when an
/// endpoint is blocked, or when the goal is unreachable; none of these raise
/// an error. `start == goal` yields a single-point path.
///
/// The Manhattan heuristic is admissible and consistent on a 4-directional
/// unit-cost grid, so the first time the goal is popped its cost is optimal.
pub fn find_path_astar(grid: &Grid, start: Point, goal: Point) -> Vec<Point> {
    if !endpoints_usable(grid, start, goal) {
        return Vec::new();
    }
    if start == goal {
        return vec![start];
    }

    let cells = grid.cell_count();
    let mut cost = vec![UNREACHABLE; cells];
    let mut parent = vec![NO_PARENT; cells];
    let mut closed = vec![false; cells];
    let mut open = BinaryHeap::new();

    let start_index = grid.index_of(start);
    let goal_index = grid.index_of(goal);
    cost[start_index] = 0;
    open.push(AStarEntry::new(start_index, 0, start.manhattan_distance(goal)));

    while let Some(entry) = open.pop() {
        // Skip stale entries superseded by a cheaper relaxation.
        if closed[entry.index] {
            continue;
        }
        if entry.index == goal_index {
            return reconstruct_path(grid, &parent, goal_index);
        }
        closed[entry.index] = true;

        let current = grid.point_at(entry.index);
        let current_cost = cost[entry.index];

        for neighbour in grid.neighbours(current) {
            if grid.is_blocked(neighbour) {
                continue;
            }
            let neighbour_index = grid.index_of(neighbour);
            if closed[neighbour_index] {
                continue;
            }

            let tentative = current_cost + 1;
            if tentative >= cost[neighbour_index] {
                continue;
            }

            cost[neighbour_index] = tentative;
            parent[neighbour_index] = entry.index;
            open.push(AStarEntry::new(
                neighbour_index,
                tentative,
                neighbour.manhattan_distance(goal),
            ));
        }
    }

    tracing::debug!(%start, %goal, "open set exhausted without reaching goal");
    Vec::new()
}

/// Find a shortest path from `start` to `goal` using Dijkstra's algorithm.
///
/// Identical sentinel semantics to [`find_path_astar`]. Every cell starts at
/// an unreachable distance (the flat array stands in for the classic
/// all-nodes-at-infinity unvisited set) and the search stops as soon as the
/// goal is popped. On the same unweighted grid both algorithms return paths
/// of equal length.
pub fn find_path_dijkstra(grid: &Grid, start: Point, goal: Point) -> Vec<Point> {
    if !endpoints_usable(grid, start, goal) {
        return Vec::new();
    }
    if start == goal {
        return vec![start];
    }

    let cells = grid.cell_count();
    let mut distance = vec![UNREACHABLE; cells];
    let mut parent = vec![NO_PARENT; cells];
    let mut visited = vec![false; cells];
    let mut queue = BinaryHeap::new();

    let start_index = grid.index_of(start);
    let goal_index = grid.index_of(goal);
    distance[start_index] = 0;
    queue.push(QueueEntry::new(start_index, 0));

    while let Some(entry) = queue.pop() {
        if visited[entry.index] {
            continue;
        }
        if entry.index == goal_index {
            return reconstruct_path(grid, &parent, goal_index);
        }
        visited[entry.index] = true;

        let current = grid.point_at(entry.index);
        let current_distance = distance[entry.index];

        for neighbour in grid.neighbours(current) {
            if grid.is_blocked(neighbour) {
                continue;
            }
            let neighbour_index = grid.index_of(neighbour);
            if visited[neighbour_index] {
                continue;
            }

            let relaxed = current_distance + 1;
            if relaxed < distance[neighbour_index] {
                distance[neighbour_index] = relaxed;
                parent[neighbour_index] = entry.index;
                queue.push(QueueEntry::new(neighbour_index, relaxed));
            }
        }
    }

    tracing::debug!(%start, %goal, "frontier exhausted without reaching goal");
    Vec::new()
}

/// A path may not start or end outside the grid or on an obstacle.
fn endpoints_usable(grid: &Grid, start: Point, goal: Point) -> bool {
    grid.is_traversable(start) && grid.is_traversable(goal)
}

/// Walk predecessor indices back from the goal and reverse into a
/// start-to-goal path.
fn reconstruct_path(grid: &Grid, parent: &[usize], goal_index: usize) -> Vec<Point> {
    let mut path = Vec::new();
    let mut index = goal_index;
    while index != NO_PARENT {
        path.push(grid.point_at(index));
        index = parent[index];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct AStarEntry {
    index: usize,
    estimate: u32,
}

impl AStarEntry {
    fn new(index: usize, cost: u32, heuristic: u32) -> Self {
        Self {
            index,
            estimate: cost + heuristic,
        }
    }
}

impl Ord for AStarEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by estimate; ties
        // break on cell index, which keeps expansion order deterministic.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for AStarEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    index: usize,
    distance: u32,
}

impl QueueEntry {
    fn new(index: usize, distance: u32) -> Self {
        Self { index, distance }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
