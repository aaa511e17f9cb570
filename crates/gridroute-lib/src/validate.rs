//! Independent, stateless validation checks for map and route configurations.
//!
//! Every check is a pure function of its inputs returning a [`Validation`]
//! verdict, so checks are safe to run concurrently from any number of
//! callers and in any order.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::grid::Point;

/// Default upper bound on computed route length, in points.
pub const MAX_ROUTE_LENGTH: usize = 10_000;

/// Upper bound on edge visits during cycle detection. A defensive cap for
/// malformed or adversarial connection graphs, independent of grid size.
const TRAVERSAL_BUDGET: usize = 100_000;

/// Outcome of a single validation check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub valid: bool,
    /// Human-readable failure reason; present only on failing verdicts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Informational note attached to some passing verdicts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Validation {
    fn pass() -> Self {
        Self {
            valid: true,
            reason: None,
            note: None,
        }
    }

    fn pass_with_note(note: impl Into<String>) -> Self {
        Self {
            valid: true,
            reason: None,
            note: Some(note.into()),
        }
    }

    fn fail(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
            note: None,
        }
    }
}

/// Upper bounds applied by [`check_dimensions`].
#[derive(Debug, Clone, Copy)]
pub struct DimensionLimits {
    pub max_width: i32,
    pub max_height: i32,
}

impl Default for DimensionLimits {
    fn default() -> Self {
        Self {
            max_width: 1000,
            max_height: 1000,
        }
    }
}

/// Validate map dimensions: strictly positive and within the limits.
pub fn check_dimensions(width: i32, height: i32, limits: DimensionLimits) -> Validation {
    if width <= 0 || height <= 0 {
        return Validation::fail("map dimensions must be greater than zero");
    }
    if width > limits.max_width || height > limits.max_height {
        return Validation::fail(format!(
            "map dimensions {width}x{height} exceed the {}x{} limit",
            limits.max_width, limits.max_height
        ));
    }
    Validation::pass()
}

/// Check that neither route endpoint coincides with an obstacle.
///
/// Identical endpoints short-circuit to a passing verdict with a note, since
/// no route computation is needed at all.
pub fn check_endpoints_clear(start: Point, end: Point, obstacles: &[Point]) -> Validation {
    if start == end {
        return Validation::pass_with_note(
            "start and end points are identical; no route computation is needed",
        );
    }
    if obstacles.contains(&start) {
        return Validation::fail(format!("start point {start} is blocked by an obstacle"));
    }
    if obstacles.contains(&end) {
        return Validation::fail(format!("end point {end} is blocked by an obstacle"));
    }
    Validation::pass()
}

/// Directed edge between two opaque node identifiers.
///
/// Unrelated to the spatial grid; used only for dependency-cycle checks on
/// map connection data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    InProgress,
    Done,
}

/// Detect cycles reachable from any declared source in a connection graph.
///
/// Iterative three-colour depth-first traversal with an explicit stack: an
/// edge into a node still in progress on the stack is a back-edge and
/// signals a cycle. The edge-visit budget bounds work on runaway inputs
/// without limiting legitimate graph depth.
pub fn detect_cycles(connections: &[Connection]) -> Validation {
    if connections.is_empty() {
        return Validation::pass();
    }

    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for connection in connections {
        adjacency
            .entry(connection.source.as_str())
            .or_default()
            .push(connection.target.as_str());
    }

    let mut states: HashMap<&str, VisitState> = HashMap::new();
    let mut visits = 0usize;

    for root in adjacency.keys().copied() {
        if states.contains_key(root) {
            continue;
        }
        states.insert(root, VisitState::InProgress);
        let mut stack: Vec<(&str, usize)> = vec![(root, 0)];

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            let children = adjacency.get(node).map(Vec::as_slice).unwrap_or(&[]);

            if frame.1 >= children.len() {
                states.insert(node, VisitState::Done);
                stack.pop();
                continue;
            }

            let child = children[frame.1];
            frame.1 += 1;

            visits += 1;
            if visits > TRAVERSAL_BUDGET {
                return Validation::fail(
                    "connection graph exceeds the traversal budget for cycle detection",
                );
            }

            match states.get(child) {
                Some(VisitState::InProgress) => {
                    return Validation::fail(format!(
                        "cyclic dependency detected in the connection graph at \"{child}\""
                    ));
                }
                Some(VisitState::Done) => {}
                None => {
                    states.insert(child, VisitState::InProgress);
                    stack.push((child, 0));
                }
            }
        }
    }

    Validation::pass()
}

/// Validate that a computed path stays within a length cap.
pub fn check_route_length(path: &[Point], max_length: usize) -> Validation {
    if path.len() > max_length {
        return Validation::fail(format!(
            "route length {} exceeds the {max_length}-point limit",
            path.len()
        ));
    }
    Validation::pass_with_note("route length is within acceptable limits")
}

/// Validate that no path point coincides with an obstacle.
///
/// Used to re-validate a path computed or supplied out-of-band.
pub fn check_route_clear(path: &[Point], obstacles: &[Point]) -> Validation {
    let blocked: HashSet<Point> = obstacles.iter().copied().collect();
    for point in path {
        if blocked.contains(point) {
            return Validation::fail(format!("route passes through an obstacle at {point}"));
        }
    }
    Validation::pass_with_note("route does not intersect any obstacle")
}

/// Map configuration shape accepted by [`check_map_shape`].
///
/// Field aliases accept the spellings used by previously stored
/// configurations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(
        default,
        alias = "obstaclesConfig",
        skip_serializing_if = "Option::is_none"
    )]
    pub obstacles: Option<Vec<Point>>,
    #[serde(
        default,
        alias = "stoppingPoints",
        skip_serializing_if = "Option::is_none"
    )]
    pub waypoints: Option<Vec<Point>>,
}

/// A map configuration is well-formed only when it declares at least one of
/// obstacles or waypoints.
pub fn check_map_shape(config: &MapConfig) -> Validation {
    if config.obstacles.is_none() && config.waypoints.is_none() {
        return Validation::fail("map configuration declares neither obstacles nor waypoints");
    }
    Validation::pass()
}

/// Validate a map identifier against the UUID v4 format.
///
/// Scans iteratively, so arbitrarily long inputs are rejected without any
/// stack growth.
pub fn check_map_id(id: &str) -> Validation {
    if id.is_empty() {
        return Validation::fail("map id is required");
    }
    if !id
        .bytes()
        .all(|byte| byte.is_ascii_hexdigit() || byte == b'-')
    {
        return Validation::fail("map id contains characters outside the UUID alphabet");
    }
    if !is_uuid_v4(id) {
        return Validation::fail("map id is not a valid v4 UUID");
    }
    Validation::pass()
}

fn is_uuid_v4(id: &str) -> bool {
    let bytes = id.as_bytes();
    if bytes.len() != 36 {
        return false;
    }
    for (position, &byte) in bytes.iter().enumerate() {
        match position {
            8 | 13 | 18 | 23 => {
                if byte != b'-' {
                    return false;
                }
            }
            14 => {
                if byte != b'4' {
                    return false;
                }
            }
            19 => {
                if !matches!(byte.to_ascii_lowercase(), b'8' | b'9' | b'a' | b'b') {
                    return false;
                }
            }
            _ => {
                if !byte.is_ascii_hexdigit() {
                    return false;
                }
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection(source: &str, target: &str) -> Connection {
        Connection {
            source: source.to_string(),
            target: target.to_string(),
        }
    }

    #[test]
    fn dimensions_within_limits_pass() {
        let verdict = check_dimensions(1000, 1000, DimensionLimits::default());
        assert!(verdict.valid);
    }

    #[test]
    fn zero_and_negative_dimensions_fail() {
        assert!(!check_dimensions(0, 0, DimensionLimits::default()).valid);
        assert!(!check_dimensions(-5, 10, DimensionLimits::default()).valid);
    }

    #[test]
    fn oversized_dimensions_fail() {
        let verdict = check_dimensions(1001, 1000, DimensionLimits::default());
        assert!(!verdict.valid);
        assert!(verdict.reason.unwrap_or_default().contains("1001x1000"));
    }

    #[test]
    fn custom_dimension_limits_apply() {
        let limits = DimensionLimits {
            max_width: 10,
            max_height: 10,
        };
        assert!(check_dimensions(10, 10, limits).valid);
        assert!(!check_dimensions(11, 10, limits).valid);
    }

    #[test]
    fn identical_endpoints_pass_with_note() {
        let point = Point::new(3, 3);
        let verdict = check_endpoints_clear(point, point, &[point]);
        assert!(verdict.valid);
        assert!(verdict.note.unwrap_or_default().contains("identical"));
    }

    #[test]
    fn obstructed_start_fails() {
        let verdict =
            check_endpoints_clear(Point::new(0, 0), Point::new(2, 2), &[Point::new(0, 0)]);
        assert!(!verdict.valid);
        assert!(verdict.reason.unwrap_or_default().contains("start point"));
    }

    #[test]
    fn obstructed_end_fails() {
        let verdict =
            check_endpoints_clear(Point::new(0, 0), Point::new(2, 2), &[Point::new(2, 2)]);
        assert!(!verdict.valid);
        assert!(verdict.reason.unwrap_or_default().contains("end point"));
    }

    #[test]
    fn triangle_of_connections_has_cycle() {
        let connections = vec![
            connection("A", "B"),
            connection("B", "C"),
            connection("C", "A"),
        ];
        let verdict = detect_cycles(&connections);
        assert!(!verdict.valid);
        assert!(verdict.reason.unwrap_or_default().contains("cyclic"));
    }

    #[test]
    fn chain_of_connections_has_no_cycle() {
        let connections = vec![connection("A", "B"), connection("B", "C")];
        assert!(detect_cycles(&connections).valid);
    }

    #[test]
    fn empty_connection_list_has_no_cycle() {
        assert!(detect_cycles(&[]).valid);
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let connections = vec![connection("A", "A")];
        assert!(!detect_cycles(&connections).valid);
    }

    #[test]
    fn diamond_graph_has_no_cycle() {
        // Two paths converge on D; the second visit sees a finished node,
        // not a back-edge.
        let connections = vec![
            connection("A", "B"),
            connection("A", "C"),
            connection("B", "D"),
            connection("C", "D"),
        ];
        assert!(detect_cycles(&connections).valid);
    }

    #[test]
    fn route_length_within_default_cap_passes() {
        let path: Vec<Point> = (0..100).map(|x| Point::new(x, 0)).collect();
        assert!(check_route_length(&path, MAX_ROUTE_LENGTH).valid);
    }

    #[test]
    fn route_length_beyond_default_cap_fails() {
        let path: Vec<Point> = (0..15_000).map(|x| Point::new(x, 0)).collect();
        assert!(!check_route_length(&path, MAX_ROUTE_LENGTH).valid);
    }

    #[test]
    fn custom_route_length_cap_applies() {
        let path: Vec<Point> = (0..100).map(|x| Point::new(x, 0)).collect();
        assert!(!check_route_length(&path, 50).valid);
    }

    #[test]
    fn clear_route_passes_with_note() {
        let path = vec![Point::new(0, 0), Point::new(1, 0)];
        let verdict = check_route_clear(&path, &[Point::new(3, 3)]);
        assert!(verdict.valid);
        assert!(verdict.note.is_some());
    }

    #[test]
    fn intersecting_route_fails() {
        let path = vec![Point::new(0, 0), Point::new(1, 0)];
        let verdict = check_route_clear(&path, &[Point::new(1, 0)]);
        assert!(!verdict.valid);
        assert!(verdict.reason.unwrap_or_default().contains("(1, 0)"));
    }

    #[test]
    fn map_shape_requires_some_collection() {
        assert!(!check_map_shape(&MapConfig::default()).valid);

        let with_obstacles = MapConfig {
            obstacles: Some(Vec::new()),
            waypoints: None,
        };
        assert!(check_map_shape(&with_obstacles).valid);

        let with_waypoints = MapConfig {
            obstacles: None,
            waypoints: Some(vec![Point::new(1, 1)]),
        };
        assert!(check_map_shape(&with_waypoints).valid);
    }

    #[test]
    fn map_config_accepts_legacy_field_names() {
        let config: MapConfig = serde_json::from_str(
            r#"{"obstaclesConfig": [{"x": 1, "y": 2}], "stoppingPoints": []}"#,
        )
        .expect("legacy spellings deserialize");

        assert_eq!(config.obstacles.as_deref(), Some(&[Point::new(1, 2)][..]));
        assert_eq!(config.waypoints.as_deref(), Some(&[][..]));
    }

    #[test]
    fn valid_uuid_passes() {
        let verdict = check_map_id("9b2f8a64-3c1d-4e7a-9f30-5d2c8b1a6e4f");
        assert!(verdict.valid);
    }

    #[test]
    fn uuid_check_is_case_insensitive() {
        assert!(check_map_id("9B2F8A64-3C1D-4E7A-9F30-5D2C8B1A6E4F").valid);
    }

    #[test]
    fn malformed_ids_fail() {
        assert!(!check_map_id("").valid);
        assert!(!check_map_id("not-a-uuid").valid);
        assert!(!check_map_id("9b2f8a64-3c1d-1e7a-9f30-5d2c8b1a6e4f").valid);
        assert!(!check_map_id("9b2f8a64-3c1d-4e7a-7f30-5d2c8b1a6e4f").valid);
        assert!(!check_map_id("9b2f8a643c1d4e7a9f305d2c8b1a6e4f").valid);
    }

    #[test]
    fn very_long_id_is_rejected_without_overflow() {
        let id = "a".repeat(1_000_000);
        assert!(!check_map_id(&id).valid);
    }

    #[test]
    fn failing_verdict_serializes_reason_only() {
        let verdict = check_dimensions(0, 5, DimensionLimits::default());
        let json = serde_json::to_value(&verdict).expect("verdict serializes");

        assert_eq!(json["valid"], false);
        assert!(json.get("reason").is_some());
        assert!(json.get("note").is_none());
    }
}
