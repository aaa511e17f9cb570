use thiserror::Error;

use crate::grid::Point;

/// Convenient result alias for the gridroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// "No path" outcomes at the search layer are signalled by an empty path
/// rather than an error; the variants here cover caller and configuration
/// mistakes that are detectable up front, plus route legs that fail outright.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a requested algorithm name is not registered.
    #[error("unknown pathfinding strategy \"{name}\"; available: {}", list_names(.available))]
    UnknownStrategy { name: String, available: Vec<String> },

    /// Raised when map dimensions fail validation before routing.
    #[error("invalid map dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        width: i32,
        height: i32,
        reason: String,
    },

    /// Raised when the route start coincides with an obstacle.
    #[error("start point {point} coincides with an obstacle")]
    BlockedStart { point: Point },

    /// Raised when the route end coincides with an obstacle.
    #[error("end point {point} coincides with an obstacle")]
    BlockedEnd { point: Point },

    /// Raised when no path exists for one leg of a route.
    #[error("no path found between {from} and {to}")]
    NoPathFound { from: Point, to: Point },
}

fn list_names(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
