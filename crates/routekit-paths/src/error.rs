use std::fmt;

use routekit_core::Point;

/// Errors for invalid path queries.
///
/// Raised before any search work begins; a failed query exposes no partial
/// result. An unreachable goal is *not* an error — [`find_path`] reports it
/// as an empty path.
///
/// [`find_path`]: crate::find_path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathError {
    /// An endpoint lies outside the grid bounds.
    OutOfBounds(Point),
    /// An endpoint lies on a blocked tile.
    Blocked(Point),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "endpoint {p} is out of grid bounds"),
            Self::Blocked(p) => write!(f, "endpoint {p} is on a blocked tile"),
        }
    }
}

impl std::error::Error for PathError {}
