//! A\* shortest-path search on 2D obstacle grids.
//!
//! The search moves in the four cardinal directions with uniform step cost
//! and uses the Manhattan distance heuristic, which is admissible and
//! consistent for that movement model — returned paths always have the
//! fewest possible steps.
//!
//! Use the free function [`find_path`] for one-off queries, or keep a
//! [`PathFinder`] around to reuse its internal node arena across repeated
//! queries:
//!
//! ```
//! use routekit_core::{Grid, Point};
//! use routekit_paths::find_path;
//!
//! let grid = Grid::parse(
//!     "...\n\
//!      .#.\n\
//!      ...",
//! )
//! .unwrap();
//! let path = find_path(&grid, Point::new(0, 0), Point::new(2, 2)).unwrap();
//! assert_eq!(path.len(), 5);
//! ```
//!
//! "No path exists" is a normal outcome, reported as an empty vector;
//! [`PathError`] is reserved for invalid queries (out-of-bounds or blocked
//! endpoints).

mod astar;
mod distance;
mod error;

pub use astar::{PathFinder, find_path};
pub use distance::manhattan;
pub use error::PathError;
