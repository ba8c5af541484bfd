//! **routekit-core** — foundational types for the *routekit* workspace.
//!
//! This crate provides the geometry primitives ([`Point`], [`Range`]) and the
//! obstacle map ([`Grid`], [`Tile`]) that the pathfinding crate operates on.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range};
pub use grid::{Grid, GridError, Tile};
