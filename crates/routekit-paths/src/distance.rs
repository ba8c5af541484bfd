use routekit_core::Point;

/// Manhattan (L1) distance between two points.
///
/// This is the exact minimal step count between two cells on an
/// obstacle-free grid with 4-directional movement, and therefore an
/// admissible heuristic for the search.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
