//! Triangle outlines built from three Bresenham edges.

use super::bresenham_line;
use crate::geometry::PixelPoint;

/// Rasterize the outline of triangle `a, b, c`.
///
/// The result is `line(a, b) ++ line(b, c) ++ line(c, a)`; each vertex appears
/// once as an edge end and once as the next edge's start.
#[must_use]
pub fn triangle_outline(a: PixelPoint, b: PixelPoint, c: PixelPoint) -> Vec<PixelPoint> {
    let mut points = bresenham_line(a, b);
    points.extend(bresenham_line(b, c));
    points.extend(bresenham_line(c, a));
    points
}
