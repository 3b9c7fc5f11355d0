//! Bresenham line rasterization.

use crate::geometry::PixelPoint;

/// Rasterize the segment `from → to` with Bresenham's algorithm.
///
/// The first point is `from` and the last is `to`; consecutive points are
/// 8-connected unit steps. Equal endpoints yield a single point. Only integer
/// arithmetic is used; the error term is kept in `i64` so any pair of `i32`
/// endpoints is handled without overflow.
///
/// ```
/// use trueno_raster::geometry::PixelPoint;
/// use trueno_raster::raster::bresenham_line;
///
/// let pts = bresenham_line(PixelPoint::new(0, 0), PixelPoint::new(3, 1));
/// assert_eq!(pts, vec![
///     PixelPoint::new(0, 0),
///     PixelPoint::new(1, 0),
///     PixelPoint::new(2, 1),
///     PixelPoint::new(3, 1),
/// ]);
/// ```
#[must_use]
pub fn bresenham_line(from: PixelPoint, to: PixelPoint) -> Vec<PixelPoint> {
    let dx = (i64::from(to.x) - i64::from(from.x)).abs();
    let dy = (i64::from(to.y) - i64::from(from.y)).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx - dy;

    let mut points = Vec::with_capacity(usize::try_from(dx.max(dy) + 1).unwrap_or(0));
    let (mut x, mut y) = (from.x, from.y);

    loop {
        points.push(PixelPoint::new(x, y));

        if x == to.x && y == to.y {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    points
}

/// Rasterize a segment given in fractional pixel coordinates, such as pointer
/// positions. Endpoints are rounded to the nearest pixel first.
#[must_use]
pub fn bresenham_line_f32(x0: f32, y0: f32, x1: f32, y1: f32) -> Vec<PixelPoint> {
    bresenham_line(PixelPoint::round(x0, y0), PixelPoint::round(x1, y1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(i32, i32)]) -> Vec<PixelPoint> {
        coords.iter().copied().map(PixelPoint::from).collect()
    }

    #[test]
    fn test_shallow_line() {
        let line = bresenham_line(PixelPoint::new(0, 0), PixelPoint::new(3, 1));
        assert_eq!(line, pts(&[(0, 0), (1, 0), (2, 1), (3, 1)]));
    }

    #[test]
    fn test_single_point() {
        let p = PixelPoint::new(7, -3);
        assert_eq!(bresenham_line(p, p), vec![p]);
    }

    #[test]
    fn test_horizontal_and_vertical() {
        let h = bresenham_line(PixelPoint::new(5, 2), PixelPoint::new(1, 2));
        assert_eq!(h, pts(&[(5, 2), (4, 2), (3, 2), (2, 2), (1, 2)]));

        let v = bresenham_line(PixelPoint::new(0, 0), PixelPoint::new(0, 3));
        assert_eq!(v, pts(&[(0, 0), (0, 1), (0, 2), (0, 3)]));
    }

    #[test]
    fn test_diagonal_steps_both_axes() {
        let d = bresenham_line(PixelPoint::new(0, 0), PixelPoint::new(-3, 3));
        assert_eq!(d, pts(&[(0, 0), (-1, 1), (-2, 2), (-3, 3)]));
    }

    #[test]
    fn test_steep_line_length() {
        let line = bresenham_line(PixelPoint::new(2, 1), PixelPoint::new(4, 11));
        assert_eq!(line.len(), 11);
        assert_eq!(line.first(), Some(&PixelPoint::new(2, 1)));
        assert_eq!(line.last(), Some(&PixelPoint::new(4, 11)));
    }

    #[test]
    fn test_steps_are_eight_connected() {
        let line = bresenham_line(PixelPoint::new(-20, 7), PixelPoint::new(33, -12));
        for w in line.windows(2) {
            assert_eq!(w[0].chebyshev(w[1]), 1);
        }
    }

    #[test]
    fn test_endpoints_at_integer_limits() {
        let from = PixelPoint::new(i32::MAX - 3, i32::MIN);
        let to = PixelPoint::new(i32::MAX, i32::MIN + 1);
        let line = bresenham_line(from, to);
        assert_eq!(line.len(), 4);
        assert_eq!(line.first(), Some(&from));
        assert_eq!(line.last(), Some(&to));

        let back = bresenham_line(
            PixelPoint::new(i32::MIN, i32::MAX),
            PixelPoint::new(i32::MIN + 2, i32::MAX - 2),
        );
        assert_eq!(
            back,
            pts(&[
                (i32::MIN, i32::MAX),
                (i32::MIN + 1, i32::MAX - 1),
                (i32::MIN + 2, i32::MAX - 2),
            ])
        );
    }

    #[test]
    fn test_f32_endpoints_are_rounded() {
        let line = bresenham_line_f32(0.4, 0.2, 2.6, 0.49);
        assert_eq!(line, pts(&[(0, 0), (1, 0), (2, 0), (3, 0)]));
    }
}
