//! Midpoint (Bresenham) circle rasterization.

use crate::geometry::PixelPoint;

/// Rasterize a circle outline with the midpoint algorithm.
///
/// The radius is rounded to the nearest integer; negative or non-finite
/// radii are treated as 0. One octant is walked from `(0, R)` and each step is
/// mirrored eight ways, in the order `(x, y) (-x, y) (x, -y) (-x, -y)
/// (y, x) (-y, x) (y, -x) (-y, -x)` relative to `center`. Points on the octant
/// boundaries are emitted more than once, so a radius of 0 yields the center
/// eight times.
#[must_use]
pub fn bresenham_circle(center: PixelPoint, radius: f32) -> Vec<PixelPoint> {
    let r = if radius.is_finite() { radius.round().max(0.0) as i32 } else { 0 };

    let mut points = Vec::with_capacity(8 * (r as usize + 1));
    let mut x = 0;
    let mut y = r;
    let mut p = 1 - r;

    plot8(&mut points, center, x, y);
    while x < y {
        x += 1;
        if p < 0 {
            p += 2 * x + 1;
        } else {
            y -= 1;
            p += 2 * x + 1 - 2 * y;
        }
        plot8(&mut points, center, x, y);
    }

    points
}

#[inline]
fn plot8(out: &mut Vec<PixelPoint>, c: PixelPoint, x: i32, y: i32) {
    out.extend_from_slice(&[
        c.offset(x, y),
        c.offset(-x, y),
        c.offset(x, -y),
        c.offset(-x, -y),
        c.offset(y, x),
        c.offset(-y, x),
        c.offset(y, -x),
        c.offset(-y, -x),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_radius_five_reference_set() {
        let circle = bresenham_circle(PixelPoint::new(0, 0), 5.0);
        assert_eq!(circle.len(), 40);

        let distinct: BTreeSet<_> = circle.into_iter().collect();
        let mut expected = BTreeSet::new();
        for &(a, b) in &[(0, 5), (1, 5), (2, 5), (3, 4)] {
            for &(sx, sy) in &[(1, 1), (-1, 1), (1, -1), (-1, -1)] {
                expected.insert(PixelPoint::new(sx * a, sy * b));
                expected.insert(PixelPoint::new(sx * b, sy * a));
            }
        }
        assert_eq!(expected.len(), 28);
        assert_eq!(distinct, expected);
    }

    #[test]
    fn test_first_octant_order() {
        let circle = bresenham_circle(PixelPoint::new(10, 20), 5.0);
        let firsts: Vec<_> = circle.chunks(8).map(|c| c[0]).collect();
        assert_eq!(
            firsts,
            vec![
                PixelPoint::new(10, 25),
                PixelPoint::new(11, 25),
                PixelPoint::new(12, 25),
                PixelPoint::new(13, 24),
                PixelPoint::new(14, 23),
            ]
        );
        assert_eq!(&circle[..4], &[
            PixelPoint::new(10, 25),
            PixelPoint::new(10, 25),
            PixelPoint::new(10, 15),
            PixelPoint::new(10, 15),
        ]);
    }

    #[test]
    fn test_zero_radius_repeats_center() {
        let c = PixelPoint::new(4, -2);
        assert_eq!(bresenham_circle(c, 0.0), vec![c; 8]);
    }

    #[test]
    fn test_radius_is_rounded_and_clamped() {
        let c = PixelPoint::new(0, 0);
        assert_eq!(bresenham_circle(c, 4.6), bresenham_circle(c, 5.0));
        assert_eq!(bresenham_circle(c, -3.0), vec![c; 8]);
        assert_eq!(bresenham_circle(c, f32::NAN), vec![c; 8]);
        assert_eq!(bresenham_circle(c, f32::INFINITY), vec![c; 8]);
    }

    #[test]
    fn test_points_stay_near_radius() {
        let c = PixelPoint::new(-7, 3);
        for r in [1, 2, 9, 30] {
            for p in bresenham_circle(c, r as f32) {
                let d = p.distance(c).round() as i32;
                assert!((r - 1..=r + 1).contains(&d), "r={r} p={p:?}");
            }
        }
    }
}
