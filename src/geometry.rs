//! Geometric primitives and the pixel ↔ NDC mapping.
//!
//! Pixel space has its origin at the top-left corner with y pointing down.
//! Normalized device coordinates (NDC) cover `[-1, 1] × [-1, 1]` with the
//! origin at the center and y pointing up.

use crate::error::{Error, Result};
use trueno::Vector;

/// An integer pixel coordinate, as produced by the rasterizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PixelPoint {
    /// Column.
    pub x: i32,
    /// Row (grows downward).
    pub y: i32,
}

impl PixelPoint {
    /// Create a new pixel coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Round a fractional position (e.g. a pointer event) to the nearest pixel.
    ///
    /// Halves round away from zero.
    #[must_use]
    pub fn round(x: f32, y: f32) -> Self {
        Self::new(x.round() as i32, y.round() as i32)
    }

    /// Offset by a delta.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Chebyshev distance, the number of 8-connected steps between two pixels.
    #[must_use]
    pub fn chebyshev(self, other: Self) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Euclidean distance to another pixel.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        dx.hypot(dy)
    }
}

impl From<(i32, i32)> for PixelPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }
}

/// Canvas dimensions used to map between pixel space and NDC.
///
/// Pixel `0` maps to NDC `-1` and pixel `size - 1` maps to NDC `+1`, so the
/// mapping needs at least two pixels along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Create a viewport.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either side is smaller than 2.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width < 2 || height < 2 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Width over height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Map a pixel position to NDC.
    #[must_use]
    pub fn pixel_to_ndc(&self, x: f32, y: f32) -> Point {
        let nx = (x / self.max_x()) * 2.0 - 1.0;
        let ny = -((y / self.max_y()) * 2.0 - 1.0);
        Point::new(nx, ny)
    }

    /// Map an NDC position back to (fractional) pixel space.
    #[must_use]
    pub fn ndc_to_pixel(&self, p: Point) -> (f32, f32) {
        let x = (p.x + 1.0) / 2.0 * self.max_x();
        let y = (1.0 - p.y) / 2.0 * self.max_y();
        (x, y)
    }

    /// Map an NDC position to the nearest pixel.
    #[must_use]
    pub fn ndc_to_pixel_rounded(&self, p: Point) -> PixelPoint {
        let (x, y) = self.ndc_to_pixel(p);
        PixelPoint::round(x, y)
    }

    /// Convert a pixel list into interleaved `[x0, y0, x1, y1, ...]` NDC values,
    /// the vertex layout consumed by the renderer.
    ///
    /// Runs as a SIMD batch through trueno, falling back to the scalar mapping
    /// if a vector operation is rejected.
    #[must_use]
    pub fn points_to_ndc(&self, points: &[PixelPoint]) -> Vec<f32> {
        if points.is_empty() {
            return Vec::new();
        }

        let n = points.len();
        let xs: Vec<f32> = points.iter().map(|p| p.x as f32).collect();
        let ys: Vec<f32> = points.iter().map(|p| p.y as f32).collect();

        // nx = x * (2 / (w - 1)) - 1, ny = y * (-2 / (h - 1)) + 1
        let batch = || -> Option<(Vec<f32>, Vec<f32>)> {
            let nx = Vector::from_vec(xs.clone())
                .mul(&Vector::from_vec(vec![2.0 / self.max_x(); n]))
                .ok()?
                .add(&Vector::from_vec(vec![-1.0; n]))
                .ok()?;
            let ny = Vector::from_vec(ys.clone())
                .mul(&Vector::from_vec(vec![-2.0 / self.max_y(); n]))
                .ok()?
                .add(&Vector::from_vec(vec![1.0; n]))
                .ok()?;
            Some((nx.as_slice().to_vec(), ny.as_slice().to_vec()))
        };

        let mut out = Vec::with_capacity(n * 2);
        if let Some((nx, ny)) = batch() {
            for (x, y) in nx.iter().zip(&ny) {
                out.push(*x);
                out.push(*y);
            }
        } else {
            for p in points {
                let ndc = self.pixel_to_ndc(p.x as f32, p.y as f32);
                out.push(ndc.x);
                out.push(ndc.y);
            }
        }
        out
    }

    fn max_x(&self) -> f32 {
        (self.width - 1) as f32
    }

    fn max_y(&self) -> f32 {
        (self.height - 1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pixel_round() {
        assert_eq!(PixelPoint::round(2.4, 2.6), PixelPoint::new(2, 3));
        assert_eq!(PixelPoint::round(-0.6, 0.0), PixelPoint::new(-1, 0));
    }

    #[test]
    fn test_chebyshev() {
        assert_eq!(PixelPoint::new(0, 0).chebyshev(PixelPoint::new(3, -7)), 7);
    }

    #[test]
    fn test_viewport_rejects_degenerate() {
        assert!(Viewport::new(1, 100).is_err());
        assert!(Viewport::new(100, 0).is_err());
        assert!(Viewport::new(2, 2).is_ok());
    }

    #[test]
    fn test_pixel_to_ndc_corners() {
        let vp = Viewport::new(100, 100).unwrap();
        let top_left = vp.pixel_to_ndc(0.0, 0.0);
        assert_relative_eq!(top_left.x, -1.0);
        assert_relative_eq!(top_left.y, 1.0);

        let bottom_right = vp.pixel_to_ndc(99.0, 99.0);
        assert_relative_eq!(bottom_right.x, 1.0);
        assert_relative_eq!(bottom_right.y, -1.0);
    }

    #[test]
    fn test_ndc_round_trip() {
        let vp = Viewport::new(640, 480).unwrap();
        for &(x, y) in &[(0, 0), (639, 479), (320, 17), (5, 400)] {
            let ndc = vp.pixel_to_ndc(x as f32, y as f32);
            assert_eq!(vp.ndc_to_pixel_rounded(ndc), PixelPoint::new(x, y));
        }
    }

    #[test]
    fn test_points_to_ndc_matches_scalar() {
        let vp = Viewport::new(200, 100).unwrap();
        let pts = [PixelPoint::new(0, 0), PixelPoint::new(199, 99), PixelPoint::new(50, 25)];
        let flat = vp.points_to_ndc(&pts);
        assert_eq!(flat.len(), 6);
        for (i, p) in pts.iter().enumerate() {
            let ndc = vp.pixel_to_ndc(p.x as f32, p.y as f32);
            assert_relative_eq!(flat[i * 2], ndc.x, epsilon = 1e-5);
            assert_relative_eq!(flat[i * 2 + 1], ndc.y, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_points_to_ndc_empty() {
        let vp = Viewport::new(10, 10).unwrap();
        assert!(vp.points_to_ndc(&[]).is_empty());
    }
}
