//! Primitive rendering functions.
//!
//! Everything here works in pixel coordinates (origin top-left, y down) and
//! silently skips pixels outside the framebuffer.

use crate::color::{Rgb, Rgba};
use crate::framebuffer::Framebuffer;
use crate::geometry::{Line, PixelPoint, Point};
use crate::raster::{bresenham_circle, bresenham_line, ClipWindow};

/// A projected vertex ready for rasterization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenVertex {
    /// Horizontal pixel position (fractional).
    pub x: f32,
    /// Vertical pixel position (fractional, grows downward).
    pub y: f32,
    /// NDC depth in `[-1, 1]`.
    pub z: f32,
    /// Vertex color.
    pub color: Rgb,
}

impl ScreenVertex {
    /// Create a vertex.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, color: Rgb) -> Self {
        Self { x, y, z, color }
    }
}

// ============================================================================
// Pixel lists
// ============================================================================

/// Plot every point of a rasterized pixel list.
pub fn plot_pixels(fb: &mut Framebuffer, points: &[PixelPoint], color: Rgba) {
    for p in points {
        fb.plot(p.x, p.y, color);
    }
}

/// Draw a one-pixel line with Bresenham's algorithm.
pub fn draw_line(fb: &mut Framebuffer, from: PixelPoint, to: PixelPoint, color: Rgba) {
    plot_pixels(fb, &bresenham_line(from, to), color);
}

/// Draw a circle outline with the midpoint algorithm.
pub fn draw_circle_outline(fb: &mut Framebuffer, center: PixelPoint, radius: f32, color: Rgba) {
    plot_pixels(fb, &bresenham_circle(center, radius), color);
}

// ============================================================================
// Points
// ============================================================================

/// Draw a square point sprite of side `size` centered on `(x, y)`.
///
/// Sizes below one pixel are drawn as a single pixel, and the side never
/// exceeds twice the larger framebuffer dimension. With `depth` set, each
/// covered pixel is depth tested against the framebuffer.
pub fn draw_point(fb: &mut Framebuffer, x: f32, y: f32, size: f32, color: Rgba, depth: Option<f32>) {
    let max_side = fb.width().max(fb.height()).saturating_mul(2);
    let side = (size.round().max(1.0) as u32).min(max_side);
    let half = (side / 2) as i32;
    let left = (x.round() as i32).saturating_sub(half);
    let top = (y.round() as i32).saturating_sub(half);

    match depth {
        None => fb.fill_rect(left, top, side, side, color),
        Some(z) => {
            let x0 = left.max(0);
            let y0 = top.max(0);
            let x1 = left.saturating_add(side as i32).min(fb.width() as i32);
            let y1 = top.saturating_add(side as i32).min(fb.height() as i32);
            for py in y0..y1 {
                for px in x0..x1 {
                    fb.plot_depth_tested(px, py, z, color);
                }
            }
        }
    }
}

// ============================================================================
// Lines
// ============================================================================

/// Parameter of `p` along `a → b`, measured on the dominant axis.
fn segment_param(a: &ScreenVertex, dx: f32, dy: f32, p: Point) -> f32 {
    let t = if dx.abs() >= dy.abs() {
        if dx == 0.0 {
            0.0
        } else {
            (p.x - a.x) / dx
        }
    } else {
        (p.y - a.y) / dy
    };
    t.clamp(0.0, 1.0)
}

/// Draw a segment between two projected vertices, interpolating color and
/// depth along the Bresenham walk.
///
/// The segment is first clipped to the framebuffer grown by one pixel on
/// every side, so far off-screen endpoints cost no more than the visible
/// part. Segments entirely outside, or whose extent is not finite, draw
/// nothing.
pub fn draw_segment(fb: &mut Framebuffer, a: &ScreenVertex, b: &ScreenVertex, depth_test: bool) {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    if !(dx.is_finite() && dy.is_finite()) {
        return;
    }

    let window = ClipWindow::new(-1.0, -1.0, fb.width() as f32, fb.height() as f32);
    let Some(visible) = window.clip_line(Line::from_coords(a.x, a.y, b.x, b.y)) else {
        return;
    };
    let t0 = segment_param(a, dx, dy, visible.start);
    let t1 = segment_param(a, dx, dy, visible.end);

    let pixels = bresenham_line(
        PixelPoint::round(visible.start.x, visible.start.y),
        PixelPoint::round(visible.end.x, visible.end.y),
    );
    let last = (pixels.len().max(2) - 1) as f32;

    for (i, p) in pixels.iter().enumerate() {
        let t = t0 + (t1 - t0) * (i as f32 / last);
        let color = Rgb::blend3(a.color, b.color, Rgb::BLACK, [1.0 - t, t, 0.0]).to_rgba();
        if depth_test {
            let z = a.z + (b.z - a.z) * t;
            fb.plot_depth_tested(p.x, p.y, z, color);
        } else {
            fb.plot(p.x, p.y, color);
        }
    }
}

// ============================================================================
// Triangles
// ============================================================================

/// Lowest barycentric weight still counted as inside; absorbs rounding on
/// shared edges.
const INSIDE_EPS: f32 = -1e-5;

/// Twice the signed area of triangle `a, b, p`.
#[inline]
fn edge(ax: f32, ay: f32, bx: f32, by: f32, px: f32, py: f32) -> f32 {
    (bx - ax) * (py - ay) - (by - ay) * (px - ax)
}

/// Fill a triangle, interpolating color (and depth) with barycentric weights.
///
/// Pixels are sampled at integer coordinates, which are pixel centers in
/// this crate's NDC mapping. Either winding is accepted; degenerate
/// triangles draw nothing.
pub fn fill_triangle(fb: &mut Framebuffer, v: &[ScreenVertex; 3], depth_test: bool) {
    let [v0, v1, v2] = v;
    let area = edge(v0.x, v0.y, v1.x, v1.y, v2.x, v2.y);
    if !area.is_finite() || area.abs() < f32::EPSILON {
        return;
    }

    let max_x = fb.width() as f32 - 1.0;
    let max_y = fb.height() as f32 - 1.0;
    let x0 = v0.x.min(v1.x).min(v2.x).floor().max(0.0) as i32;
    let x1 = v0.x.max(v1.x).max(v2.x).ceil().min(max_x) as i32;
    let y0 = v0.y.min(v1.y).min(v2.y).floor().max(0.0) as i32;
    let y1 = v0.y.max(v1.y).max(v2.y).ceil().min(max_y) as i32;

    for py in y0..=y1 {
        for px in x0..=x1 {
            let (fx, fy) = (px as f32, py as f32);
            let w0 = edge(v1.x, v1.y, v2.x, v2.y, fx, fy) / area;
            let w1 = edge(v2.x, v2.y, v0.x, v0.y, fx, fy) / area;
            let w2 = edge(v0.x, v0.y, v1.x, v1.y, fx, fy) / area;
            if w0 < INSIDE_EPS || w1 < INSIDE_EPS || w2 < INSIDE_EPS {
                continue;
            }

            let color = Rgb::blend3(v0.color, v1.color, v2.color, [w0, w1, w2]).to_rgba();
            if depth_test {
                let z = w0 * v0.z + w1 * v1.z + w2 * v2.z;
                fb.plot_depth_tested(px, py, z, color);
            } else {
                fb.plot(px, py, color);
            }
        }
    }
}
