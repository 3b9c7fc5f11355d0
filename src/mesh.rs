//! Vertex data generators.
//!
//! Every generator returns a [`Mesh`]: flattened positions, one RGB triple
//! per vertex and the primitive mode the data is laid out for. Meshes are
//! plain data; [`Mesh::draw_call`] borrows them into a [`DrawCall`].

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::render::{DrawCall, Primitive};
use std::f32::consts::{PI, TAU};

/// Flattened vertex data with per-vertex colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    positions: Vec<f32>,
    colors: Vec<f32>,
    components: usize,
    primitive: Primitive,
}

impl Mesh {
    /// Wrap existing buffers.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `components` is not 2 or 3.
    /// - [`Error::DataLengthMismatch`] if the buffers disagree on the vertex
    ///   count.
    pub fn new(
        positions: Vec<f32>,
        colors: Vec<f32>,
        components: usize,
        primitive: Primitive,
    ) -> Result<Self> {
        if !matches!(components, 2 | 3) {
            return Err(Error::InvalidArgument(format!(
                "vertex components must be 2 or 3, got {components}"
            )));
        }
        if positions.len() % components != 0 || colors.len() != positions.len() / components * 3 {
            return Err(Error::DataLengthMismatch {
                expected: positions.len() / components * 3,
                actual: colors.len(),
            });
        }
        Ok(Self {
            positions,
            colors,
            components,
            primitive,
        })
    }

    /// Positions with one color repeated for every vertex.
    fn solid(positions: Vec<f32>, components: usize, primitive: Primitive, color: Rgb) -> Self {
        let count = positions.len() / components;
        let colors = repeat_color(color, count);
        Self {
            positions,
            colors,
            components,
            primitive,
        }
    }

    /// 2D triangle list in a single color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLengthMismatch`] if `positions` is not a whole
    /// number of triangles.
    pub fn triangles_2d(positions: Vec<f32>, color: Rgb) -> Result<Self> {
        if positions.len() % 6 != 0 {
            return Err(Error::DataLengthMismatch {
                expected: positions.len().div_ceil(6) * 6,
                actual: positions.len(),
            });
        }
        Ok(Self::solid(positions, 2, Primitive::Triangles, color))
    }

    /// Quadrilateral `a b c d` as the triangles `a b c` and `d c a`.
    #[must_use]
    pub fn quad(corners: [Point; 4], color: Rgb) -> Self {
        let [a, b, c, d] = corners;
        let positions = vec![a.x, a.y, b.x, b.y, c.x, c.y, d.x, d.y, c.x, c.y, a.x, a.y];
        Self::solid(positions, 2, Primitive::Triangles, color)
    }

    /// Triangle fan from `hub` to a regular `sides`-gon around `center`.
    ///
    /// The rim is closed: it carries `sides + 1` points, the last repeating
    /// the first. With `hub == center` this is a filled circle; an off-center
    /// hub gives a skewed blade.
    #[must_use]
    pub fn fan(hub: Point, center: Point, radius: f32, sides: u32, color: Rgb) -> Self {
        let sides = sides.max(3);
        let mut positions = Vec::with_capacity(2 * (sides as usize + 2));
        positions.extend_from_slice(&[hub.x, hub.y]);
        for i in 0..=sides {
            let angle = i as f32 * TAU / sides as f32;
            positions.push(center.x + radius * angle.cos());
            positions.push(center.y + radius * angle.sin());
        }
        Self::solid(positions, 2, Primitive::TriangleFan, color)
    }

    /// Filled circle approximated by a `sides`-gon.
    #[must_use]
    pub fn circle(center: Point, radius: f32, sides: u32, color: Rgb) -> Self {
        Self::fan(center, center, radius, sides, color)
    }

    /// Axis-aligned rectangle with its lower-left corner at `(x, y)`.
    #[must_use]
    pub fn rect(x: f32, y: f32, width: f32, height: f32, color: Rgb) -> Self {
        let (x2, y2) = (x + width, y + height);
        let positions = vec![x, y2, x2, y2, x2, y, x, y, x2, y, x, y2];
        Self::solid(positions, 2, Primitive::Triangles, color)
    }

    /// Isosceles trapezoid standing on `(x, y)` with a `base` wide bottom and
    /// a `top` wide upper edge centered over it.
    #[must_use]
    pub fn trapezoid(x: f32, y: f32, base: f32, top: f32, height: f32, color: Rgb) -> Self {
        let inset = (base - top) / 2.0;
        let (x1, x2) = (x, x + base);
        let (x3, x4) = (x + inset, x + inset + top);
        let (y1, y2) = (y, y + height);
        let positions = vec![x1, y1, x2, y1, x3, y2, x3, y2, x2, y1, x4, y2];
        Self::solid(positions, 2, Primitive::Triangles, color)
    }

    /// UV sphere of `lat × lon` quads, each quad in one random color.
    #[must_use]
    pub fn sphere(radius: f32, lat_bands: u32, lon_bands: u32, rng: &mut fastrand::Rng) -> Self {
        let lat_bands = lat_bands.max(2) as usize;
        let lon_bands = lon_bands.max(3) as usize;

        let mut grid = Vec::with_capacity((lat_bands + 1) * (lon_bands + 1));
        for lat in 0..=lat_bands {
            let theta = lat as f32 * PI / lat_bands as f32;
            for lon in 0..=lon_bands {
                let phi = lon as f32 * TAU / lon_bands as f32;
                grid.push([
                    radius * phi.cos() * theta.sin(),
                    radius * theta.cos(),
                    radius * phi.sin() * theta.sin(),
                ]);
            }
        }

        let quads = lat_bands * lon_bands;
        let mut positions = Vec::with_capacity(quads * 18);
        let mut colors = Vec::with_capacity(quads * 18);
        for lat in 0..lat_bands {
            for lon in 0..lon_bands {
                let first = lat * (lon_bands + 1) + lon;
                let second = first + lon_bands + 1;
                let (v1, v2, v3, v4) = (grid[first], grid[first + 1], grid[second], grid[second + 1]);
                for v in [v1, v3, v2, v3, v4, v2] {
                    positions.extend_from_slice(&v);
                }
                colors.extend(repeat_color(Rgb::random(rng), 6));
            }
        }

        Self {
            positions,
            colors,
            components: 3,
            primitive: Primitive::Triangles,
        }
    }

    /// Axis-aligned cube of side `size` centered at the origin.
    ///
    /// Faces are front red, back green, top blue, bottom yellow, right
    /// magenta, left cyan.
    #[must_use]
    pub fn cube(size: f32) -> Self {
        let s = size / 2.0;
        #[rustfmt::skip]
        let positions = vec![
            // front
            s, s, s,   s, -s, s,   -s, s, s,
            -s, s, s,  s, -s, s,   -s, -s, s,
            // back
            -s, s, -s, -s, -s, -s, s, s, -s,
            s, s, -s,  -s, -s, -s, s, -s, -s,
            // top
            s, s, s,   s, s, -s,   -s, s, s,
            -s, s, s,  s, s, -s,   -s, s, -s,
            // bottom
            s, -s, s,  -s, -s, s,  s, -s, -s,
            -s, -s, s, -s, -s, -s, s, -s, -s,
            // right
            s, s, -s,  s, -s, -s,  s, s, s,
            s, s, s,   s, -s, -s,  s, -s, s,
            // left
            -s, s, s,  -s, -s, s,  -s, s, -s,
            -s, s, -s, -s, -s, s,  -s, -s, -s,
        ];
        let faces = [
            Rgb::new(1.0, 0.0, 0.0),
            Rgb::new(0.0, 1.0, 0.0),
            Rgb::new(0.0, 0.0, 1.0),
            Rgb::new(1.0, 1.0, 0.0),
            Rgb::new(1.0, 0.0, 1.0),
            Rgb::new(0.0, 1.0, 1.0),
        ];
        let colors = faces.iter().flat_map(|&c| repeat_color(c, 6)).collect();
        Self {
            positions,
            colors,
            components: 3,
            primitive: Primitive::Triangles,
        }
    }

    /// Checkered square in the `y = 0` plane, `size` wide, centered at the
    /// origin and split into `divisions × divisions` cells.
    #[must_use]
    pub fn ground_plane(size: f32, divisions: u32) -> Self {
        const LIGHT: Rgb = Rgb::new(0.8, 0.8, 0.8);
        const DARK: Rgb = Rgb::new(0.3, 0.3, 0.3);

        let divisions = divisions.max(1);
        let step = size / divisions as f32;
        let origin = -size / 2.0;
        let cells = (divisions * divisions) as usize;
        let mut positions = Vec::with_capacity(cells * 18);
        let mut colors = Vec::with_capacity(cells * 18);

        for i in 0..divisions {
            for j in 0..divisions {
                let x1 = origin + i as f32 * step;
                let x2 = x1 + step;
                let z1 = origin + j as f32 * step;
                let z2 = z1 + step;
                #[rustfmt::skip]
                let cell = [
                    x1, 0.0, z1,  x2, 0.0, z1,  x1, 0.0, z2,
                    x1, 0.0, z2,  x2, 0.0, z1,  x2, 0.0, z2,
                ];
                positions.extend_from_slice(&cell);
                let color = if (i + j) % 2 == 0 { LIGHT } else { DARK };
                colors.extend(repeat_color(color, 6));
            }
        }

        Self {
            positions,
            colors,
            components: 3,
            primitive: Primitive::Triangles,
        }
    }

    /// Three coordinate axes as line segments from `from` to `to` along X, Y
    /// and Z, colored `colors[0..3]` respectively.
    #[must_use]
    pub fn axes(from: f32, to: f32, colors: [Rgb; 3]) -> Self {
        #[rustfmt::skip]
        let positions = vec![
            from, 0.0, 0.0,  to, 0.0, 0.0,
            0.0, from, 0.0,  0.0, to, 0.0,
            0.0, 0.0, from,  0.0, 0.0, to,
        ];
        let colors = colors.iter().flat_map(|&c| repeat_color(c, 2)).collect();
        Self {
            positions,
            colors,
            components: 3,
            primitive: Primitive::Lines,
        }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / self.components
    }

    /// Flattened positions.
    #[must_use]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flattened RGB triples, one per vertex.
    #[must_use]
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// Floats per vertex position.
    #[must_use]
    pub const fn components(&self) -> usize {
        self.components
    }

    /// Primitive assembly mode.
    #[must_use]
    pub const fn primitive(&self) -> Primitive {
        self.primitive
    }

    /// Borrow the mesh as an untransformed draw call with per-vertex colors.
    #[must_use]
    pub fn draw_call(&self) -> DrawCall<'_> {
        DrawCall::new(&self.positions, self.components, self.primitive)
            .with_vertex_colors(&self.colors)
    }
}

fn repeat_color(color: Rgb, count: usize) -> Vec<f32> {
    let rgb = color.to_array();
    let mut out = Vec::with_capacity(count * 3);
    for _ in 0..count {
        out.extend_from_slice(&rgb);
    }
    out
}
