//! Draw-call based software renderer.

use super::primitives::{draw_point, draw_segment, fill_triangle, ScreenVertex};
use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::{PixelPoint, Point, Viewport};
use crate::math::{Mat3, Mat4};
use log::debug;

/// Clip-space `w` at or below which a vertex counts as behind the camera.
const MIN_CLIP_W: f32 = 1e-6;

/// How consecutive vertices are assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Every vertex is a square point sprite.
    Points,
    /// Each pair of vertices is a segment; a trailing odd vertex is ignored.
    Lines,
    /// Each triple of vertices is a filled triangle.
    Triangles,
    /// Triangles `(0, i, i + 1)` sharing the first vertex.
    TriangleFan,
}

/// Per-draw vertex colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VertexColors<'a> {
    /// One color for every vertex.
    Uniform(Rgb),
    /// Flattened RGB triples, one per vertex.
    PerVertex(&'a [f32]),
}

/// The transform uniform applied to every vertex of a draw.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Transform {
    /// Positions are already in NDC.
    #[default]
    Identity,
    /// 2D homogeneous transform of `(x, y)`; `z` passes through.
    Planar(Mat3),
    /// `projection * view * model`, applied to `(x, y, z, 1)`.
    Spatial {
        /// Object-to-world.
        model: Mat4,
        /// World-to-camera.
        view: Mat4,
        /// Camera-to-clip.
        projection: Mat4,
    },
}

/// One batch of vertices drawn with a single primitive mode and transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall<'a> {
    /// Flattened positions, `components` floats per vertex.
    pub positions: &'a [f32],
    /// 2 for `(x, y)`, 3 for `(x, y, z)`.
    pub components: usize,
    /// Vertex colors.
    pub colors: VertexColors<'a>,
    /// Primitive assembly mode.
    pub primitive: Primitive,
    /// Transform uniform.
    pub transform: Transform,
    /// Side of point sprites in pixels.
    pub point_size: f32,
}

impl<'a> DrawCall<'a> {
    /// A black, untransformed draw with one-pixel points.
    #[must_use]
    pub fn new(positions: &'a [f32], components: usize, primitive: Primitive) -> Self {
        Self {
            positions,
            components,
            colors: VertexColors::Uniform(Rgb::BLACK),
            primitive,
            transform: Transform::Identity,
            point_size: 1.0,
        }
    }

    /// Use one color for every vertex.
    #[must_use]
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.colors = VertexColors::Uniform(color);
        self
    }

    /// Use flattened per-vertex RGB triples.
    #[must_use]
    pub fn with_vertex_colors(mut self, colors: &'a [f32]) -> Self {
        self.colors = VertexColors::PerVertex(colors);
        self
    }

    /// Set the transform uniform.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Set the point sprite size.
    #[must_use]
    pub fn with_point_size(mut self, size: f32) -> Self {
        self.point_size = size;
        self
    }

    /// Check the buffers against each other and return the vertex count.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] for a component count other than 2 or 3,
    ///   or a non-positive point size.
    /// - [`Error::DataLengthMismatch`] when positions are not a whole number
    ///   of vertices or per-vertex colors do not cover every vertex.
    pub fn validate(&self) -> Result<usize> {
        if !matches!(self.components, 2 | 3) {
            return Err(Error::InvalidArgument(format!(
                "vertex components must be 2 or 3, got {}",
                self.components
            )));
        }
        if !(self.point_size.is_finite() && self.point_size > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "point size must be positive, got {}",
                self.point_size
            )));
        }

        let len = self.positions.len();
        if len % self.components != 0 {
            return Err(Error::DataLengthMismatch {
                expected: len.div_ceil(self.components) * self.components,
                actual: len,
            });
        }
        let count = len / self.components;

        if let VertexColors::PerVertex(colors) = self.colors {
            if colors.len() != count * 3 {
                return Err(Error::DataLengthMismatch {
                    expected: count * 3,
                    actual: colors.len(),
                });
            }
        }
        Ok(count)
    }

    fn color(&self, index: usize) -> Rgb {
        match self.colors {
            VertexColors::Uniform(c) => c,
            VertexColors::PerVertex(colors) => {
                Rgb::from_slice(&colors[index * 3..]).unwrap_or(Rgb::BLACK)
            }
        }
    }
}

/// Software renderer that owns its render target.
#[derive(Debug, Clone)]
pub struct Renderer {
    framebuffer: Framebuffer,
    viewport: Viewport,
    depth_test: bool,
}

impl Renderer {
    /// Create a renderer with a `width × height` target and depth testing off.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either side is smaller than 2.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let viewport = Viewport::new(width, height)?;
        Ok(Self {
            framebuffer: Framebuffer::new(width, height)?,
            viewport,
            depth_test: false,
        })
    }

    /// Pixel/NDC mapping of the target.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The render target.
    #[must_use]
    pub const fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Give up the renderer and keep its target.
    #[must_use]
    pub fn into_framebuffer(self) -> Framebuffer {
        self.framebuffer
    }

    /// Whether triangles, lines and points are depth tested.
    #[must_use]
    pub const fn depth_test(&self) -> bool {
        self.depth_test
    }

    /// Enable or disable depth testing.
    pub fn set_depth_test(&mut self, enabled: bool) {
        self.depth_test = enabled;
    }

    /// Clear color and depth.
    pub fn clear(&mut self, color: Rgb) {
        self.framebuffer.clear(color.to_rgba());
        self.framebuffer.clear_depth();
    }

    /// Execute one draw call.
    ///
    /// # Errors
    ///
    /// Returns the error of [`DrawCall::validate`]; nothing is drawn then.
    pub fn draw(&mut self, call: &DrawCall<'_>) -> Result<()> {
        let count = call.validate()?;
        if count == 0 {
            return Ok(());
        }

        let mvp = match call.transform {
            Transform::Spatial {
                model,
                view,
                projection,
            } => Some(projection * view * model),
            _ => None,
        };

        let verts: Vec<Option<ScreenVertex>> = call
            .positions
            .chunks_exact(call.components)
            .enumerate()
            .map(|(i, p)| {
                let (x, y) = (p[0], p[1]);
                let z = p.get(2).copied().unwrap_or(0.0);
                let clip = match (&call.transform, mvp) {
                    (_, Some(m)) => m.transform_vec4([x, y, z, 1.0]),
                    (Transform::Planar(m), None) => {
                        let (tx, ty) = m.transform_point(x, y);
                        [tx, ty, z, 1.0]
                    }
                    _ => [x, y, z, 1.0],
                };
                self.to_screen(clip, call.color(i))
            })
            .collect();

        let skipped = match call.primitive {
            Primitive::Points => self.draw_points(&verts, call.point_size),
            Primitive::Lines => self.draw_lines(&verts),
            Primitive::Triangles => {
                let tris = (0..count / 3).map(|t| [3 * t, 3 * t + 1, 3 * t + 2]);
                self.draw_triangles(&verts, tris)
            }
            Primitive::TriangleFan => {
                let tris = (1..count.saturating_sub(1)).map(|i| [0, i, i + 1]);
                self.draw_triangles(&verts, tris)
            }
        };
        if skipped > 0 {
            debug!("skipped {skipped} {:?} primitive(s) behind the camera", call.primitive);
        }
        Ok(())
    }

    /// Draw a rasterized pixel list as point sprites, going through the same
    /// pixel → NDC → pixel path as any other vertex data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a non-positive point size.
    pub fn draw_pixels(&mut self, points: &[PixelPoint], color: Rgb, point_size: f32) -> Result<()> {
        let ndc = self.viewport.points_to_ndc(points);
        let call = DrawCall::new(&ndc, 2, Primitive::Points)
            .with_color(color)
            .with_point_size(point_size);
        self.draw(&call)
    }

    fn to_screen(&self, clip: [f32; 4], color: Rgb) -> Option<ScreenVertex> {
        let [x, y, z, w] = clip;
        if !(w > MIN_CLIP_W) || clip.iter().any(|c| !c.is_finite()) {
            return None;
        }
        let (px, py) = self.viewport.ndc_to_pixel(Point::new(x / w, y / w));
        Some(ScreenVertex::new(px, py, z / w, color))
    }

    fn draw_points(&mut self, verts: &[Option<ScreenVertex>], size: f32) -> usize {
        let mut skipped = 0;
        for v in verts {
            match v {
                Some(v) => {
                    let depth = self.depth_test.then_some(v.z);
                    draw_point(&mut self.framebuffer, v.x, v.y, size, v.color.to_rgba(), depth);
                }
                None => skipped += 1,
            }
        }
        skipped
    }

    fn draw_lines(&mut self, verts: &[Option<ScreenVertex>]) -> usize {
        let mut skipped = 0;
        for pair in verts.chunks_exact(2) {
            match (&pair[0], &pair[1]) {
                (Some(a), Some(b)) => draw_segment(&mut self.framebuffer, a, b, self.depth_test),
                _ => skipped += 1,
            }
        }
        skipped
    }

    fn draw_triangles(
        &mut self,
        verts: &[Option<ScreenVertex>],
        tris: impl Iterator<Item = [usize; 3]>,
    ) -> usize {
        let mut skipped = 0;
        for [a, b, c] in tris {
            match (verts[a], verts[b], verts[c]) {
                (Some(a), Some(b), Some(c)) => {
                    fill_triangle(&mut self.framebuffer, &[a, b, c], self.depth_test);
                }
                _ => skipped += 1,
            }
        }
        skipped
    }
}
