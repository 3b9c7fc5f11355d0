//! Render target: an RGBA pixel buffer paired with a depth buffer.
//!
//! Rows are padded to a 64-byte stride so whole-row operations such as
//! [`Framebuffer::clear`] vectorize cleanly.

use crate::color::Rgba;
use crate::error::{Error, Result};
use trueno::{Backend, Vector};

/// Row alignment in bytes (one AVX-512 register).
const SIMD_ALIGNMENT: usize = 64;

/// Depth value of a cleared depth buffer (the far plane in NDC).
pub const DEPTH_CLEAR: f32 = 1.0;

/// RGBA framebuffer with a per-pixel depth buffer.
///
/// Pixel `(0, 0)` is the top-left corner. Depth values are NDC z in
/// `[-1, 1]`; smaller is closer.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    /// RGBA pixels in row-major order, each row padded to `stride` bytes.
    pixels: Vec<u8>,
    stride: usize,
    /// One depth value per pixel, row-major, unpadded.
    depth: Vec<f32>,
}

impl Framebuffer {
    /// Create a framebuffer cleared to transparent black and far depth.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row_bytes = (width as usize) * 4;
        let stride = (row_bytes + SIMD_ALIGNMENT - 1) & !(SIMD_ALIGNMENT - 1);
        let pixel_count = (width as usize) * (height as usize);

        Ok(Self {
            width,
            height,
            pixels: vec![0; stride * (height as usize)],
            stride,
            depth: vec![DEPTH_CLEAR; pixel_count],
        })
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

    /// Row width in bytes, including padding.
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Raw (padded) pixel bytes.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// One row of pixels without padding.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * self.stride;
        Some(&self.pixels[start..start + (self.width as usize) * 4])
    }

    /// Fill every pixel with `color`. The depth buffer is left alone.
    pub fn clear(&mut self, color: Rgba) {
        let px = color.to_array();
        // 16 pixels per 64-byte chunk
        let mut pattern = [0u8; SIMD_ALIGNMENT];
        for chunk in pattern.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }

        let row_bytes = (self.width as usize) * 4;
        for row in self.pixels.chunks_exact_mut(self.stride) {
            let row = &mut row[..row_bytes];
            let mut wide = row.chunks_exact_mut(SIMD_ALIGNMENT);
            for chunk in &mut wide {
                chunk.copy_from_slice(&pattern);
            }
            for chunk in wide.into_remainder().chunks_exact_mut(4) {
                chunk.copy_from_slice(&px);
            }
        }
    }

    /// Reset every depth value to [`DEPTH_CLEAR`].
    pub fn clear_depth(&mut self) {
        self.depth.fill(DEPTH_CLEAR);
    }

    /// Fill an axis-aligned rectangle given by signed corner and size.
    /// The part outside the framebuffer is skipped.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgba) {
        let x1 = x.clamp(0, self.width as i32) as usize;
        let y1 = y.clamp(0, self.height as i32) as usize;
        let x2 = (i64::from(x) + i64::from(w)).clamp(0, i64::from(self.width)) as usize;
        let y2 = (i64::from(y) + i64::from(h)).clamp(0, i64::from(self.height)) as usize;

        if x1 >= x2 || y1 >= y2 {
            return;
        }

        let px = color.to_array();
        for row_y in y1..y2 {
            let start = row_y * self.stride + x1 * 4;
            for chunk in self.pixels[start..start + (x2 - x1) * 4].chunks_exact_mut(4) {
                chunk.copy_from_slice(&px);
            }
        }
    }

    /// Color at `(x, y)`, or `None` when out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at `(x, y)`. Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Set a pixel given signed coordinates, as produced by the rasterizers.
    #[inline]
    pub fn plot(&mut self, x: i32, y: i32, color: Rgba) {
        if x >= 0 && y >= 0 {
            self.set_pixel(x as u32, y as u32, color);
        }
    }

    /// Depth at `(x, y)`, or `None` when out of bounds.
    #[must_use]
    pub fn depth_at(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.depth[self.depth_index(x, y)])
    }

    /// Write `color` at `(x, y)` if `z` is closer than the stored depth
    /// (and inside `[-1, 1]`). Returns whether the fragment was kept.
    pub fn plot_depth_tested(&mut self, x: i32, y: i32, z: f32, color: Rgba) -> bool {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return false;
        }
        if !(-1.0..=1.0).contains(&z) {
            return false;
        }
        let di = self.depth_index(x as u32, y as u32);
        if z >= self.depth[di] {
            return false;
        }
        self.depth[di] = z;
        self.set_pixel(x as u32, y as u32, color);
        true
    }

    /// Number of pixels whose color differs from `background`.
    #[must_use]
    pub fn count_differing(&self, background: Rgba) -> usize {
        let bg = background.to_array();
        (0..self.height)
            .filter_map(|y| self.row(y))
            .flat_map(|row| row.chunks_exact(4))
            .filter(|px| *px != bg)
            .count()
    }

    /// Mean RGB over the whole image, each channel in `[0, 255]`.
    ///
    /// Reduced with trueno's SIMD backend.
    #[must_use]
    pub fn mean_rgb(&self) -> [f32; 3] {
        let mut channels: [Vec<f32>; 3] = std::array::from_fn(|_| Vec::with_capacity(self.pixel_count()));
        for y in 0..self.height {
            if let Some(row) = self.row(y) {
                for px in row.chunks_exact(4) {
                    for (c, v) in channels.iter_mut().zip(px) {
                        c.push(f32::from(*v));
                    }
                }
            }
        }
        channels.map(|c| Vector::from_vec(c).mean().unwrap_or(0.0))
    }

    /// Pixels without row padding, as PNG encoders expect.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;
        if self.stride == row_bytes {
            return self.pixels.clone();
        }
        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for row in self.pixels.chunks_exact(self.stride) {
            compact.extend_from_slice(&row[..row_bytes]);
        }
        compact
    }

    /// SIMD backend trueno selected for this machine.
    #[must_use]
    pub fn backend() -> Backend {
        Backend::select_best()
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }

    #[inline]
    fn depth_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + x as usize
    }
}
