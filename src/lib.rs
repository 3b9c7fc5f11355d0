//! # Trueno-Raster
//!
//! Integer rasterization, matrix and camera math, and a small software
//! renderer for classic raster-graphics exercises.
//!
//! The crate is layered bottom-up:
//!
//! - [`raster`]: Bresenham lines, midpoint circles, triangle outlines and
//!   Cohen-Sutherland clipping as pure functions returning pixel lists.
//! - [`math`] and [`camera`]: `Vec3`, `Mat3`, `Mat4`, a matrix stack, and
//!   cameras that produce view and projection matrices.
//! - [`render`]: a [`Renderer`](render::Renderer) that takes vertex
//!   buffers in NDC, applies a transform and fills a
//!   [`Framebuffer`](framebuffer::Framebuffer).
//! - [`scenes`]: animated demos built from [`mesh`] data, stepped with
//!   [`animation`] and driven by [`interaction`] tools.
//!
//! ## Quick Start
//!
//! ```
//! use trueno_raster::prelude::*;
//!
//! let line = bresenham_line(PixelPoint::new(0, 0), PixelPoint::new(9, 4));
//! let mut renderer = Renderer::new(16, 16).unwrap();
//! renderer.clear(Rgb::WHITE);
//! renderer.draw_pixels(&line, Rgb::BLACK, 1.0).unwrap();
//! assert_eq!(renderer.framebuffer().get_pixel(9, 4), Some(Rgba::BLACK));
//! ```
//!
//! ## Feature Flags
//!
//! - `wasm`: browser bindings for the rasterizers and scene rendering
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pineda, J. (1988). "A Parallel Algorithm for Polygon Rasterization." SIGGRAPH '88.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and the key-selectable palette.
pub mod color;

/// RGBA framebuffer with a depth buffer.
pub mod framebuffer;

/// Pixel and NDC points, lines and the viewport mapping.
pub mod geometry;

/// Vectors, matrices and the matrix stack.
pub mod math;

/// Integer rasterizers and line clipping.
pub mod raster;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Look-at, orbit and first-person cameras plus projections.
pub mod camera;

/// Software renderer for vertex buffers.
pub mod render;

/// Reusable vertex data (shapes, sphere, cube, floor).
pub mod mesh;

/// Frame output (PNG, terminal).
pub mod output;

// ============================================================================
// Demo Modules
// ============================================================================

/// Per-frame animation state.
pub mod animation;

/// Pointer and key driven drawing tools.
pub mod interaction;

/// Animated demo scenes.
pub mod scenes;

/// YAML configuration.
pub mod config;

/// WebAssembly bindings for browser usage.
#[cfg(feature = "wasm")]
#[cfg_attr(docsrs, doc(cfg(feature = "wasm")))]
pub mod wasm;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions.
///
/// ```
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::animation::{Animation, Ticker};
    pub use crate::camera::{FlyCamera, LookAtCamera, OrbitCamera, Projection};
    pub use crate::color::{Rgb, Rgba};
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Line, PixelPoint, Point, Viewport};
    pub use crate::interaction::{InputEvent, Tool, ToolOutput};
    pub use crate::math::{Mat3, Mat4, MatrixStack, Vec3};
    pub use crate::mesh::Mesh;
    pub use crate::raster::{bresenham_circle, bresenham_line, triangle_outline, ClipWindow};
    pub use crate::render::{DrawCall, Primitive, Renderer, Transform};
    pub use crate::scenes::Scene;
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
