//! Software rendering of rasterized primitives.
//!
//! [`Renderer`] plays the role of a minimal graphics pipeline: it takes
//! flattened vertex data with a transform uniform, projects it to clip space,
//! divides by `w`, maps NDC to pixels and rasterizes into a [`Framebuffer`].
//! The lower-level functions in this module draw directly into a
//! framebuffer in pixel coordinates.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: edges and line primitives
//! - **Midpoint Circle**: circle outlines
//! - **Edge functions**: triangle coverage with barycentric interpolation
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pineda, J. (1988). "A Parallel Algorithm for Polygon Rasterization." SIGGRAPH '88.
//!
//! [`Framebuffer`]: crate::framebuffer::Framebuffer

mod primitives;
mod renderer;

pub use primitives::{
    draw_circle_outline, draw_line, draw_point, draw_segment, fill_triangle, plot_pixels,
    ScreenVertex,
};
pub use renderer::{DrawCall, Primitive, Renderer, Transform, VertexColors};
