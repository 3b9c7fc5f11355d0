//! Integer rasterization of lines, circles and triangle outlines.
//!
//! Every rasterizer is a pure function from pixel-space parameters to an
//! eagerly built `Vec<PixelPoint>`. Nothing is drawn here; the point lists are
//! handed to a [`Renderer`](crate::render::Renderer) (usually after
//! [`Viewport::points_to_ndc`](crate::geometry::Viewport::points_to_ndc)) or
//! plotted directly with [`plot_pixels`](crate::render::plot_pixels).
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: error-accumulating integer line walk
//! - **Midpoint Circle**: octant walk with 8-way symmetry
//! - **Cohen-Sutherland**: region-code line clipping against a window
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Hearn, D., Baker, M. P. (2004). "Computer Graphics with OpenGL", ch. 6 and 8.

mod circle;
mod clip;
mod line;
mod triangle;

pub use circle::bresenham_circle;
pub use clip::{ClipWindow, RegionCode};
pub use line::{bresenham_line, bresenham_line_f32};
pub use triangle::triangle_outline;
