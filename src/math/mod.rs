//! Linear algebra for 2D and 3D transforms.
//!
//! All matrices use **column-major storage and column vectors**: a point is
//! transformed as `M * v`, and `a.multiply(&b)` applies `b` first. The
//! post-composing helpers (`translate`, `rotate`, `scale`) return
//! `self * T`, i.e. the new transform acts in the object's local frame. A
//! pivot rotation is therefore written as
//!
//! ```
//! use trueno_raster::math::Mat3;
//!
//! let arm = Mat3::identity()
//!     .translate(0.5, 0.0)
//!     .rotate(0.3)
//!     .translate(-0.5, 0.0);
//! let (x, y) = arm.transform_point(0.5, 0.0);
//! assert!((x - 0.5).abs() < 1e-6 && y.abs() < 1e-6);
//! ```
//!
//! Every operation returns a new matrix; nothing is mutated in place.

mod mat3;
mod mat4;
mod stack;
mod vec3;

pub use mat3::Mat3;
pub use mat4::Mat4;
pub use stack::MatrixStack;
pub use vec3::Vec3;

/// Relative tolerance below which a determinant is treated as zero.
///
/// `|det|` never exceeds the product of the column lengths (Hadamard's
/// bound), so a matrix is singular when
/// `|det| <= SINGULAR_EPSILON * prod(|column_j|)`.
pub const SINGULAR_EPSILON: f32 = 1e-6;

/// Convert degrees to radians.
#[must_use]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Convert radians to degrees.
#[must_use]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians.to_degrees()
}

/// True if `det` is negligible next to the Hadamard bound of the
/// column-major `order × order` matrix in `elements`.
///
/// Scaling one column scales both sides equally, so a large translation
/// column does not make an otherwise well-conditioned matrix singular.
pub(crate) fn is_singular(det: f32, elements: &[f32], order: usize) -> bool {
    let bound: f32 = elements
        .chunks_exact(order)
        .map(|col| col.iter().map(|e| e * e).sum::<f32>().sqrt())
        .product();
    !det.is_finite() || !(bound > 0.0) || det.abs() <= SINGULAR_EPSILON * bound
}
