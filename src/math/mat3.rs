//! 3x3 matrix for 2D homogeneous transforms.

use super::is_singular;
use crate::error::{Error, Result};

/// A 3x3 matrix stored in column-major order.
///
/// Used for 2D affine transforms of homogeneous points `(x, y, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    /// Matrix elements in column-major order.
    /// `[m00, m10, m20, m01, m11, m21, m02, m12, m22]`
    pub elements: [f32; 9],
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat3 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        elements: [
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        ],
    };

    /// Create from a column-major array.
    #[must_use]
    pub const fn from_cols_array(elements: [f32; 9]) -> Self {
        Self { elements }
    }

    /// Identity matrix.
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Translation by `(tx, ty)`.
    #[must_use]
    pub const fn from_translation(tx: f32, ty: f32) -> Self {
        Self {
            elements: [
                1.0, 0.0, 0.0,
                0.0, 1.0, 0.0,
                tx, ty, 1.0,
            ],
        }
    }

    /// Counter-clockwise rotation by `theta` radians about the origin.
    #[must_use]
    pub fn from_rotation(theta: f32) -> Self {
        let (s, c) = theta.sin_cos();
        Self {
            elements: [
                c, s, 0.0,
                -s, c, 0.0,
                0.0, 0.0, 1.0,
            ],
        }
    }

    /// Non-uniform scale about the origin.
    #[must_use]
    pub const fn from_scale(sx: f32, sy: f32) -> Self {
        Self {
            elements: [
                sx, 0.0, 0.0,
                0.0, sy, 0.0,
                0.0, 0.0, 1.0,
            ],
        }
    }

    /// Matrix product `self * other`; `other` is applied first.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let a = &self.elements;
        let b = &other.elements;
        let mut out = [0.0; 9];
        for col in 0..3 {
            for row in 0..3 {
                out[col * 3 + row] = a[row] * b[col * 3]
                    + a[3 + row] * b[col * 3 + 1]
                    + a[6 + row] * b[col * 3 + 2];
            }
        }
        Self { elements: out }
    }

    /// Post-compose a translation (`self * T`).
    #[must_use]
    pub fn translate(&self, tx: f32, ty: f32) -> Self {
        self.multiply(&Self::from_translation(tx, ty))
    }

    /// Post-compose a rotation (`self * R`).
    #[must_use]
    pub fn rotate(&self, theta: f32) -> Self {
        self.multiply(&Self::from_rotation(theta))
    }

    /// Post-compose a scale (`self * S`).
    #[must_use]
    pub fn scale(&self, sx: f32, sy: f32) -> Self {
        self.multiply(&Self::from_scale(sx, sy))
    }

    /// Rotation about an arbitrary pivot: translate to the pivot, rotate,
    /// translate back.
    #[must_use]
    pub fn rotate_about(&self, theta: f32, px: f32, py: f32) -> Self {
        self.translate(px, py).rotate(theta).translate(-px, -py)
    }

    /// Determinant.
    #[must_use]
    pub fn determinant(&self) -> f32 {
        let e = &self.elements;
        let (a, b, c) = (e[0], e[3], e[6]);
        let (d, f, g) = (e[1], e[4], e[7]);
        let (h, i, j) = (e[2], e[5], e[8]);
        a * (f * j - g * i) - b * (d * j - g * h) + c * (d * i - f * h)
    }

    /// Inverse via the adjugate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`] if the determinant is negligible.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if is_singular(det, &self.elements, 3) {
            return Err(Error::SingularMatrix { determinant: det });
        }

        let e = &self.elements;
        let (a, b, c) = (e[0], e[3], e[6]);
        let (d, f, g) = (e[1], e[4], e[7]);
        let (h, i, j) = (e[2], e[5], e[8]);
        let inv = 1.0 / det;

        // Row-major adjugate, written back column-major.
        let r = [
            [f * j - g * i, c * i - b * j, b * g - c * f],
            [g * h - d * j, a * j - c * h, c * d - a * g],
            [d * i - f * h, b * h - a * i, a * f - b * d],
        ];
        let mut out = [0.0; 9];
        for (row, values) in r.iter().enumerate() {
            for (col, v) in values.iter().enumerate() {
                out[col * 3 + row] = v * inv;
            }
        }
        if out.iter().any(|v| !v.is_finite()) {
            return Err(Error::SingularMatrix { determinant: det });
        }
        Ok(Self { elements: out })
    }

    /// Transposed copy.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let e = &self.elements;
        Self {
            elements: [e[0], e[3], e[6], e[1], e[4], e[7], e[2], e[5], e[8]],
        }
    }

    /// Transform a point `(x, y, 1)`, dividing by the homogeneous coordinate
    /// when it is not 1.
    #[must_use]
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        let e = &self.elements;
        let tx = e[0] * x + e[3] * y + e[6];
        let ty = e[1] * x + e[4] * y + e[7];
        let w = e[2] * x + e[5] * y + e[8];
        if w != 0.0 && w != 1.0 {
            (tx / w, ty / w)
        } else {
            (tx, ty)
        }
    }

    /// Transform a direction `(x, y, 0)`; translation is ignored.
    #[must_use]
    pub fn transform_vector(&self, x: f32, y: f32) -> (f32, f32) {
        let e = &self.elements;
        (e[0] * x + e[3] * y, e[1] * x + e[4] * y)
    }

    /// Check if approximately equal to another matrix.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }

    /// Flattened column-major elements, as uploaded to a `mat3` uniform.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.elements
    }
}

impl std::ops::Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_identity_is_unit() {
        let m = Mat3::from_translation(2.0, -1.0).rotate(0.7).scale(2.0, 3.0);
        assert!(Mat3::IDENTITY.multiply(&m).approx_eq(&m, 1e-6));
        assert!(m.multiply(&Mat3::IDENTITY).approx_eq(&m, 1e-6));
    }

    #[test]
    fn test_translation_moves_points() {
        let (x, y) = Mat3::from_translation(3.0, 4.0).transform_point(1.0, 1.0);
        assert!((x - 4.0).abs() < 1e-6);
        assert!((y - 5.0).abs() < 1e-6);
        // directions are unaffected
        let (dx, dy) = Mat3::from_translation(3.0, 4.0).transform_vector(1.0, 0.0);
        assert!((dx - 1.0).abs() < 1e-6 && dy.abs() < 1e-6);
    }

    #[test]
    fn test_rotation_is_counter_clockwise() {
        let (x, y) = Mat3::from_rotation(FRAC_PI_2).transform_point(1.0, 0.0);
        assert!(x.abs() < 1e-6);
        assert!((y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_post_compose_order() {
        // translate then rotate in local space: rotation happens first on the point
        let m = Mat3::identity().translate(1.0, 0.0).rotate(FRAC_PI_2);
        let (x, y) = m.transform_point(1.0, 0.0);
        assert!((x - 1.0).abs() < 1e-6);
        assert!((y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pivot_rotation_fixes_pivot() {
        let m = Mat3::identity().rotate_about(1.2, 0.1, -0.55);
        let (x, y) = m.transform_point(0.1, -0.55);
        assert!((x - 0.1).abs() < 1e-6);
        assert!((y + 0.55).abs() < 1e-6);
    }

    #[test]
    fn test_inverse() {
        let m = Mat3::from_translation(1.0, 2.0).rotate(0.4).scale(2.0, 0.5);
        let inv = m.inverse().unwrap();
        assert!(m.multiply(&inv).approx_eq(&Mat3::IDENTITY, 1e-5));
    }

    #[test]
    fn test_inverse_of_pixel_space_translation() {
        let m = Mat3::from_translation(400.0, 300.0);
        let inv = m.inverse().unwrap();
        assert!(m.multiply(&inv).approx_eq(&Mat3::IDENTITY, 1e-4));
        let (x, y) = inv.transform_point(400.0, 300.0);
        assert!(x.abs() < 1e-3 && y.abs() < 1e-3);
    }

    #[test]
    fn test_singular_inverse_is_error() {
        let m = Mat3::from_scale(0.0, 1.0);
        assert!(matches!(m.inverse(), Err(Error::SingularMatrix { .. })));
    }

    #[test]
    fn test_transpose_round_trip() {
        let m = Mat3::from_translation(1.0, 2.0).rotate(0.3);
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_mul_operator_matches_multiply() {
        let a = Mat3::from_rotation(0.2);
        let b = Mat3::from_translation(1.0, 1.0);
        assert_eq!(a * b, a.multiply(&b));
    }
}
