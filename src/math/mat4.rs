//! 4x4 matrix for 3D transforms, cameras and projections.

use super::{is_singular, Vec3};
use crate::error::{Error, Result};

/// A 4x4 matrix stored in column-major order.
/// Used for 3D transformations (model, view, projection matrices).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    /// Matrix elements in column-major order.
    /// `[m00, m10, m20, m30, m01, m11, m21, m31, m02, m12, m22, m32, m03, m13, m23, m33]`
    pub elements: [f32; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        elements: [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Create from a column-major array.
    #[must_use]
    pub const fn from_cols_array(elements: [f32; 16]) -> Self {
        Self { elements }
    }

    /// Identity matrix.
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Translation by `(tx, ty, tz)`.
    #[must_use]
    pub const fn from_translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self {
            elements: [
                1.0, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                tx, ty, tz, 1.0,
            ],
        }
    }

    /// Rotation about the X axis (right-handed, counter-clockwise looking
    /// down the axis towards the origin).
    #[must_use]
    pub fn from_rotation_x(theta: f32) -> Self {
        let (s, c) = theta.sin_cos();
        Self {
            elements: [
                1.0, 0.0, 0.0, 0.0,
                0.0, c, s, 0.0,
                0.0, -s, c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Rotation about the Y axis.
    #[must_use]
    pub fn from_rotation_y(theta: f32) -> Self {
        let (s, c) = theta.sin_cos();
        Self {
            elements: [
                c, 0.0, -s, 0.0,
                0.0, 1.0, 0.0, 0.0,
                s, 0.0, c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Rotation about the Z axis.
    #[must_use]
    pub fn from_rotation_z(theta: f32) -> Self {
        let (s, c) = theta.sin_cos();
        Self {
            elements: [
                c, s, 0.0, 0.0,
                -s, c, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Rotation about an arbitrary axis (Rodrigues' formula).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `axis` has (near) zero length.
    pub fn from_axis_angle(axis: Vec3, theta: f32) -> Result<Self> {
        let a = axis
            .try_normalize()
            .ok_or_else(|| Error::InvalidArgument("rotation axis has zero length".to_string()))?;
        let (s, c) = theta.sin_cos();
        let t = 1.0 - c;
        let (x, y, z) = (a.x, a.y, a.z);

        Ok(Self {
            elements: [
                t * x * x + c, t * x * y + s * z, t * x * z - s * y, 0.0,
                t * x * y - s * z, t * y * y + c, t * y * z + s * x, 0.0,
                t * x * z + s * y, t * y * z - s * x, t * z * z + c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        })
    }

    /// Non-uniform scale.
    #[must_use]
    pub const fn from_scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self {
            elements: [
                sx, 0.0, 0.0, 0.0,
                0.0, sy, 0.0, 0.0,
                0.0, 0.0, sz, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Matrix product `self * other`; `other` is applied first.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let a = &self.elements;
        let b = &other.elements;
        let mut out = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                out[col * 4 + row] = a[row] * b[col * 4]
                    + a[4 + row] * b[col * 4 + 1]
                    + a[8 + row] * b[col * 4 + 2]
                    + a[12 + row] * b[col * 4 + 3];
            }
        }
        Self { elements: out }
    }

    /// Post-compose a translation (`self * T`).
    #[must_use]
    pub fn translate(&self, tx: f32, ty: f32, tz: f32) -> Self {
        self.multiply(&Self::from_translation(tx, ty, tz))
    }

    /// Post-compose a rotation about X.
    #[must_use]
    pub fn rotate_x(&self, theta: f32) -> Self {
        self.multiply(&Self::from_rotation_x(theta))
    }

    /// Post-compose a rotation about Y.
    #[must_use]
    pub fn rotate_y(&self, theta: f32) -> Self {
        self.multiply(&Self::from_rotation_y(theta))
    }

    /// Post-compose a rotation about Z.
    #[must_use]
    pub fn rotate_z(&self, theta: f32) -> Self {
        self.multiply(&Self::from_rotation_z(theta))
    }

    /// Post-compose a rotation about an arbitrary axis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `axis` has (near) zero length.
    pub fn rotate_axis(&self, axis: Vec3, theta: f32) -> Result<Self> {
        Ok(self.multiply(&Self::from_axis_angle(axis, theta)?))
    }

    /// Post-compose a scale.
    #[must_use]
    pub fn scale(&self, sx: f32, sy: f32, sz: f32) -> Self {
        self.multiply(&Self::from_scale(sx, sy, sz))
    }

    /// Camera-to-world matrix of a camera at `eye` looking at `target`.
    ///
    /// The columns are the camera's right, up and backward axes followed by
    /// its position. Invert it (or use [`Mat4::viewing`]) to get the view matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateBasis`] if `eye == target` or `up` is
    /// parallel to the view direction.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Result<Self> {
        let (x, y, z) = camera_basis(eye, target, up)?;
        Ok(Self {
            elements: [
                x.x, x.y, x.z, 0.0,
                y.x, y.y, y.z, 0.0,
                z.x, z.y, z.z, 0.0,
                eye.x, eye.y, eye.z, 1.0,
            ],
        })
    }

    /// World-to-camera (viewing) matrix for a camera at `eye` looking at the
    /// reference point `target` with view-up vector `up`.
    ///
    /// Built directly as `R * T(-eye)` where the rows of `R` are the camera
    /// axes `u`, `v`, `n`; equal to `look_at(eye, target, up)?.inverse()?`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateBasis`] under the same conditions as
    /// [`Mat4::look_at`].
    pub fn viewing(eye: Vec3, target: Vec3, up: Vec3) -> Result<Self> {
        let (u, v, n) = camera_basis(eye, target, up)?;
        Ok(Self {
            elements: [
                u.x, v.x, n.x, 0.0,
                u.y, v.y, n.y, 0.0,
                u.z, v.z, n.z, 0.0,
                -u.dot(eye), -v.dot(eye), -n.dot(eye), 1.0,
            ],
        })
    }

    /// Symmetric perspective projection.
    ///
    /// `fov_y` is the vertical field of view in radians. Maps the view-space
    /// planes `z = -near` and `z = -far` to clip depth -1 and +1 (OpenGL
    /// convention) and sets `w = -z`.
    #[must_use]
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y * 0.5).tan();
        let range_inv = 1.0 / (near - far);

        Self {
            elements: [
                f / aspect, 0.0, 0.0, 0.0,
                0.0, f, 0.0, 0.0,
                0.0, 0.0, (near + far) * range_inv, -1.0,
                0.0, 0.0, 2.0 * near * far * range_inv, 0.0,
            ],
        }
    }

    /// Orthographic projection of the box `[xmin, xmax] × [ymin, ymax]` and
    /// view-space depths `z = near .. far` onto NDC.
    ///
    /// `near` and `far` are z coordinates in viewing space, so a camera
    /// looking down -z uses negative values (e.g. `near = -1`, `far = -8`).
    /// `near` maps to depth -1 and `far` to +1.
    #[must_use]
    pub fn orthographic(xmin: f32, xmax: f32, ymin: f32, ymax: f32, near: f32, far: f32) -> Self {
        let w = 1.0 / (xmax - xmin);
        let h = 1.0 / (ymax - ymin);
        let d = 1.0 / (near - far);

        Self {
            elements: [
                2.0 * w, 0.0, 0.0, 0.0,
                0.0, 2.0 * h, 0.0, 0.0,
                0.0, 0.0, -2.0 * d, 0.0,
                -(xmax + xmin) * w, -(ymax + ymin) * h, (near + far) * d, 1.0,
            ],
        }
    }

    /// The twelve 2x2 minors shared by [`Mat4::determinant`] and [`Mat4::inverse`].
    fn minors(&self) -> [f32; 12] {
        let a = &self.elements;
        let (a00, a01, a02, a03) = (a[0], a[1], a[2], a[3]);
        let (a10, a11, a12, a13) = (a[4], a[5], a[6], a[7]);
        let (a20, a21, a22, a23) = (a[8], a[9], a[10], a[11]);
        let (a30, a31, a32, a33) = (a[12], a[13], a[14], a[15]);

        [
            a00 * a11 - a01 * a10,
            a00 * a12 - a02 * a10,
            a00 * a13 - a03 * a10,
            a01 * a12 - a02 * a11,
            a01 * a13 - a03 * a11,
            a02 * a13 - a03 * a12,
            a20 * a31 - a21 * a30,
            a20 * a32 - a22 * a30,
            a20 * a33 - a23 * a30,
            a21 * a32 - a22 * a31,
            a21 * a33 - a23 * a31,
            a22 * a33 - a23 * a32,
        ]
    }

    /// Determinant.
    #[must_use]
    pub fn determinant(&self) -> f32 {
        let b = self.minors();
        b[0] * b[11] - b[1] * b[10] + b[2] * b[9] + b[3] * b[8] - b[4] * b[7] + b[5] * b[6]
    }

    /// General inverse by cofactor expansion.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`] when the determinant is negligible
    /// relative to the matrix entries.
    pub fn inverse(&self) -> Result<Self> {
        let b = self.minors();
        let det = b[0] * b[11] - b[1] * b[10] + b[2] * b[9] + b[3] * b[8] - b[4] * b[7]
            + b[5] * b[6];
        if is_singular(det, &self.elements, 4) {
            return Err(Error::SingularMatrix { determinant: det });
        }
        let inv = 1.0 / det;

        let a = &self.elements;
        let (a00, a01, a02, a03) = (a[0], a[1], a[2], a[3]);
        let (a10, a11, a12, a13) = (a[4], a[5], a[6], a[7]);
        let (a20, a21, a22, a23) = (a[8], a[9], a[10], a[11]);
        let (a30, a31, a32, a33) = (a[12], a[13], a[14], a[15]);
        let [b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11] = b;

        let out = [
            (a11 * b11 - a12 * b10 + a13 * b09) * inv,
            (a02 * b10 - a01 * b11 - a03 * b09) * inv,
            (a31 * b05 - a32 * b04 + a33 * b03) * inv,
            (a22 * b04 - a21 * b05 - a23 * b03) * inv,
            (a12 * b08 - a10 * b11 - a13 * b07) * inv,
            (a00 * b11 - a02 * b08 + a03 * b07) * inv,
            (a32 * b02 - a30 * b05 - a33 * b01) * inv,
            (a20 * b05 - a22 * b02 + a23 * b01) * inv,
            (a10 * b10 - a11 * b08 + a13 * b06) * inv,
            (a01 * b08 - a00 * b10 - a03 * b06) * inv,
            (a30 * b04 - a31 * b02 + a33 * b00) * inv,
            (a21 * b02 - a20 * b04 - a23 * b00) * inv,
            (a11 * b07 - a10 * b09 - a12 * b06) * inv,
            (a00 * b09 - a01 * b07 + a02 * b06) * inv,
            (a31 * b01 - a30 * b03 - a32 * b00) * inv,
            (a20 * b03 - a21 * b01 + a22 * b00) * inv,
        ];

        if out.iter().any(|v| !v.is_finite()) {
            return Err(Error::SingularMatrix { determinant: det });
        }
        Ok(Self { elements: out })
    }

    /// Transposed copy.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                out[row * 4 + col] = self.elements[col * 4 + row];
            }
        }
        Self { elements: out }
    }

    /// Transform a homogeneous vector `[x, y, z, w]`.
    #[must_use]
    pub fn transform_vec4(&self, v: [f32; 4]) -> [f32; 4] {
        let e = &self.elements;
        let mut out = [0.0; 4];
        for (row, o) in out.iter_mut().enumerate() {
            *o = e[row] * v[0] + e[4 + row] * v[1] + e[8 + row] * v[2] + e[12 + row] * v[3];
        }
        out
    }

    /// Transform a point (w = 1) and divide by the resulting w.
    #[must_use]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let [x, y, z, w] = self.transform_vec4([p.x, p.y, p.z, 1.0]);
        if w != 0.0 && w != 1.0 {
            Vec3::new(x / w, y / w, z / w)
        } else {
            Vec3::new(x, y, z)
        }
    }

    /// Transform a direction (w = 0); translation is ignored.
    #[must_use]
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        let [x, y, z, _] = self.transform_vec4([v.x, v.y, v.z, 0.0]);
        Vec3::new(x, y, z)
    }

    /// Check if approximately equal to another matrix.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }

    /// Flattened column-major elements, as uploaded to a `mat4` uniform.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.elements
    }

    /// Convert to column-major 2D array.
    #[must_use]
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        let e = &self.elements;
        [
            [e[0], e[1], e[2], e[3]],
            [e[4], e[5], e[6], e[7]],
            [e[8], e[9], e[10], e[11]],
            [e[12], e[13], e[14], e[15]],
        ]
    }
}

impl std::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

/// Orthonormal camera axes `(right, up, backward)` for a camera at `eye`
/// looking at `target`.
fn camera_basis(eye: Vec3, target: Vec3, up: Vec3) -> Result<(Vec3, Vec3, Vec3)> {
    let n = (eye - target)
        .try_normalize()
        .ok_or_else(|| Error::DegenerateBasis("eye coincides with target".to_string()))?;
    let u = up.cross(n).try_normalize().ok_or_else(|| {
        Error::DegenerateBasis("up vector is parallel to the view direction".to_string())
    })?;
    let v = n.cross(u);
    Ok((u, v, n))
}
