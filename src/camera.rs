//! Cameras and projections.
//!
//! Camera types hold only their state (position, orientation); view matrices
//! are derived on demand so they can never go stale.

use crate::error::{Error, Result};
use crate::math::{Mat4, Vec3};
use std::f32::consts::{FRAC_PI_2, PI};

/// A camera defined by an eye point, a reference point and a view-up vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAtCamera {
    /// Camera position.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Approximate up direction.
    pub up: Vec3,
}

impl LookAtCamera {
    /// Create a camera.
    #[must_use]
    pub const fn new(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self { eye, target, up }
    }

    /// Camera-to-world matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateBasis`] if the basis cannot be built.
    pub fn camera_matrix(&self) -> Result<Mat4> {
        Mat4::look_at(self.eye, self.target, self.up)
    }

    /// World-to-camera (view) matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateBasis`] if the basis cannot be built.
    pub fn view_matrix(&self) -> Result<Mat4> {
        Mat4::viewing(self.eye, self.target, self.up)
    }
}

impl Default for LookAtCamera {
    fn default() -> Self {
        Self::new(Vec3::new(2.0, 2.0, 2.0), Vec3::ZERO, Vec3::Y)
    }
}

/// A fixed camera whose reference point circles in the XY plane.
///
/// Each [`advance`](OrbitCamera::advance) moves the reference point by `step`
/// radians along a circle of `radius` around the origin, so the view sways
/// around the scene while the eye stays put.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Camera position.
    pub eye: Vec3,
    /// View-up vector.
    pub up: Vec3,
    /// Radius of the reference point's circle.
    pub radius: f32,
    /// Current angle in radians.
    pub angle: f32,
    /// Angle increment per step, in radians.
    pub step: f32,
}

impl OrbitCamera {
    /// Create an orbit camera at angle 0.
    #[must_use]
    pub const fn new(eye: Vec3, radius: f32, step: f32) -> Self {
        Self {
            eye,
            up: Vec3::Y,
            radius,
            angle: 0.0,
            step,
        }
    }

    /// Current reference point `(sin θ · r, cos θ · r, 0)`.
    #[must_use]
    pub fn reference(&self) -> Vec3 {
        let (s, c) = self.angle.sin_cos();
        Vec3::new(s * self.radius, c * self.radius, 0.0)
    }

    /// Move the reference point one step along its circle.
    pub fn advance(&mut self) {
        self.angle = (self.angle + self.step) % (2.0 * PI);
    }

    /// The equivalent look-at camera for the current angle.
    #[must_use]
    pub fn as_look_at(&self) -> LookAtCamera {
        LookAtCamera::new(self.eye, self.reference(), self.up)
    }

    /// World-to-camera (view) matrix for the current angle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateBasis`] if the eye lies on the reference
    /// point or the view direction is parallel to `up`.
    pub fn view_matrix(&self) -> Result<Mat4> {
        self.as_look_at().view_matrix()
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 1.0, 4.0), 0.5, 1f32.to_radians())
    }
}

/// Largest pitch magnitude; keeps the forward vector off the up axis.
pub const MAX_PITCH: f32 = FRAC_PI_2 - 0.01;

/// First-person camera steered by yaw/pitch and moved along its own axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyCamera {
    /// Camera position.
    pub position: Vec3,
    /// Heading in radians; 0 looks down +Z, π looks down -Z.
    pub yaw: f32,
    /// Elevation in radians, clamped to `±MAX_PITCH`.
    pub pitch: f32,
    /// Distance moved per key press.
    pub move_speed: f32,
    /// Radians turned per unit of pointer movement.
    pub sensitivity: f32,
}

impl FlyCamera {
    /// Create a camera at `position` looking down -Z.
    #[must_use]
    pub const fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: PI,
            pitch: 0.0,
            move_speed: 0.05,
            sensitivity: 0.01,
        }
    }

    /// Unit view direction `(cos p · sin y, sin p, cos p · cos y)`.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(cp * sy, sp, cp * cy)
    }

    /// Unit horizontal right direction (`forward × up` projected onto XZ).
    #[must_use]
    pub fn right(&self) -> Vec3 {
        let (s, c) = self.yaw.sin_cos();
        Vec3::new(-c, 0.0, s)
    }

    /// Point one unit ahead of the camera.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.position + self.forward()
    }

    /// Turn by a pointer delta. Moving right turns right; moving down looks down.
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * self.sensitivity;
        self.pitch = (self.pitch - dy * self.sensitivity).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Apply a movement key: `w`/`s` forward and back, `a`/`d` strafe,
    /// `q`/`e` up and down. Returns `false` for any other key.
    pub fn handle_key(&mut self, key: char) -> bool {
        let step = self.move_speed;
        let delta = match key.to_ascii_lowercase() {
            'w' => self.forward() * step,
            's' => self.forward() * -step,
            'd' => self.right() * step,
            'a' => self.right() * -step,
            'q' => Vec3::Y * step,
            'e' => Vec3::Y * -step,
            _ => return false,
        };
        self.position = self.position + delta;
        true
    }

    /// World-to-camera (view) matrix, `look_at(position, target, Y)⁻¹`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateBasis`] if the pitch was forced onto the up
    /// axis, or [`Error::SingularMatrix`] if the camera frame cannot be inverted.
    pub fn view_matrix(&self) -> Result<Mat4> {
        Mat4::look_at(self.position, self.target(), Vec3::Y)?.inverse()
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 1.0, 4.0))
    }
}

/// A projection with validated parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Symmetric perspective frustum.
    Perspective {
        /// Vertical field of view in radians.
        fov_y: f32,
        /// Width over height.
        aspect: f32,
        /// Distance to the near plane (> 0).
        near: f32,
        /// Distance to the far plane (> near).
        far: f32,
    },
    /// Orthographic box in viewing coordinates.
    Orthographic {
        /// Left edge.
        xmin: f32,
        /// Right edge.
        xmax: f32,
        /// Bottom edge.
        ymin: f32,
        /// Top edge.
        ymax: f32,
        /// Near z coordinate (maps to depth -1).
        near: f32,
        /// Far z coordinate (maps to depth +1).
        far: f32,
    },
}

impl Projection {
    /// Perspective projection with the field of view given in degrees.
    #[must_use]
    pub fn perspective_degrees(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self::Perspective {
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            near,
            far,
        }
    }

    /// Orthographic window `±half_height` tall, widened to `aspect`.
    #[must_use]
    pub fn orthographic_for_aspect(half_height: f32, aspect: f32, near: f32, far: f32) -> Self {
        let half_width = half_height * aspect;
        Self::Orthographic {
            xmin: -half_width,
            xmax: half_width,
            ymin: -half_height,
            ymax: half_height,
            near,
            far,
        }
    }

    /// Check that the parameters describe a non-empty view volume.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProjection`] describing the first bad parameter.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Perspective {
                fov_y,
                aspect,
                near,
                far,
            } => {
                if !(fov_y > 0.0 && fov_y < PI) {
                    return Err(Error::InvalidProjection(format!(
                        "field of view {fov_y} rad is outside (0, π)"
                    )));
                }
                if !(aspect.is_finite() && aspect > 0.0) {
                    return Err(Error::InvalidProjection(format!("aspect {aspect} must be positive")));
                }
                if !(near > 0.0 && far > near && far.is_finite()) {
                    return Err(Error::InvalidProjection(format!(
                        "need 0 < near < far, got near={near} far={far}"
                    )));
                }
            }
            Self::Orthographic {
                xmin,
                xmax,
                ymin,
                ymax,
                near,
                far,
            } => {
                let all_finite = [xmin, xmax, ymin, ymax, near, far].iter().all(|v| v.is_finite());
                if !all_finite {
                    return Err(Error::InvalidProjection("non-finite bound".to_string()));
                }
                if xmin == xmax || ymin == ymax || near == far {
                    return Err(Error::InvalidProjection(
                        "orthographic box has zero extent".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Projection matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidProjection`] if [`validate`](Self::validate) fails.
    pub fn matrix(&self) -> Result<Mat4> {
        self.validate()?;
        Ok(match *self {
            Self::Perspective {
                fov_y,
                aspect,
                near,
                far,
            } => Mat4::perspective(fov_y, aspect, near, far),
            Self::Orthographic {
                xmin,
                xmax,
                ymin,
                ymax,
                near,
                far,
            } => Mat4::orthographic(xmin, xmax, ymin, ymax, near, far),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_look_at_camera_matrices_are_inverse() {
        let cam = LookAtCamera::default();
        let product = cam.camera_matrix().unwrap() * cam.view_matrix().unwrap();
        assert!(product.approx_eq(&Mat4::IDENTITY, 1e-5));
    }

    #[test]
    fn test_orbit_reference_path() {
        let mut cam = OrbitCamera::default();
        assert!(cam.reference().approx_eq(Vec3::new(0.0, 0.5, 0.0), 1e-6));
        for _ in 0..90 {
            cam.advance();
        }
        assert!(cam.reference().approx_eq(Vec3::new(0.5, 0.0, 0.0), 1e-4));
        assert!(cam.view_matrix().is_ok());
    }

    #[test]
    fn test_orbit_angle_wraps() {
        let mut cam = OrbitCamera::new(Vec3::Z, 1.0, PI);
        cam.advance();
        cam.advance();
        cam.advance();
        assert!(cam.angle < 2.0 * PI);
        assert_relative_eq!(cam.angle, PI, epsilon = 1e-5);
    }

    #[test]
    fn test_fly_camera_starts_looking_down_negative_z() {
        let cam = FlyCamera::default();
        assert!(cam.forward().approx_eq(Vec3::new(0.0, 0.0, -1.0), 1e-6));
        assert!(cam.right().approx_eq(Vec3::X, 1e-6));
    }

    #[test]
    fn test_fly_camera_right_is_forward_cross_up() {
        let mut cam = FlyCamera::default();
        cam.look(37.0, 0.0);
        let expected = cam.forward().cross(Vec3::Y).try_normalize().unwrap();
        assert!(cam.right().approx_eq(expected, 1e-5));
    }

    #[test]
    fn test_fly_camera_movement_keys() {
        let mut cam = FlyCamera::default();
        assert!(cam.handle_key('w'));
        assert!(cam.position.approx_eq(Vec3::new(0.0, 1.0, 3.95), 1e-5));
        assert!(cam.handle_key('D'));
        assert!(cam.position.approx_eq(Vec3::new(0.05, 1.0, 3.95), 1e-5));
        assert!(cam.handle_key('q'));
        assert_relative_eq!(cam.position.y, 1.05, epsilon = 1e-6);
        assert!(!cam.handle_key('x'));
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut cam = FlyCamera::default();
        cam.look(0.0, -10_000.0);
        assert_relative_eq!(cam.pitch, MAX_PITCH);
        assert!(cam.view_matrix().is_ok());
    }

    #[test]
    fn test_fly_view_puts_target_ahead() {
        let cam = FlyCamera::default();
        let view = cam.view_matrix().unwrap();
        let ahead = view.transform_point(Vec3::new(0.0, 1.0, 0.0));
        assert!(ahead.approx_eq(Vec3::new(0.0, 0.0, -4.0), 1e-4));
    }

    #[test]
    fn test_fly_view_far_from_origin() {
        let cam = FlyCamera::new(Vec3::new(40.0, 1.0, 4.0));
        let view = cam.view_matrix().unwrap();
        let ahead = view.transform_point(Vec3::new(40.0, 1.0, -6.0));
        assert!(ahead.approx_eq(Vec3::new(0.0, 0.0, -10.0), 1e-3));

        let mut walker = FlyCamera::new(Vec3::new(-2500.0, 1.0, 900.0));
        assert!(walker.handle_key('w'));
        assert!(walker.view_matrix().is_ok());
    }

    #[test]
    fn test_projection_validation() {
        assert!(Projection::perspective_degrees(60.0, 1.5, 0.1, 100.0).matrix().is_ok());
        assert!(matches!(
            Projection::perspective_degrees(60.0, 1.5, 0.0, 100.0).validate(),
            Err(Error::InvalidProjection(_))
        ));
        assert!(Projection::perspective_degrees(180.0, 1.0, 0.1, 1.0).validate().is_err());
        assert!(Projection::perspective_degrees(60.0, 0.0, 0.1, 1.0).validate().is_err());
        assert!(Projection::orthographic_for_aspect(0.0, 2.0, -1.0, -8.0).validate().is_err());
    }

    #[test]
    fn test_orthographic_for_aspect() {
        let p = Projection::orthographic_for_aspect(0.5, 2.0, -1.0, -8.0);
        assert_eq!(
            p,
            Projection::Orthographic {
                xmin: -1.0,
                xmax: 1.0,
                ymin: -0.5,
                ymax: 0.5,
                near: -1.0,
                far: -8.0,
            }
        );
        let m = p.matrix().unwrap();
        let corner = m.transform_point(Vec3::new(1.0, 0.5, -8.0));
        assert!(corner.approx_eq(Vec3::new(1.0, 1.0, 1.0), 1e-5));
    }
}
