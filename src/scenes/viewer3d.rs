//! 3D viewers: an orbiting look-at camera and a first-person camera.

use super::Scene;
use crate::animation::{Animation, Spin};
use crate::camera::{FlyCamera, OrbitCamera, Projection};
use crate::color::Rgb;
use crate::config::Config;
use crate::error::Result;
use crate::interaction::InputEvent;
use crate::math::Mat4;
use crate::mesh::Mesh;
use crate::render::{Renderer, Transform};
use log::{debug, warn};

/// Draw `meshes` with the shared `view`/`projection` and their own models.
fn draw_spatial(
    renderer: &mut Renderer,
    meshes: &[(&Mesh, Mat4)],
    view: Mat4,
    projection: Mat4,
) -> Result<()> {
    for &(mesh, model) in meshes {
        let transform = Transform::Spatial {
            model,
            view,
            projection,
        };
        renderer.draw(&mesh.draw_call().with_transform(transform))?;
    }
    Ok(())
}

// ============================================================================
// Orbit viewer
// ============================================================================

/// A spinning sphere and red axes seen from a fixed eye whose reference
/// point circles the origin.
///
/// The sphere's Y rotation and the reference point share one angle.
#[derive(Debug, Clone)]
pub struct OrbitViewer {
    camera: OrbitCamera,
    projection: Projection,
    sphere: Mesh,
    axes: Mesh,
}

impl OrbitViewer {
    /// Build a viewer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidProjection`] for an empty view volume.
    pub fn new(camera: OrbitCamera, projection: Projection, rng: &mut fastrand::Rng) -> Result<Self> {
        projection.validate()?;
        let red = Rgb::new(1.0, 0.0, 0.0);
        Ok(Self {
            camera,
            projection,
            sphere: Mesh::sphere(0.5, 30, 30, rng),
            axes: Mesh::axes(-1.0, 1.0, [red; 3]),
        })
    }

    /// Build a viewer from the `camera`, `projection` and `canvas` sections.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidProjection`] for an empty view volume.
    pub fn from_config(config: &Config, mut rng: fastrand::Rng) -> Result<Self> {
        let aspect = config.canvas.width as f32 / config.canvas.height.max(1) as f32;
        Self::new(
            config.camera.orbit_camera(),
            config.projection.selected(aspect),
            &mut rng,
        )
    }

    /// The orbiting camera.
    #[must_use]
    pub const fn camera(&self) -> &OrbitCamera {
        &self.camera
    }
}

impl Animation for OrbitViewer {
    fn tick(&mut self) {
        self.camera.tick();
    }
}

impl Scene for OrbitViewer {
    fn name(&self) -> &'static str {
        "orbit"
    }

    fn background(&self) -> Rgb {
        Rgb::WHITE
    }

    fn depth_test(&self) -> bool {
        true
    }

    fn draw(&self, renderer: &mut Renderer) -> Result<()> {
        let view = match self.camera.view_matrix() {
            Ok(view) => view,
            Err(e) => {
                warn!("orbit camera has no valid view at angle {}: {e}", self.camera.angle);
                return Ok(());
            }
        };
        let projection = self.projection.matrix()?;
        let sphere_model = Mat4::from_rotation_y(self.camera.angle);
        draw_spatial(
            renderer,
            &[(&self.sphere, sphere_model), (&self.axes, Mat4::IDENTITY)],
            view,
            projection,
        )
    }
}

// ============================================================================
// Camera explorer
// ============================================================================

/// First-person walk around a rotating cube standing on a checkered floor.
#[derive(Debug, Clone)]
pub struct CameraExplorer {
    camera: FlyCamera,
    projection: Projection,
    spin: Spin,
    ground: Mesh,
    cube: Mesh,
    axes: Mesh,
}

impl CameraExplorer {
    /// Radians the cube turns per frame.
    pub const CUBE_SPIN: f32 = 0.005;

    /// Build an explorer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidProjection`] for an empty view volume.
    pub fn new(camera: FlyCamera, projection: Projection) -> Result<Self> {
        projection.validate()?;
        Ok(Self {
            camera,
            projection,
            spin: Spin::new(Self::CUBE_SPIN),
            ground: Mesh::ground_plane(10.0, 20),
            cube: Mesh::cube(0.5),
            axes: Mesh::axes(
                0.0,
                5.0,
                [
                    Rgb::new(1.0, 0.0, 0.0),
                    Rgb::new(0.0, 1.0, 0.0),
                    Rgb::new(0.0, 0.0, 1.0),
                ],
            ),
        })
    }

    /// Build an explorer from the `camera`, `projection` and `canvas`
    /// sections; the projection is always perspective.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidProjection`] for an empty view volume.
    pub fn from_config(config: &Config) -> Result<Self> {
        let aspect = config.canvas.width as f32 / config.canvas.height.max(1) as f32;
        Self::new(config.camera.fly_camera(), config.projection.perspective(aspect))
    }

    /// The first-person camera.
    #[must_use]
    pub const fn camera(&self) -> &FlyCamera {
        &self.camera
    }

    /// Move with `w a s d q e`; pointer presses are ignored.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key(k) if self.camera.handle_key(k) => {}
            other => debug!("camera explorer ignores {other:?}"),
        }
    }

    /// Turn by a pointer drag delta.
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.camera.look(dx, dy);
    }
}

impl Animation for CameraExplorer {
    fn tick(&mut self) {
        self.spin.tick();
    }
}

impl Scene for CameraExplorer {
    fn name(&self) -> &'static str {
        "explorer"
    }

    fn background(&self) -> Rgb {
        Rgb::new(0.1, 0.1, 0.1)
    }

    fn depth_test(&self) -> bool {
        true
    }

    fn draw(&self, renderer: &mut Renderer) -> Result<()> {
        let view = match self.camera.view_matrix() {
            Ok(view) => view,
            Err(e) => {
                warn!("camera explorer has no valid view at pitch {}: {e}", self.camera.pitch);
                return Ok(());
            }
        };
        let projection = self.projection.matrix()?;
        let cube_model = Mat4::from_rotation_y(self.spin.angle).translate(0.0, 0.25, 0.0);
        draw_spatial(
            renderer,
            &[
                (&self.ground, Mat4::IDENTITY),
                (&self.cube, cube_model),
                (&self.axes, Mat4::IDENTITY),
            ],
            view,
            projection,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::math::Vec3;

    fn explorer() -> CameraExplorer {
        CameraExplorer::new(
            FlyCamera::default(),
            Projection::perspective_degrees(60.0, 1.0, 0.1, 100.0),
        )
        .unwrap()
    }

    #[test]
    fn test_orbit_viewer_rejects_bad_projection() {
        let mut rng = fastrand::Rng::with_seed(1);
        let flat = Projection::orthographic_for_aspect(0.5, 1.0, -1.0, -1.0);
        assert!(OrbitViewer::new(OrbitCamera::default(), flat, &mut rng).is_err());
    }

    #[test]
    fn test_orbit_viewer_draws_sphere_in_center() {
        let viewer = OrbitViewer::from_config(&Config::default(), fastrand::Rng::with_seed(5)).unwrap();
        let mut r = Renderer::new(65, 65).unwrap();
        viewer.render(&mut r).unwrap();
        // the view is aimed at the top of the sphere, which fills the lower half
        assert_ne!(r.framebuffer().get_pixel(32, 48), Some(Rgba::WHITE));
        assert_eq!(r.framebuffer().get_pixel(0, 0), Some(Rgba::WHITE));
    }

    #[test]
    fn test_orbit_viewer_ticks_camera() {
        let mut viewer =
            OrbitViewer::from_config(&Config::default(), fastrand::Rng::with_seed(5)).unwrap();
        viewer.tick();
        assert!((viewer.camera().angle - 1f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_explorer_sees_cube_ahead() {
        let scene = explorer();
        let mut r = Renderer::new(64, 64).unwrap();
        scene.render(&mut r).unwrap();
        // the red front face spans rows 39 to 45 below the horizon
        let red = Rgb::new(1.0, 0.0, 0.0).to_rgba();
        let fb = r.framebuffer();
        let hits = (38..46).filter(|&y| fb.get_pixel(32, y) == Some(red)).count();
        assert!(hits > 0);
    }

    #[test]
    fn test_explorer_keys_move_camera() {
        let mut scene = explorer();
        scene.handle(InputEvent::Key('w'));
        assert!(scene.camera().position.approx_eq(Vec3::new(0.0, 1.0, 3.95), 1e-5));
        scene.handle(InputEvent::click(1.0, 1.0));
        scene.handle(InputEvent::Key('z'));
        assert!(scene.camera().position.approx_eq(Vec3::new(0.0, 1.0, 3.95), 1e-5));
    }

    #[test]
    fn test_explorer_skips_frame_on_degenerate_camera() {
        let mut scene = explorer();
        scene.camera.pitch = std::f32::consts::FRAC_PI_2;
        let mut r = Renderer::new(16, 16).unwrap();
        scene.render(&mut r).unwrap();
        assert_eq!(r.framebuffer().count_differing(Rgb::new(0.1, 0.1, 0.1).to_rgba()), 0);
    }
}
