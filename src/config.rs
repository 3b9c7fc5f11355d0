//! YAML configuration for the demo scenes.
//!
//! Every field has a serde default, so an empty file (or no file at all)
//! yields the classroom settings.
//!
//! ```yaml
//! canvas:
//!   width: 640
//!   height: 480
//! render:
//!   frames: 120
//!   seed: 7
//! camera:
//!   eye: [0.0, 1.0, 4.0]
//! projection:
//!   kind: perspective
//!   fov_y_degrees: 45.0
//! ```

use crate::camera::{FlyCamera, OrbitCamera, Projection};
use crate::error::{Error, Result};
use crate::math::Vec3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Canvas size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Width in pixels.
    #[serde(default = "default_canvas_side")]
    pub width: u32,

    /// Height in pixels.
    #[serde(default = "default_canvas_side")]
    pub height: u32,
}

fn default_canvas_side() -> u32 {
    400
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_side(),
            height: default_canvas_side(),
        }
    }
}

/// Frame stepping and randomness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Animation frames stepped before the picture is taken.
    #[serde(default = "default_frames")]
    pub frames: u64,

    /// Seed for random colors (sphere quads, `c` key).
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_frames() -> u64 {
    60
}
fn default_seed() -> u64 {
    42
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            frames: default_frames(),
            seed: default_seed(),
        }
    }
}

/// Camera placement and controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Eye position of both 3D viewers.
    #[serde(default = "default_eye")]
    pub eye: [f32; 3],

    /// Radius of the orbiting reference point.
    #[serde(default = "default_orbit_radius")]
    pub orbit_radius: f32,

    /// Orbit step per frame, in degrees.
    #[serde(default = "default_orbit_step")]
    pub orbit_step_degrees: f32,

    /// First-person movement per key press.
    #[serde(default = "default_move_speed")]
    pub move_speed: f32,

    /// First-person radians per pointer pixel.
    #[serde(default = "default_sensitivity")]
    pub sensitivity: f32,
}

fn default_eye() -> [f32; 3] {
    [0.0, 1.0, 4.0]
}
fn default_orbit_radius() -> f32 {
    0.5
}
fn default_orbit_step() -> f32 {
    1.0
}
fn default_move_speed() -> f32 {
    0.05
}
fn default_sensitivity() -> f32 {
    0.01
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: default_eye(),
            orbit_radius: default_orbit_radius(),
            orbit_step_degrees: default_orbit_step(),
            move_speed: default_move_speed(),
            sensitivity: default_sensitivity(),
        }
    }
}

impl CameraConfig {
    /// The orbiting look-at camera these settings describe.
    #[must_use]
    pub fn orbit_camera(&self) -> OrbitCamera {
        OrbitCamera::new(
            Vec3::from(self.eye),
            self.orbit_radius,
            self.orbit_step_degrees.to_radians(),
        )
    }

    /// The first-person camera these settings describe.
    #[must_use]
    pub fn fly_camera(&self) -> FlyCamera {
        let mut camera = FlyCamera::new(Vec3::from(self.eye));
        camera.move_speed = self.move_speed;
        camera.sensitivity = self.sensitivity;
        camera
    }
}

/// Projection used by the orbit viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionKind {
    /// Parallel projection of a box.
    #[default]
    Orthographic,
    /// Pinhole projection of a frustum.
    Perspective,
}

/// Projection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Orbit viewer projection.
    #[serde(default)]
    pub kind: ProjectionKind,

    /// Vertical field of view for perspective, in degrees.
    #[serde(default = "default_fov")]
    pub fov_y_degrees: f32,

    /// Perspective near plane distance.
    #[serde(default = "default_near")]
    pub near: f32,

    /// Perspective far plane distance.
    #[serde(default = "default_far")]
    pub far: f32,

    /// Half the height of the orthographic window.
    #[serde(default = "default_half_height")]
    pub ortho_half_height: f32,

    /// Orthographic near plane, as a view-space z.
    #[serde(default = "default_ortho_near")]
    pub ortho_near: f32,

    /// Orthographic far plane, as a view-space z.
    #[serde(default = "default_ortho_far")]
    pub ortho_far: f32,
}

fn default_fov() -> f32 {
    60.0
}
fn default_near() -> f32 {
    0.1
}
fn default_far() -> f32 {
    100.0
}
fn default_half_height() -> f32 {
    0.5
}
fn default_ortho_near() -> f32 {
    -1.0
}
fn default_ortho_far() -> f32 {
    -8.0
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            kind: ProjectionKind::default(),
            fov_y_degrees: default_fov(),
            near: default_near(),
            far: default_far(),
            ortho_half_height: default_half_height(),
            ortho_near: default_ortho_near(),
            ortho_far: default_ortho_far(),
        }
    }
}

impl ProjectionConfig {
    /// Perspective projection for a canvas of the given aspect ratio.
    #[must_use]
    pub fn perspective(&self, aspect: f32) -> Projection {
        Projection::perspective_degrees(self.fov_y_degrees, aspect, self.near, self.far)
    }

    /// Orthographic projection for a canvas of the given aspect ratio.
    #[must_use]
    pub fn orthographic(&self, aspect: f32) -> Projection {
        Projection::orthographic_for_aspect(
            self.ortho_half_height,
            aspect,
            self.ortho_near,
            self.ortho_far,
        )
    }

    /// The projection selected by `kind`.
    #[must_use]
    pub fn selected(&self, aspect: f32) -> Projection {
        match self.kind {
            ProjectionKind::Orthographic => self.orthographic(aspect),
            ProjectionKind::Perspective => self.perspective(aspect),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Canvas settings.
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Frame and randomness settings.
    #[serde(default)]
    pub render: RenderConfig,

    /// Camera settings.
    #[serde(default)]
    pub camera: CameraConfig,

    /// Projection settings.
    #[serde(default)]
    pub projection: ProjectionConfig,
}

impl Config {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-user config file, `<config dir>/trueno-raster/config.yaml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("trueno-raster").join("config.yaml"))
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file cannot be read, or
    /// [`Error::ConfigParse`] if it is not valid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] with the offending line.
    pub fn parse(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }
}
