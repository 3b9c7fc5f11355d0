//! Animated demo scenes.
//!
//! A [`Scene`] is an [`Animation`] that can also draw itself. Scenes are
//! built from [`Mesh`](crate::mesh::Mesh) data and rendered through
//! [`Renderer::draw`]; nothing here talks to a window. The binary steps a
//! scene for a number of frames with [`run`] and saves the last picture.
//!
//! | name       | content                                            |
//! |------------|----------------------------------------------------|
//! | `line`     | scripted line tool session (palette + thickness)   |
//! | `triangle` | scripted triangle session (direct key binding)     |
//! | `circle`   | two-click Bresenham circle                         |
//! | `points`   | clicked point cloud                                |
//! | `pinwheel` | spinning blades on a stick                         |
//! | `car`      | car driving across a road                          |
//! | `robot`    | robot swinging arms and legs                       |
//! | `flower`   | pulsing flower                                     |
//! | `garden`   | three static flowers                               |
//! | `orbit`    | sphere and axes seen by an orbiting camera         |
//! | `explorer` | first-person view of a cube over a checkered floor |

mod car;
mod flower;
mod pinwheel;
mod robot;
mod sketch;
mod viewer3d;

pub use car::Car;
pub use flower::{blossom, Flower, Garden};
pub use pinwheel::Pinwheel;
pub use robot::Robot;
pub use sketch::{PointSketch, Sketch};
pub use viewer3d::{CameraExplorer, OrbitViewer};

use crate::animation::{Animation, Ticker};
use crate::color::Rgb;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::math::Mat3;
use crate::mesh::Mesh;
use crate::render::{Renderer, Transform};
use log::{debug, info, log_enabled, Level};

/// Names accepted by [`by_name`].
pub const SCENE_NAMES: [&str; 11] = [
    "line", "triangle", "circle", "points", "pinwheel", "car", "robot", "flower", "garden",
    "orbit", "explorer",
];

/// An animation that can draw its current frame.
pub trait Scene: Animation {
    /// Scene name as accepted by [`by_name`].
    fn name(&self) -> &'static str;

    /// Clear color.
    fn background(&self) -> Rgb;

    /// Whether the scene needs the depth test.
    fn depth_test(&self) -> bool {
        false
    }

    /// Draw the current frame onto a cleared target.
    ///
    /// # Errors
    ///
    /// Propagates renderer errors.
    fn draw(&self, renderer: &mut Renderer) -> Result<()>;

    /// Clear the target and draw the current frame.
    ///
    /// # Errors
    ///
    /// Propagates renderer errors.
    fn render(&self, renderer: &mut Renderer) -> Result<()> {
        renderer.set_depth_test(self.depth_test());
        renderer.clear(self.background());
        self.draw(renderer)
    }
}

/// Build a scene by name.
///
/// # Errors
///
/// - [`Error::UnknownScene`] for a name not in [`SCENE_NAMES`].
/// - [`Error::InvalidDimensions`] or [`Error::InvalidProjection`] when the
///   configuration cannot describe the scene.
pub fn by_name(name: &str, config: &Config) -> Result<Box<dyn Scene>> {
    let (width, height) = (config.canvas.width, config.canvas.height);
    let rng = fastrand::Rng::with_seed(config.render.seed);
    let scene: Box<dyn Scene> = match name {
        "line" => Box::new(Sketch::line_session(width, height, rng)),
        "triangle" => Box::new(Sketch::triangle_session(width, height, rng)),
        "circle" => Box::new(Sketch::circle_session(width, height)),
        "points" => Box::new(PointSketch::session(width, height, rng)?),
        "pinwheel" => Box::new(Pinwheel::new()),
        "car" => Box::new(Car::new()),
        "robot" => Box::new(Robot::new()),
        "flower" => Box::new(Flower::new()),
        "garden" => Box::new(Garden::new()),
        "orbit" => Box::new(OrbitViewer::from_config(config, rng)?),
        "explorer" => Box::new(CameraExplorer::from_config(config)?),
        other => return Err(Error::UnknownScene(other.to_string())),
    };
    Ok(scene)
}

/// Step `scene` by `frames` and render the resulting frame.
///
/// # Errors
///
/// Propagates renderer errors.
pub fn run(scene: &mut dyn Scene, renderer: &mut Renderer, frames: u64) -> Result<()> {
    let mut ticker = Ticker::new();
    ticker.step_n(&mut *scene, frames);
    scene.render(renderer)?;
    info!(
        "rendered scene '{}' after {} frame(s) at {}x{}",
        scene.name(),
        ticker.frames(),
        renderer.viewport().width(),
        renderer.viewport().height()
    );
    if log_enabled!(Level::Debug) {
        debug!("mean frame color {:?}", renderer.framebuffer().mean_rgb());
    }
    Ok(())
}

/// Draw a 2D mesh under a planar transform.
fn draw_planar(renderer: &mut Renderer, mesh: &Mesh, transform: Mat3) -> Result<()> {
    renderer.draw(&mesh.draw_call().with_transform(Transform::Planar(transform)))
}
