use super::{draw_planar, Scene};
use crate::animation::{Animation, Spin};
use crate::color::Rgb;
use crate::error::Result;
use crate::geometry::Point;
use crate::math::Mat3;
use crate::mesh::Mesh;
use crate::render::Renderer;

/// Four gray blades and a yellow hub spinning on a blue stick.
#[derive(Debug, Clone)]
pub struct Pinwheel {
    spin: Spin,
    stick: Mesh,
    blades: Vec<Mesh>,
    hub: Mesh,
}

impl Pinwheel {
    /// Radians per frame.
    pub const SPIN_STEP: f32 = 0.02;

    /// A pinwheel at rest.
    #[must_use]
    pub fn new() -> Self {
        let stick = Mesh::quad(
            [
                Point::new(-0.2, 0.1),
                Point::new(0.2, 0.1),
                Point::new(0.4, -1.0),
                Point::new(-0.4, -1.0),
            ],
            Rgb::new(0.0, 0.0, 0.6),
        );
        // each blade is a fan from the hub to a square around its tip
        let gray = Rgb::new(0.5, 0.5, 0.5);
        let blades = [(0.5, 0.0), (-0.5, 0.0), (0.0, 0.5), (0.0, -0.5)]
            .into_iter()
            .map(|(x, y)| Mesh::fan(Point::ORIGIN, Point::new(x, y), 0.12, 4, gray))
            .collect();
        let hub = Mesh::circle(Point::ORIGIN, 0.1, 10, Rgb::new(1.0, 1.0, 0.0));
        Self {
            spin: Spin::new(Self::SPIN_STEP),
            stick,
            blades,
            hub,
        }
    }

    /// Current blade angle.
    #[must_use]
    pub const fn angle(&self) -> f32 {
        self.spin.angle
    }
}

impl Default for Pinwheel {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for Pinwheel {
    fn tick(&mut self) {
        self.spin.tick();
    }
}

impl Scene for Pinwheel {
    fn name(&self) -> &'static str {
        "pinwheel"
    }

    fn background(&self) -> Rgb {
        Rgb::new(0.8, 0.9, 1.0)
    }

    fn draw(&self, renderer: &mut Renderer) -> Result<()> {
        draw_planar(renderer, &self.stick, Mat3::identity())?;
        let rotation = Mat3::from_rotation(self.spin.angle);
        for blade in &self.blades {
            draw_planar(renderer, blade, rotation)?;
        }
        draw_planar(renderer, &self.hub, rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_blades_rotate_about_hub() {
        let mut wheel = Pinwheel::new();
        let mut r = Renderer::new(101, 101).unwrap();
        wheel.render(&mut r).unwrap();
        let gray = Rgb::new(0.5, 0.5, 0.5).to_rgba();
        // right blade at rest, NDC (0.54, 0.02)
        assert_eq!(r.framebuffer().get_pixel(77, 49), Some(gray));

        // a quarter turn moves it to the top
        wheel.spin.angle = std::f32::consts::FRAC_PI_2;
        wheel.render(&mut r).unwrap();
        assert_eq!(r.framebuffer().get_pixel(49, 23), Some(gray));
    }

    #[test]
    fn test_hub_covers_center() {
        let wheel = Pinwheel::new();
        let mut r = Renderer::new(64, 64).unwrap();
        wheel.render(&mut r).unwrap();
        assert_eq!(r.framebuffer().get_pixel(32, 32), Some(Rgba::new(255, 255, 0, 255)));
    }

    #[test]
    fn test_tick_advances_angle() {
        let mut wheel = Pinwheel::new();
        wheel.tick();
        wheel.tick();
        assert!((wheel.angle() - 0.04).abs() < 1e-6);
    }
}
