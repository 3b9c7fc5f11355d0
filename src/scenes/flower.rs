use super::{draw_planar, Scene};
use crate::animation::{Animation, Pulse};
use crate::color::Rgb;
use crate::error::Result;
use crate::geometry::Point;
use crate::math::Mat3;
use crate::mesh::Mesh;
use crate::render::Renderer;
use std::f32::consts::TAU;

const YELLOW: Rgb = Rgb::new(1.0, 1.0, 0.0);

/// A flower of `petals` round petals evenly spaced around a round center.
///
/// The center comes first; petals sit `center_radius + 0.7 · petal_radius`
/// from it, starting on the +X axis and going counterclockwise.
#[must_use]
pub fn blossom(
    center: Point,
    center_color: Rgb,
    petal_color: Rgb,
    center_radius: f32,
    petal_radius: f32,
    petals: u32,
) -> Vec<Mesh> {
    let distance = center_radius + petal_radius * 0.7;
    let mut meshes = Vec::with_capacity(petals as usize + 1);
    meshes.push(Mesh::circle(center, center_radius, 20, center_color));
    for i in 0..petals {
        let angle = i as f32 * TAU / petals as f32;
        let at = Point::new(center.x + angle.cos() * distance, center.y + angle.sin() * distance);
        meshes.push(Mesh::circle(at, petal_radius, 20, petal_color));
    }
    meshes
}

/// A single flower whose leaf and petals pulse around a fixed center.
#[derive(Debug, Clone)]
pub struct Flower {
    pulse: Pulse,
    petals: Vec<Mesh>,
    center: Mesh,
}

impl Flower {
    /// A flower at scale 1.
    #[must_use]
    pub fn new() -> Self {
        let mut petals = vec![Mesh::circle(Point::new(0.15, 0.2), 0.15, 20, Rgb::new(0.25, 0.5, 0.0))];
        let white = Rgb::WHITE;
        let silver = Rgb::new(0.8, 0.8, 0.8);
        for (x, y) in [(0.2, 0.0), (-0.2, 0.0), (0.0, 0.2), (0.0, -0.2)] {
            petals.push(Mesh::circle(Point::new(x, y), 0.1, 20, white));
        }
        for (x, y) in [(0.1, -0.1), (-0.1, -0.1), (0.1, 0.1), (-0.1, 0.1)] {
            petals.push(Mesh::circle(Point::new(x, y), 0.1, 20, silver));
        }
        Self {
            pulse: Pulse::new(0.05, 0.1),
            petals,
            center: Mesh::circle(Point::ORIGIN, 0.1, 20, YELLOW),
        }
    }

    /// Current petal scale.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.pulse.scale()
    }
}

impl Default for Flower {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for Flower {
    fn tick(&mut self) {
        self.pulse.tick();
    }
}

impl Scene for Flower {
    fn name(&self) -> &'static str {
        "flower"
    }

    fn background(&self) -> Rgb {
        Rgb::new(0.4, 0.7, 0.2)
    }

    fn draw(&self, renderer: &mut Renderer) -> Result<()> {
        let s = self.pulse.scale();
        let petal = Mat3::from_scale(s, s);
        for mesh in &self.petals {
            draw_planar(renderer, mesh, petal)?;
        }
        draw_planar(renderer, &self.center, Mat3::identity())
    }
}

/// Three differently styled flowers on a black background.
#[derive(Debug, Clone)]
pub struct Garden {
    meshes: Vec<Mesh>,
}

impl Garden {
    /// Daisy, carnation and a blue five-petal flower.
    #[must_use]
    pub fn new() -> Self {
        let mut meshes = blossom(Point::new(-0.5, 0.5), YELLOW, Rgb::WHITE, 0.1, 0.15, 8);
        meshes.extend(blossom(
            Point::new(0.5, 0.5),
            Rgb::new(0.8, 0.0, 0.0),
            Rgb::new(1.0, 0.0, 0.0),
            0.08,
            0.12,
            12,
        ));
        meshes.extend(blossom(
            Point::new(0.0, -0.4),
            Rgb::new(0.0, 1.0, 1.0),
            Rgb::new(0.2, 0.5, 1.0),
            0.1,
            0.2,
            5,
        ));
        Self { meshes }
    }
}

impl Default for Garden {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for Garden {
    fn tick(&mut self) {}
}

impl Scene for Garden {
    fn name(&self) -> &'static str {
        "garden"
    }

    fn background(&self) -> Rgb {
        Rgb::BLACK
    }

    fn draw(&self, renderer: &mut Renderer) -> Result<()> {
        self.meshes
            .iter()
            .try_for_each(|mesh| draw_planar(renderer, mesh, Mat3::identity()))
    }
}
