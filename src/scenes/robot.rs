use super::{draw_planar, Scene};
use crate::animation::{Animation, Swing};
use crate::color::Rgb;
use crate::error::Result;
use crate::geometry::Point;
use crate::math::{Mat3, MatrixStack};
use crate::mesh::Mesh;
use crate::render::Renderer;

const SHOULDER_RIGHT: Point = Point::new(0.5, 0.0);
const SHOULDER_LEFT: Point = Point::new(-0.5, 0.0);
const HIP: Point = Point::new(0.1, -0.55);

/// A gray robot swinging its arms and legs about their joints.
#[derive(Debug, Clone)]
pub struct Robot {
    arms: Swing,
    legs: Swing,
    body: Vec<Mesh>,
    right_arm: Vec<Mesh>,
    left_arm: Vec<Mesh>,
    lower: Vec<Mesh>,
}

impl Robot {
    /// A robot standing straight.
    #[must_use]
    pub fn new() -> Self {
        let steel = Rgb::new(0.4, 0.4, 0.4);
        let joint = Rgb::new(0.5, 0.5, 0.5);
        let body = vec![
            Mesh::rect(-0.4, -0.5, 0.8, 0.6, steel),
            Mesh::rect(-0.25, 0.1, 0.5, 0.4, steel),
            Mesh::circle(Point::new(0.0, 0.3), 0.15, 20, Rgb::new(0.8, 0.8, 0.0)),
        ];
        let right_arm = vec![
            Mesh::circle(SHOULDER_RIGHT, 0.15, 6, joint),
            Mesh::rect(0.45, -0.53, 0.1, 0.4, steel),
        ];
        let left_arm = vec![
            Mesh::circle(SHOULDER_LEFT, 0.15, 6, joint),
            Mesh::rect(-0.55, -0.53, 0.1, 0.4, steel),
        ];
        let lower = vec![
            Mesh::rect(0.1, -0.95, 0.2, 0.5, steel),
            Mesh::circle(Point::new(0.2, -1.0), 0.15, 6, joint),
            Mesh::rect(-0.3, -0.95, 0.2, 0.5, steel),
            Mesh::circle(Point::new(-0.2, -1.0), 0.15, 6, joint),
        ];
        Self {
            arms: Swing::new(0.015, 0.3),
            legs: Swing::new(0.01, 0.1),
            body,
            right_arm,
            left_arm,
            lower,
        }
    }

    /// Current arm angle in radians.
    #[must_use]
    pub const fn arm_angle(&self) -> f32 {
        self.arms.value
    }

    /// Current leg angle in radians.
    #[must_use]
    pub const fn leg_angle(&self) -> f32 {
        self.legs.value
    }

    fn draw_limb(
        renderer: &mut Renderer,
        stack: &mut MatrixStack<Mat3>,
        pivot: Point,
        angle: f32,
        parts: &[Mesh],
    ) -> Result<()> {
        stack.scoped(|s| {
            s.apply(Mat3::identity().rotate_about(angle, pivot.x, pivot.y));
            parts
                .iter()
                .try_for_each(|mesh| draw_planar(renderer, mesh, s.top()))
        })
    }
}

impl Default for Robot {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for Robot {
    fn tick(&mut self) {
        self.arms.tick();
        self.legs.tick();
    }
}

impl Scene for Robot {
    fn name(&self) -> &'static str {
        "robot"
    }

    fn background(&self) -> Rgb {
        Rgb::BLACK
    }

    fn draw(&self, renderer: &mut Renderer) -> Result<()> {
        let mut stack = MatrixStack::new(Mat3::identity());
        for mesh in &self.body {
            draw_planar(renderer, mesh, stack.top())?;
        }
        let arm = self.arms.value;
        Self::draw_limb(renderer, &mut stack, SHOULDER_RIGHT, arm, &self.right_arm)?;
        Self::draw_limb(renderer, &mut stack, SHOULDER_LEFT, arm, &self.left_arm)?;
        Self::draw_limb(renderer, &mut stack, HIP, self.legs.value, &self.lower)
    }
}
