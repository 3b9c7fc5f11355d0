use super::{draw_planar, Scene};
use crate::animation::{Animation, Drive};
use crate::color::Rgb;
use crate::error::Result;
use crate::geometry::Point;
use crate::math::Mat3;
use crate::mesh::Mesh;
use crate::render::Renderer;

const WHEEL_CENTERS: [(f32, f32); 2] = [(-0.4, -0.2), (0.4, -0.2)];

/// A red car driving left to right over a road, re-entering on the left.
#[derive(Debug, Clone)]
pub struct Car {
    drive: Drive,
    scenery: Vec<Mesh>,
    body: Vec<Mesh>,
    wheels: Vec<Mesh>,
}

impl Car {
    /// A car parked at the center.
    #[must_use]
    pub fn new() -> Self {
        let scenery = vec![
            Mesh::trapezoid(-1.0, -0.45, 2.0, 2.0, 0.3, Rgb::new(0.5, 0.5, 0.5)),
            Mesh::trapezoid(-1.0, -1.0, 4.0, 4.0, 0.6, Rgb::new(0.0, 0.8, 0.0)),
        ];
        let red = Rgb::new(1.0, 0.0, 0.0);
        let body = vec![
            Mesh::trapezoid(-0.6, -0.2, 1.2, 1.2, 0.3, red),
            Mesh::trapezoid(-0.4, 0.1, 0.7, 0.7, 0.3, red),
            Mesh::trapezoid(-0.15, 0.1, 0.4, 0.4, 0.25, Rgb::new(0.2, 0.5, 1.0)),
        ];
        let wheels = WHEEL_CENTERS
            .iter()
            .map(|&(x, y)| Mesh::circle(Point::new(x, y), 0.15, 20, Rgb::new(0.1, 0.1, 0.1)))
            .collect();
        Self {
            drive: Drive::new(0.005, 1.5, 0.05),
            scenery,
            body,
            wheels,
        }
    }

    /// Horizontal offset of the car.
    #[must_use]
    pub const fn position(&self) -> f32 {
        self.drive.x
    }
}

impl Default for Car {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for Car {
    fn tick(&mut self) {
        self.drive.tick();
    }
}

impl Scene for Car {
    fn name(&self) -> &'static str {
        "car"
    }

    fn background(&self) -> Rgb {
        Rgb::new(0.8, 0.9, 1.0)
    }

    fn draw(&self, renderer: &mut Renderer) -> Result<()> {
        for mesh in &self.scenery {
            draw_planar(renderer, mesh, Mat3::identity())?;
        }
        let carried = Mat3::from_translation(self.drive.x, 0.0);
        for mesh in &self.body {
            draw_planar(renderer, mesh, carried)?;
        }
        for (wheel, &(cx, cy)) in self.wheels.iter().zip(&WHEEL_CENTERS) {
            let spun = carried.rotate_about(self.drive.wheel_angle, cx, cy);
            draw_planar(renderer, wheel, spun)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Ticker;

    #[test]
    fn test_car_moves_right_and_wraps() {
        let mut car = Car::new();
        Ticker::new().step_n(&mut car, 100);
        assert!((car.position() - 0.5).abs() < 1e-4);
        Ticker::new().step_n(&mut car, 250);
        assert!(car.position() < 0.0);
    }

    #[test]
    fn test_body_follows_position() {
        let mut car = Car::new();
        let mut r = Renderer::new(101, 101).unwrap();
        car.render(&mut r).unwrap();
        let red = Rgb::new(1.0, 0.0, 0.0).to_rgba();
        // chassis spans x in [-0.6, 0.6]
        assert_eq!(r.framebuffer().get_pixel(25, 50), Some(red));

        car.drive.x = 1.0;
        car.render(&mut r).unwrap();
        assert_ne!(r.framebuffer().get_pixel(25, 50), Some(red));
        assert_eq!(r.framebuffer().get_pixel(75, 50), Some(red));
    }

    #[test]
    fn test_wheels_stay_on_road() {
        let car = Car::new();
        let mut r = Renderer::new(101, 101).unwrap();
        car.render(&mut r).unwrap();
        let tire = Rgb::new(0.1, 0.1, 0.1).to_rgba();
        // wheel center at NDC (-0.4, -0.2)
        assert_eq!(r.framebuffer().get_pixel(30, 60), Some(tire));
    }
}
