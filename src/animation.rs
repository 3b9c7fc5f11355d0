//! Frame-stepped animation state.
//!
//! An [`Animation`] advances by one frame per [`tick`](Animation::tick);
//! nothing schedules itself. [`Ticker`] drives any animation for a fixed
//! number of frames, which keeps animated state reproducible in tests and
//! in the headless binary.

use crate::camera::OrbitCamera;
use std::f32::consts::TAU;

/// State that advances one frame at a time.
pub trait Animation {
    /// Advance by one frame.
    fn tick(&mut self);
}

impl Animation for OrbitCamera {
    fn tick(&mut self) {
        self.advance();
    }
}

/// Counts frames and single-steps animations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ticker {
    frames: u64,
}

impl Ticker {
    /// A ticker at frame 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { frames: 0 }
    }

    /// Frames stepped so far.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance `animation` by one frame.
    pub fn step<A: Animation + ?Sized>(&mut self, animation: &mut A) {
        animation.tick();
        self.frames += 1;
    }

    /// Advance `animation` by `n` frames.
    pub fn step_n<A: Animation + ?Sized>(&mut self, animation: &mut A, n: u64) {
        for _ in 0..n {
            self.step(animation);
        }
    }
}

/// Constant angular velocity, wrapped to `[0, 2π)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    /// Current angle in radians.
    pub angle: f32,
    /// Radians per frame.
    pub step: f32,
}

impl Spin {
    /// Start at angle 0.
    #[must_use]
    pub const fn new(step: f32) -> Self {
        Self { angle: 0.0, step }
    }
}

impl Animation for Spin {
    fn tick(&mut self) {
        self.angle = (self.angle + self.step).rem_euclid(TAU);
    }
}

/// A value bouncing between `-limit` and `limit`.
///
/// The direction reverses on the frame the value first passes a limit, so
/// the value may overshoot by less than one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swing {
    /// Current value.
    pub value: f32,
    /// Magnitude of the change per frame.
    pub step: f32,
    /// Turning point.
    pub limit: f32,
    direction: f32,
}

impl Swing {
    /// Start at 0 moving toward `+limit`.
    #[must_use]
    pub const fn new(step: f32, limit: f32) -> Self {
        Self {
            value: 0.0,
            step,
            limit,
            direction: 1.0,
        }
    }

    /// `1.0` while increasing, `-1.0` while decreasing.
    #[must_use]
    pub const fn direction(&self) -> f32 {
        self.direction
    }
}

impl Animation for Swing {
    fn tick(&mut self) {
        self.value += self.step * self.direction;
        if self.value > self.limit || self.value < -self.limit {
            self.direction = -self.direction;
        }
    }
}

/// Horizontal travel that re-enters from the opposite edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drive {
    /// Current horizontal offset.
    pub x: f32,
    /// Offset change per frame.
    pub speed: f32,
    /// Once `x` exceeds this, it jumps to `-bound`.
    pub bound: f32,
    /// Accumulated wheel rotation in radians (clockwise is negative).
    pub wheel_angle: f32,
    /// Wheel rotation per frame.
    pub wheel_step: f32,
}

impl Drive {
    /// Start at `x = 0`.
    #[must_use]
    pub const fn new(speed: f32, bound: f32, wheel_step: f32) -> Self {
        Self {
            x: 0.0,
            speed,
            bound,
            wheel_angle: 0.0,
            wheel_step,
        }
    }
}

impl Animation for Drive {
    fn tick(&mut self) {
        self.x += self.speed;
        if self.x > self.bound {
            self.x = -self.bound;
        }
        self.wheel_angle = (self.wheel_angle - self.wheel_step).rem_euclid(TAU);
    }
}

/// Sinusoidal scale `1 + sin(t) · amplitude`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    /// Phase in radians.
    pub time: f32,
    /// Phase change per frame.
    pub step: f32,
    /// Peak deviation from 1.
    pub amplitude: f32,
}

impl Pulse {
    /// Start at phase 0 (scale 1).
    #[must_use]
    pub const fn new(step: f32, amplitude: f32) -> Self {
        Self {
            time: 0.0,
            step,
            amplitude,
        }
    }

    /// Current scale factor.
    #[must_use]
    pub fn scale(&self) -> f32 {
        1.0 + self.time.sin() * self.amplitude
    }
}

impl Animation for Pulse {
    fn tick(&mut self) {
        self.time += self.step;
    }
}
