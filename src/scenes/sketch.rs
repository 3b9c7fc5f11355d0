//! Scripted sessions of the interactive drawing tools.
//!
//! Each frame feeds the next scripted event to the tool; the canvas keeps the
//! last output that changed it.

use super::Scene;
use crate::animation::Animation;
use crate::color::Rgb;
use crate::error::Result;
use crate::geometry::Viewport;
use crate::interaction::{CircleTool, InputEvent, KeyBinding, LineTool, PointCloud, Tool, ToolOutput};
use crate::render::Renderer;
use std::collections::VecDeque;

/// A drawing tool replaying a fixed event script, one event per frame.
#[derive(Debug, Clone)]
pub struct Sketch<T> {
    name: &'static str,
    tool: T,
    script: VecDeque<InputEvent>,
    canvas: ToolOutput,
}

impl<T: Tool> Sketch<T> {
    /// Start `tool` on its initial picture with `script` queued.
    pub fn new(name: &'static str, tool: T, script: impl IntoIterator<Item = InputEvent>) -> Self {
        let canvas = tool.initial();
        Self {
            name,
            tool,
            script: script.into_iter().collect(),
            canvas,
        }
    }

    /// The tool being driven.
    pub fn tool(&self) -> &T {
        &self.tool
    }

    /// Events not yet replayed.
    pub fn pending(&self) -> usize {
        self.script.len()
    }

    /// What the canvas currently shows.
    pub fn canvas(&self) -> &ToolOutput {
        &self.canvas
    }
}

impl Sketch<LineTool> {
    /// Draw a line, recolor it red, then thicken it to 4 pixels.
    #[must_use]
    pub fn line_session(width: u32, height: u32, rng: fastrand::Rng) -> Self {
        let at = scaler(width, height);
        let script = [
            at(0.1, 0.2),
            at(0.9, 0.8),
            InputEvent::Key('k'),
            InputEvent::Key('1'),
            InputEvent::Key('e'),
            InputEvent::Key('4'),
        ];
        Self::new("line", LineTool::with_rng(KeyBinding::ToolModes, rng), script)
    }

    /// Switch to triangle mode, click three corners, then pick orange.
    #[must_use]
    pub fn triangle_session(width: u32, height: u32, rng: fastrand::Rng) -> Self {
        let at = scaler(width, height);
        let script = [
            InputEvent::Key('t'),
            at(0.5, 0.1),
            at(0.1, 0.9),
            at(0.9, 0.9),
            InputEvent::Key('7'),
        ];
        Self::new("triangle", LineTool::with_rng(KeyBinding::Direct, rng), script)
    }
}

impl Sketch<CircleTool> {
    /// Click a center, then a point on the rim.
    #[must_use]
    pub fn circle_session(width: u32, height: u32) -> Self {
        let at = scaler(width, height);
        Self::new("circle", CircleTool::new(), [at(0.5, 0.5), at(0.8, 0.5)])
    }
}

impl<T: Tool> Animation for Sketch<T> {
    fn tick(&mut self) {
        if let Some(event) = self.script.pop_front() {
            let out = self.tool.handle(event);
            if out.is_change() {
                self.canvas = out;
            }
        }
    }
}

impl<T: Tool> Scene for Sketch<T> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn background(&self) -> Rgb {
        Rgb::WHITE
    }

    fn draw(&self, renderer: &mut Renderer) -> Result<()> {
        self.canvas.apply(renderer, self.background())
    }
}

/// A point cloud replaying a fixed click script.
#[derive(Debug, Clone)]
pub struct PointSketch {
    cloud: PointCloud,
    script: VecDeque<InputEvent>,
}

impl PointSketch {
    /// Five clicks along a diagonal, then a random recolor.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDimensions`] for a canvas smaller than
    /// 2×2.
    pub fn session(width: u32, height: u32, rng: fastrand::Rng) -> Result<Self> {
        let cloud = PointCloud::new(Viewport::new(width, height)?, rng);
        let at = scaler(width, height);
        let mut script: VecDeque<InputEvent> =
            (1..=5).map(|i| at(i as f32 / 6.0, i as f32 / 6.0)).collect();
        script.push_back(InputEvent::Key('c'));
        Ok(Self { cloud, script })
    }

    /// The cloud being built.
    #[must_use]
    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }
}

impl Animation for PointSketch {
    fn tick(&mut self) {
        if let Some(event) = self.script.pop_front() {
            self.cloud.handle(event);
        }
    }
}

impl Scene for PointSketch {
    fn name(&self) -> &'static str {
        "points"
    }

    fn background(&self) -> Rgb {
        Rgb::WHITE
    }

    fn draw(&self, renderer: &mut Renderer) -> Result<()> {
        renderer.draw(&self.cloud.draw_call())
    }
}

/// Click at a fraction of the canvas size.
fn scaler(width: u32, height: u32) -> impl Fn(f32, f32) -> InputEvent {
    let (w, h) = (width as f32, height as f32);
    move |fx, fy| InputEvent::click(fx * w, fy * h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Ticker;
    use crate::color::PALETTE;
    use crate::interaction::DrawMode;

    #[test]
    fn test_line_session_replays_script() {
        let mut sketch = Sketch::line_session(100, 100, fastrand::Rng::with_seed(1));
        assert_eq!(sketch.pending(), 6);
        Ticker::new().step_n(&mut sketch, 6);
        assert_eq!(sketch.pending(), 0);
        assert_eq!(sketch.tool().color(), PALETTE[1]);
        assert_eq!(sketch.tool().thickness(), 4);
        match sketch.canvas() {
            ToolOutput::Pixels { points, .. } => {
                assert_eq!(points.first().map(|p| (p.x, p.y)), Some((10, 20)));
                assert_eq!(points.last().map(|p| (p.x, p.y)), Some((90, 80)));
            }
            other => panic!("unexpected canvas {other:?}"),
        }
    }

    #[test]
    fn test_extra_frames_keep_last_picture() {
        let mut sketch = Sketch::circle_session(50, 50);
        Ticker::new().step_n(&mut sketch, 2);
        let done = sketch.canvas().clone();
        Ticker::new().step_n(&mut sketch, 10);
        assert_eq!(sketch.canvas(), &done);
    }

    #[test]
    fn test_triangle_session_ends_in_triangle_mode() {
        let mut sketch = Sketch::triangle_session(40, 40, fastrand::Rng::with_seed(1));
        Ticker::new().step_n(&mut sketch, 5);
        assert_eq!(sketch.tool().mode(), DrawMode::Triangle);
        assert_eq!(sketch.tool().color(), PALETTE[7]);
    }

    #[test]
    fn test_point_sketch_collects_clicks() {
        let mut sketch = PointSketch::session(60, 60, fastrand::Rng::with_seed(2)).unwrap();
        Ticker::new().step_n(&mut sketch, 3);
        assert_eq!(sketch.cloud().positions().len(), 6);
    }
}
