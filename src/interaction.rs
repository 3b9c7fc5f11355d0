//! Event-driven drawing tools.
//!
//! Each tool is a small state machine fed [`InputEvent`]s. Pointer positions
//! are canvas pixels (origin top-left). A tool answers every event with a
//! [`ToolOutput`] describing what the canvas should show next; the tools
//! never touch a renderer themselves.

use crate::color::{palette, Rgb, PALETTE};
use crate::error::Result;
use crate::geometry::{PixelPoint, Viewport};
use crate::raster::{bresenham_circle, bresenham_line, triangle_outline};
use crate::render::{DrawCall, Primitive, Renderer};
use log::debug;

/// Point size used by the circle tool and the direct line tool.
pub const DEFAULT_POINT_SIZE: f32 = 2.0;

/// Thinnest selectable stroke.
pub const MIN_THICKNESS: u32 = 1;

/// Thickest selectable stroke.
pub const MAX_THICKNESS: u32 = 9;

/// One user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse button pressed at a canvas pixel position.
    PointerDown {
        /// Column, may be fractional.
        x: f32,
        /// Row, may be fractional.
        y: f32,
    },
    /// Key pressed.
    Key(char),
}

impl InputEvent {
    /// Pointer press at `(x, y)`.
    #[must_use]
    pub const fn click(x: f32, y: f32) -> Self {
        Self::PointerDown { x, y }
    }
}

/// What the canvas should show after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// Clear, then draw these pixels as point sprites.
    Pixels {
        /// Rasterized shape.
        points: Vec<PixelPoint>,
        /// Stroke color.
        color: Rgb,
        /// Sprite side in pixels.
        point_size: f32,
    },
    /// Clear to the background and draw nothing.
    Clear,
    /// Leave the canvas as it is.
    Unchanged,
}

impl ToolOutput {
    /// Whether the canvas has to be redrawn.
    #[must_use]
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    /// Show this output on `renderer`.
    ///
    /// # Errors
    ///
    /// Propagates [`Renderer::draw_pixels`] errors.
    pub fn apply(&self, renderer: &mut Renderer, background: Rgb) -> Result<()> {
        match self {
            Self::Pixels {
                points,
                color,
                point_size,
            } => {
                renderer.clear(background);
                renderer.draw_pixels(points, *color, *point_size)
            }
            Self::Clear => {
                renderer.clear(background);
                Ok(())
            }
            Self::Unchanged => Ok(()),
        }
    }
}

/// A state machine over input events.
pub trait Tool {
    /// What the canvas shows before any input.
    fn initial(&self) -> ToolOutput;

    /// Feed one event.
    fn handle(&mut self, event: InputEvent) -> ToolOutput;
}

// ============================================================================
// Circle tool
// ============================================================================

/// Two-click circle: the first click picks the center, the second the radius.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircleTool {
    center: Option<PixelPoint>,
    color: Rgb,
}

impl CircleTool {
    /// A black circle tool waiting for a center.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Center picked by the pending first click.
    #[must_use]
    pub const fn pending_center(&self) -> Option<PixelPoint> {
        self.center
    }

    fn circle(&self, center: PixelPoint, radius: f32) -> ToolOutput {
        ToolOutput::Pixels {
            points: bresenham_circle(center, radius),
            color: self.color,
            point_size: DEFAULT_POINT_SIZE,
        }
    }
}

impl Tool for CircleTool {
    fn initial(&self) -> ToolOutput {
        self.circle(PixelPoint::new(0, 0), 0.0)
    }

    fn handle(&mut self, event: InputEvent) -> ToolOutput {
        let InputEvent::PointerDown { x, y } = event else {
            debug!("circle tool ignores {event:?}");
            return ToolOutput::Unchanged;
        };
        let click = PixelPoint::round(x, y);
        match self.center.take() {
            None => {
                self.center = Some(click);
                self.circle(click, 0.0)
            }
            Some(center) => self.circle(center, center.distance(click)),
        }
    }
}

// ============================================================================
// Line / triangle tool
// ============================================================================

/// Shape drawn by [`LineTool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Two clicks draw a segment.
    #[default]
    Line,
    /// Three clicks draw a triangle outline.
    Triangle,
}

/// What the digit keys currently adjust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    /// Digits are ignored.
    #[default]
    None,
    /// Digits `0-9` pick a palette entry.
    ColorSelect,
    /// Digits `1-9` set the stroke thickness.
    ThicknessSelect,
}

/// Keyboard layout of [`LineTool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyBinding {
    /// `k` arms color selection and `e` arms thickness selection before
    /// digits take effect.
    #[default]
    ToolModes,
    /// Digits always pick a color, `c` picks a random one and the thickness
    /// is fixed.
    Direct,
}

/// Line and triangle drawing with palette and thickness keys.
///
/// Clicks fill `p1`, `p2` (and `p3` in triangle mode); the shape is emitted
/// once the last point arrives. Completed points survive mode switches, so a
/// color change redraws the last finished shape.
#[derive(Debug, Clone)]
pub struct LineTool {
    binding: KeyBinding,
    mode: DrawMode,
    tool: ToolMode,
    stage: u8,
    points: [Option<PixelPoint>; 3],
    color: Rgb,
    thickness: u32,
    rng: fastrand::Rng,
}

impl LineTool {
    /// A tool in line mode, blue, thickness 2.
    #[must_use]
    pub fn new(binding: KeyBinding) -> Self {
        Self::with_rng(binding, fastrand::Rng::new())
    }

    /// Like [`LineTool::new`] with a caller-seeded random source for `c`.
    #[must_use]
    pub fn with_rng(binding: KeyBinding, rng: fastrand::Rng) -> Self {
        Self {
            binding,
            mode: DrawMode::Line,
            tool: ToolMode::None,
            stage: 0,
            points: [None; 3],
            color: PALETTE[0],
            thickness: 2,
            rng,
        }
    }

    /// Current shape mode.
    #[must_use]
    pub const fn mode(&self) -> DrawMode {
        self.mode
    }

    /// What digits currently adjust.
    #[must_use]
    pub const fn tool_mode(&self) -> ToolMode {
        self.tool
    }

    /// Clicks collected toward the current shape.
    #[must_use]
    pub const fn stage(&self) -> u8 {
        self.stage
    }

    /// Stroke color.
    #[must_use]
    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Stroke thickness in pixels.
    #[must_use]
    pub const fn thickness(&self) -> u32 {
        self.thickness
    }

    fn point_size(&self) -> f32 {
        match self.binding {
            KeyBinding::ToolModes => self.thickness as f32,
            KeyBinding::Direct => DEFAULT_POINT_SIZE,
        }
    }

    fn pixels(&self, points: Vec<PixelPoint>) -> ToolOutput {
        ToolOutput::Pixels {
            points,
            color: self.color,
            point_size: self.point_size(),
        }
    }

    fn default_line(&self) -> ToolOutput {
        let origin = PixelPoint::new(0, 0);
        self.pixels(bresenham_line(origin, origin))
    }

    /// Redraw the last finished shape, or the mode's idle picture.
    fn redraw(&self) -> ToolOutput {
        let complete = self.stage == 0;
        match (self.mode, self.points) {
            (DrawMode::Line, [Some(a), Some(b), _]) if complete => {
                self.pixels(bresenham_line(a, b))
            }
            (DrawMode::Line, _) => self.default_line(),
            (DrawMode::Triangle, [Some(a), Some(b), Some(c)]) if complete => {
                self.pixels(triangle_outline(a, b, c))
            }
            (DrawMode::Triangle, _) => ToolOutput::Clear,
        }
    }

    fn click(&mut self, p: PixelPoint) -> ToolOutput {
        let last = match self.mode {
            DrawMode::Line => 1,
            DrawMode::Triangle => 2,
        };
        let slot = usize::from(self.stage);
        self.points[slot] = Some(p);
        if slot < last {
            self.stage += 1;
            return ToolOutput::Unchanged;
        }
        self.stage = 0;
        self.redraw()
    }

    fn key(&mut self, key: char) -> ToolOutput {
        match key.to_ascii_lowercase() {
            'r' => {
                self.mode = DrawMode::Line;
                self.stage = 0;
                self.tool = ToolMode::None;
                return self.default_line();
            }
            't' => {
                self.mode = DrawMode::Triangle;
                self.stage = 0;
                self.tool = ToolMode::None;
                return ToolOutput::Clear;
            }
            _ => {}
        }

        let applied = match self.binding {
            KeyBinding::ToolModes => self.tool_mode_key(key),
            KeyBinding::Direct => self.direct_key(key),
        };
        match applied {
            KeyEffect::Redraw => self.redraw(),
            KeyEffect::Armed => ToolOutput::Unchanged,
            KeyEffect::Ignored => {
                debug!("line tool ignores key {key:?} in {:?}", self.tool);
                ToolOutput::Unchanged
            }
        }
    }

    fn tool_mode_key(&mut self, key: char) -> KeyEffect {
        match (key.to_ascii_lowercase(), self.tool) {
            ('k', _) => {
                self.tool = ToolMode::ColorSelect;
                KeyEffect::Armed
            }
            ('e', _) => {
                self.tool = ToolMode::ThicknessSelect;
                KeyEffect::Armed
            }
            (d, ToolMode::ColorSelect) if d.is_ascii_digit() => self.select_color(d),
            (d @ '1'..='9', ToolMode::ThicknessSelect) => {
                let value = d.to_digit(10).unwrap_or(MIN_THICKNESS);
                self.thickness = value.clamp(MIN_THICKNESS, MAX_THICKNESS);
                KeyEffect::Redraw
            }
            _ => KeyEffect::Ignored,
        }
    }

    fn direct_key(&mut self, key: char) -> KeyEffect {
        match key {
            d if d.is_ascii_digit() => self.select_color(d),
            'c' | 'C' => {
                self.color = Rgb::random(&mut self.rng);
                KeyEffect::Redraw
            }
            _ => KeyEffect::Ignored,
        }
    }

    fn select_color(&mut self, digit: char) -> KeyEffect {
        match digit.to_digit(10).and_then(|i| palette(i as usize)) {
            Some(color) => {
                self.color = color;
                KeyEffect::Redraw
            }
            None => KeyEffect::Ignored,
        }
    }
}

impl Default for LineTool {
    fn default() -> Self {
        Self::new(KeyBinding::default())
    }
}

impl Tool for LineTool {
    fn initial(&self) -> ToolOutput {
        self.default_line()
    }

    fn handle(&mut self, event: InputEvent) -> ToolOutput {
        match event {
            InputEvent::PointerDown { x, y } => self.click(PixelPoint::round(x, y)),
            InputEvent::Key(k) => self.key(k),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyEffect {
    Redraw,
    Armed,
    Ignored,
}

// ============================================================================
// Point cloud
// ============================================================================

/// Accumulates clicked points as NDC positions.
#[derive(Debug, Clone)]
pub struct PointCloud {
    width: f32,
    height: f32,
    positions: Vec<f32>,
    color: Rgb,
    rng: fastrand::Rng,
}

impl PointCloud {
    /// Sprite side in pixels.
    pub const POINT_SIZE: f32 = 20.0;

    /// An empty dark-red cloud on a canvas the size of `viewport`.
    #[must_use]
    pub fn new(viewport: Viewport, rng: fastrand::Rng) -> Self {
        Self {
            width: viewport.width() as f32,
            height: viewport.height() as f32,
            positions: Vec::new(),
            color: Rgb::new(0.8, 0.0, 0.0),
            rng,
        }
    }

    /// Feed one event; returns whether the cloud must be redrawn.
    ///
    /// A click appends `((2/w)·x − 1, −(2/h)·y + 1)`; `c` picks a random
    /// color.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.positions.push(2.0 / self.width * x - 1.0);
                self.positions.push(-2.0 / self.height * y + 1.0);
                true
            }
            InputEvent::Key('c') => {
                self.color = Rgb::random(&mut self.rng);
                true
            }
            InputEvent::Key(k) => {
                debug!("point cloud ignores key {k:?}");
                false
            }
        }
    }

    /// Collected positions, interleaved `[x0, y0, x1, y1, ...]`.
    #[must_use]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Current color.
    #[must_use]
    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// The cloud as a draw call.
    #[must_use]
    pub fn draw_call(&self) -> DrawCall<'_> {
        DrawCall::new(&self.positions, 2, Primitive::Points)
            .with_color(self.color)
            .with_point_size(Self::POINT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixels(out: &ToolOutput) -> &[PixelPoint] {
        match out {
            ToolOutput::Pixels { points, .. } => points,
            other => panic!("expected pixels, got {other:?}"),
        }
    }

    #[test]
    fn test_circle_tool_two_clicks() {
        let mut tool = CircleTool::new();
        assert_eq!(pixels(&tool.initial()).len(), 8);

        let first = tool.handle(InputEvent::click(10.4, 20.6));
        assert_eq!(tool.pending_center(), Some(PixelPoint::new(10, 21)));
        assert!(pixels(&first).iter().all(|p| *p == PixelPoint::new(10, 21)));

        let second = tool.handle(InputEvent::click(13.0, 25.0));
        assert_eq!(tool.pending_center(), None);
        // hypot(3, 4) = 5
        let pts = pixels(&second);
        assert!(pts.contains(&PixelPoint::new(15, 21)));
        assert!(pts.contains(&PixelPoint::new(10, 26)));
    }

    #[test]
    fn test_circle_tool_ignores_keys() {
        let mut tool = CircleTool::new();
        assert_eq!(tool.handle(InputEvent::Key('x')), ToolOutput::Unchanged);
    }

    #[test]
    fn test_line_tool_initial_state() {
        let tool = LineTool::default();
        assert_eq!(tool.mode(), DrawMode::Line);
        assert_eq!(tool.tool_mode(), ToolMode::None);
        assert_eq!(tool.thickness(), 2);
        assert_eq!(tool.color(), PALETTE[0]);
        assert_eq!(pixels(&tool.initial()), &[PixelPoint::new(0, 0)]);
    }

    #[test]
    fn test_line_tool_two_clicks_draw_line() {
        let mut tool = LineTool::default();
        assert_eq!(tool.handle(InputEvent::click(0.0, 0.0)), ToolOutput::Unchanged);
        assert_eq!(tool.stage(), 1);
        let out = tool.handle(InputEvent::click(3.0, 1.0));
        assert_eq!(tool.stage(), 0);
        assert_eq!(
            pixels(&out),
            &[
                PixelPoint::new(0, 0),
                PixelPoint::new(1, 0),
                PixelPoint::new(2, 1),
                PixelPoint::new(3, 1)
            ]
        );
    }

    #[test]
    fn test_triangle_mode_needs_three_clicks() {
        let mut tool = LineTool::default();
        assert_eq!(tool.handle(InputEvent::Key('T')), ToolOutput::Clear);
        assert_eq!(tool.mode(), DrawMode::Triangle);
        assert!(!tool.handle(InputEvent::click(0.0, 0.0)).is_change());
        assert!(!tool.handle(InputEvent::click(10.0, 0.0)).is_change());
        let out = tool.handle(InputEvent::click(0.0, 10.0));
        assert_eq!(pixels(&out).len(), 11 + 11 + 11);
        assert_eq!(tool.stage(), 0);
    }

    #[test]
    fn test_r_resets_to_default_line() {
        let mut tool = LineTool::default();
        tool.handle(InputEvent::Key('k'));
        tool.handle(InputEvent::click(5.0, 5.0));
        let out = tool.handle(InputEvent::Key('r'));
        assert_eq!(tool.stage(), 0);
        assert_eq!(tool.tool_mode(), ToolMode::None);
        assert_eq!(pixels(&out), &[PixelPoint::new(0, 0)]);
    }

    #[test]
    fn test_digits_need_armed_tool() {
        let mut tool = LineTool::default();
        assert_eq!(tool.handle(InputEvent::Key('1')), ToolOutput::Unchanged);
        assert_eq!(tool.color(), PALETTE[0]);

        assert_eq!(tool.handle(InputEvent::Key('K')), ToolOutput::Unchanged);
        let out = tool.handle(InputEvent::Key('1'));
        assert_eq!(tool.color(), PALETTE[1]);
        // nothing complete yet: default line in the new color
        assert_eq!(
            out,
            ToolOutput::Pixels {
                points: vec![PixelPoint::new(0, 0)],
                color: PALETTE[1],
                point_size: 2.0
            }
        );
    }

    #[test]
    fn test_thickness_select() {
        let mut tool = LineTool::default();
        tool.handle(InputEvent::click(0.0, 0.0));
        tool.handle(InputEvent::click(4.0, 0.0));
        tool.handle(InputEvent::Key('e'));
        // zero is not a thickness
        assert_eq!(tool.handle(InputEvent::Key('0')), ToolOutput::Unchanged);
        let out = tool.handle(InputEvent::Key('7'));
        assert_eq!(tool.thickness(), 7);
        match out {
            ToolOutput::Pixels {
                points, point_size, ..
            } => {
                assert_eq!(points.len(), 5);
                assert!((point_size - 7.0).abs() < f32::EPSILON);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_digit_redraws_triangle_only_when_complete() {
        let mut tool = LineTool::default();
        tool.handle(InputEvent::Key('t'));
        tool.handle(InputEvent::click(0.0, 0.0));
        tool.handle(InputEvent::Key('k'));
        assert_eq!(tool.handle(InputEvent::Key('2')), ToolOutput::Clear);
    }

    #[test]
    fn test_points_persist_across_modes() {
        let mut tool = LineTool::default();
        tool.handle(InputEvent::click(0.0, 0.0));
        tool.handle(InputEvent::click(2.0, 2.0));
        tool.handle(InputEvent::Key('t'));
        tool.handle(InputEvent::Key('r'));
        tool.handle(InputEvent::Key('k'));
        let out = tool.handle(InputEvent::Key('3'));
        assert_eq!(pixels(&out).len(), 3);
    }

    #[test]
    fn test_direct_binding() {
        let mut tool = LineTool::with_rng(KeyBinding::Direct, fastrand::Rng::with_seed(3));
        let out = tool.handle(InputEvent::Key('5'));
        assert_eq!(tool.color(), PALETTE[5]);
        assert!(out.is_change());
        assert_eq!(tool.handle(InputEvent::Key('e')), ToolOutput::Unchanged);
        tool.handle(InputEvent::Key('C'));
        assert_ne!(tool.color(), PALETTE[5]);
        assert_eq!(tool.thickness(), 2);
    }

    #[test]
    fn test_point_cloud_maps_clicks() {
        let vp = Viewport::new(200, 100).unwrap();
        let mut cloud = PointCloud::new(vp, fastrand::Rng::with_seed(1));
        assert!(cloud.handle(InputEvent::click(0.0, 0.0)));
        assert!(cloud.handle(InputEvent::click(100.0, 50.0)));
        assert_eq!(cloud.positions(), &[-1.0, 1.0, 0.0, 0.0]);
        assert!(!cloud.handle(InputEvent::Key('x')));
        assert!(cloud.handle(InputEvent::Key('c')));
        assert_eq!(cloud.draw_call().validate().unwrap(), 2);
    }
}
