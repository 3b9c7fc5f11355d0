//! Cohen-Sutherland line clipping.

use crate::geometry::{Line, Point};

/// 4-bit Cohen-Sutherland region code of a point relative to a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RegionCode(u8);

impl RegionCode {
    /// Inside the window.
    pub const INSIDE: Self = Self(0b0000);
    /// Left of `xmin`.
    pub const LEFT: Self = Self(0b0001);
    /// Right of `xmax`.
    pub const RIGHT: Self = Self(0b0010);
    /// Below `ymin`.
    pub const BOTTOM: Self = Self(0b0100);
    /// Above `ymax`.
    pub const TOP: Self = Self(0b1000);

    /// Raw bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True if no bit is set.
    #[must_use]
    pub const fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// True if every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if `self` and `other` share a bit.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl std::ops::BitOr for RegionCode {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for RegionCode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Axis-aligned clipping window `[xmin, xmax] × [ymin, ymax]` (y up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipWindow {
    /// Left edge.
    pub xmin: f32,
    /// Bottom edge.
    pub ymin: f32,
    /// Right edge.
    pub xmax: f32,
    /// Top edge.
    pub ymax: f32,
}

impl ClipWindow {
    /// Create a window from two opposite corners, in any order.
    #[must_use]
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            xmin: x0.min(x1),
            ymin: y0.min(y1),
            xmax: x0.max(x1),
            ymax: y0.max(y1),
        }
    }

    /// Region code of `(x, y)`.
    #[must_use]
    pub fn region_code(&self, x: f32, y: f32) -> RegionCode {
        let mut code = RegionCode::INSIDE;
        if x < self.xmin {
            code |= RegionCode::LEFT;
        } else if x > self.xmax {
            code |= RegionCode::RIGHT;
        }
        if y < self.ymin {
            code |= RegionCode::BOTTOM;
        } else if y > self.ymax {
            code |= RegionCode::TOP;
        }
        code
    }

    /// True if the point lies inside or on the window border.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.region_code(p.x, p.y).is_inside()
    }

    /// Clip a segment to the window.
    ///
    /// Returns the visible part of the segment, or `None` when the segment
    /// lies entirely outside. Outside endpoints are moved onto the window
    /// edges in the order top, bottom, right, left.
    #[must_use]
    pub fn clip_line(&self, line: Line) -> Option<Line> {
        let (mut p1, mut p2) = (line.start, line.end);
        let mut code1 = self.region_code(p1.x, p1.y);
        let mut code2 = self.region_code(p2.x, p2.y);

        loop {
            if (code1 | code2).is_inside() {
                return Some(Line::new(p1, p2));
            }
            if code1.intersects(code2) {
                return None;
            }

            let code_out = if code1.is_inside() { code2 } else { code1 };
            let dx = p2.x - p1.x;
            let dy = p2.y - p1.y;

            let hit = if code_out.contains(RegionCode::TOP) {
                let x = if dy == 0.0 { p1.x } else { p1.x + dx * ((self.ymax - p1.y) / dy) };
                Point::new(x, self.ymax)
            } else if code_out.contains(RegionCode::BOTTOM) {
                let x = if dy == 0.0 { p1.x } else { p1.x + dx * ((self.ymin - p1.y) / dy) };
                Point::new(x, self.ymin)
            } else if code_out.contains(RegionCode::RIGHT) {
                let y = if dx == 0.0 { p1.y } else { p1.y + dy * ((self.xmax - p1.x) / dx) };
                Point::new(self.xmax, y)
            } else {
                let y = if dx == 0.0 { p1.y } else { p1.y + dy * ((self.xmin - p1.x) / dx) };
                Point::new(self.xmin, y)
            };

            if code_out == code1 {
                p1 = hit;
                code1 = self.region_code(p1.x, p1.y);
            } else {
                p2 = hit;
                code2 = self.region_code(p2.x, p2.y);
            }
        }
    }
}
