//! Color types and the fixed drawing palette.
//!
//! [`Rgba`] is the 8-bit storage format of the framebuffer. [`Rgb`] is the
//! floating-point triple used for vertex colors and palette entries, matching
//! the `[0.0, 1.0]` range a shader would receive.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Linear interpolation between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        Self::new(
            (f32::from(self.r) * inv_t + f32::from(other.r) * t) as u8,
            (f32::from(self.g) * inv_t + f32::from(other.g) * t) as u8,
            (f32::from(self.b) * inv_t + f32::from(other.b) * t) as u8,
            (f32::from(self.a) * inv_t + f32::from(other.a) * t) as u8,
        )
    }
}

/// Floating-point RGB triple with components in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// White.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Create a new color.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Read a color from the first three values of a slice.
    ///
    /// Returns `None` if the slice is shorter than three values.
    #[must_use]
    pub fn from_slice(values: &[f32]) -> Option<Self> {
        match values {
            [r, g, b, ..] => Some(Self::new(*r, *g, *b)),
            _ => None,
        }
    }

    /// Draw a random color from the given generator.
    #[must_use]
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        Self::new(rng.f32(), rng.f32(), rng.f32())
    }

    /// Convert to an opaque 8-bit color, clamping out-of-range components.
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba::rgb(quantize(self.r), quantize(self.g), quantize(self.b))
    }

    /// Weighted blend of three colors (barycentric interpolation).
    ///
    /// Three equal colors are returned unchanged, so flat-shaded triangles
    /// quantize exactly like their vertex color.
    #[must_use]
    pub fn blend3(a: Self, b: Self, c: Self, w: [f32; 3]) -> Self {
        if a == b && b == c {
            return a;
        }
        Self::new(
            a.r * w[0] + b.r * w[1] + c.r * w[2],
            a.g * w[0] + b.g * w[1] + c.g * w[2],
            a.b * w[0] + b.b * w[1] + c.b * w[2],
        )
    }

    /// Flatten into `[r, g, b]`.
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Rgb> for Rgba {
    fn from(rgb: Rgb) -> Self {
        rgb.to_rgba()
    }
}

/// The ten-entry drawing palette selected with the digit keys.
///
/// Entries, by index: blue, red, green, yellow, magenta, cyan, gray, orange,
/// purple, black.
pub const PALETTE: [Rgb; 10] = [
    Rgb::new(0.0, 0.0, 1.0),
    Rgb::new(1.0, 0.0, 0.0),
    Rgb::new(0.0, 1.0, 0.0),
    Rgb::new(1.0, 1.0, 0.0),
    Rgb::new(1.0, 0.0, 1.0),
    Rgb::new(0.0, 1.0, 1.0),
    Rgb::new(0.5, 0.5, 0.5),
    Rgb::new(1.0, 0.5, 0.0),
    Rgb::new(0.5, 0.0, 0.5),
    Rgb::new(0.0, 0.0, 0.0),
];

/// Look up a palette entry. Out-of-range indices yield `None`.
#[must_use]
pub fn palette(index: usize) -> Option<Rgb> {
    PALETTE.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::WHITE, Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::RED.r, 255);
        assert_eq!(Rgba::GREEN.g, 255);
        assert_eq!(Rgba::BLUE.b, 255);
    }

    #[test]
    fn test_rgba_lerp() {
        let mid = Rgba::BLACK.lerp(Rgba::WHITE, 0.5);
        assert_eq!(mid.r, 127);
        assert_eq!(mid.g, 127);
        assert_eq!(mid.b, 127);
    }

    #[test]
    fn test_rgba_to_array_from_array() {
        let color = Rgba::new(10, 20, 30, 40);
        let arr = color.to_array();
        assert_eq!(arr, [10, 20, 30, 40]);
        assert_eq!(Rgba::from_array(arr), color);
    }

    #[test]
    fn test_rgb_to_rgba_quantizes_and_clamps() {
        assert_eq!(Rgb::new(1.0, 0.5, 0.0).to_rgba(), Rgba::rgb(255, 128, 0));
        assert_eq!(Rgb::new(2.0, -1.0, 0.0).to_rgba(), Rgba::rgb(255, 0, 0));
    }

    #[test]
    fn test_rgb_from_slice() {
        assert_eq!(Rgb::from_slice(&[0.1, 0.2, 0.3, 0.4]), Some(Rgb::new(0.1, 0.2, 0.3)));
        assert_eq!(Rgb::from_slice(&[0.1, 0.2]), None);
    }

    #[test]
    fn test_blend3_weights() {
        let c = Rgb::blend3(Rgb::new(1.0, 0.0, 0.0), Rgb::new(0.0, 1.0, 0.0), Rgb::BLACK, [
            0.5, 0.5, 0.0,
        ]);
        assert!((c.r - 0.5).abs() < f32::EPSILON);
        assert!((c.g - 0.5).abs() < f32::EPSILON);
        assert!(c.b.abs() < f32::EPSILON);
    }

    #[test]
    fn test_palette_entries() {
        assert_eq!(palette(0), Some(Rgb::new(0.0, 0.0, 1.0)));
        assert_eq!(palette(7), Some(Rgb::new(1.0, 0.5, 0.0)));
        assert_eq!(palette(9), Some(Rgb::BLACK));
        assert_eq!(palette(10), None);
    }

    #[test]
    fn test_random_is_seeded() {
        let a = Rgb::random(&mut fastrand::Rng::with_seed(7));
        let b = Rgb::random(&mut fastrand::Rng::with_seed(7));
        assert_eq!(a, b);
        assert!((0.0..1.0).contains(&a.r));
    }
}
