use rand::Rng;

use crate::core::data::colour::Colour;

/// Normalised RGB colour with components in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Cyan.
    pub const DEFAULT: Self = Self { r: 0.0, g: 1.0, b: 1.0 };

    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.gen_range(0.0..=1.0),
            g: rng.gen_range(0.0..=1.0),
            b: rng.gen_range(0.0..=1.0),
        }
    }

    /// Converts to 8-bit channels, scaling every channel by `intensity`.
    #[must_use]
    pub fn to_colour(self, intensity: f32) -> Colour {
        let channel = |value: f32| (value * intensity).clamp(0.0, 1.0).mul_add(255.0, 0.5) as u8;

        Colour {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
        }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::DEFAULT
    }
}
