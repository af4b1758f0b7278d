//! HSL(A) color values and hue jitter for particle palettes.

use crate::core::rng::Rng;

/// A stroke color in HSLA space, the form the canvas host consumes directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    /// Hue in degrees, [0, 360).
    pub hue: f32,
    /// Saturation percentage.
    pub saturation: f32,
    /// Lightness percentage.
    pub lightness: f32,
    /// Opacity, [0, 1].
    pub alpha: f32,
}

impl Hsla {
    /// Fully saturated, fully opaque color from hue and lightness, the only
    /// two channels the effect actually varies per entity.
    pub fn hsl(hue: f32, lightness: f32) -> Self {
        Hsla {
            hue,
            saturation: 100.0,
            lightness,
            alpha: 1.0,
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}

/// Random hue within `base ± spread`, wrapped into [0, 360).
pub fn jitter_hue(base: f32, spread: f32, rng: &mut Rng) -> f32 {
    (base + rng.range(-spread, spread)).rem_euclid(360.0)
}
