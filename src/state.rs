//! Current hue/saturation/brightness and the baseline they are derived from.

use crate::color::SolidColor;
use crate::constants;
use crate::math::{self, Baseline};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorState {
    hue: f64,
    saturation: f64,
    brightness: f64,
    baseline: Baseline,
}

impl Default for ColorState {
    fn default() -> Self {
        Self::from_base(SolidColor::default())
    }
}

impl ColorState {
    /// Derive hue and baseline from `base`; the current value starts at the base.
    pub fn from_base(base: SolidColor) -> Self {
        let (hue, saturation, brightness) = base.to_hsb();
        Self {
            hue,
            saturation,
            brightness,
            baseline: Baseline {
                original_saturation: saturation,
                original_brightness: brightness,
                minimum_saturation: saturation * constants::MINIMUM_FACTOR,
                minimum_brightness: brightness * constants::MINIMUM_FACTOR,
            },
        }
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    /// Recompute saturation/brightness for a drag fraction in 0.0–1.0.
    pub fn update_for_fraction(&mut self, fraction: f64) {
        let (s, b) = math::saturation_brightness_at(fraction, &self.baseline);
        self.saturation = s;
        self.brightness = b;
    }

    /// The current color, always opaque.
    pub fn color(&self) -> SolidColor {
        SolidColor::from_hsb(self.hue, self.saturation, self.brightness, 1.0)
    }

    /// Colors at the 0.0, 0.5 and 1.0 gradient stops.
    pub fn gradient_colors(&self) -> [SolidColor; 3] {
        let base = &self.baseline;
        [
            SolidColor::from_hsb(self.hue, base.minimum_saturation, base.original_brightness, 1.0),
            SolidColor::from_hsb(self.hue, base.original_saturation, base.original_brightness, 1.0),
            SolidColor::from_hsb(self.hue, base.original_saturation, base.minimum_brightness, 1.0),
        ]
    }
}
