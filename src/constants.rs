//! Sizing, timing, and default styling constants for the slider.

use std::time::Duration;

/// Edge length of the preview swatch at full scale
pub const PREVIEW_EDGE: f64 = 36.0;

/// Edge length of the preview swatch when minimized
pub const MINIMIZED_EDGE: f64 = 6.0;

/// Distance between the bar and the preview swatch along the cross axis
pub const PREVIEW_OFFSET: f64 = 44.0;

/// Border radius of the preview swatch
pub const PREVIEW_RADIUS: f64 = 6.0;

/// Show/hide duration of the preview swatch
pub const ANIMATION_DURATION: Duration = Duration::from_millis(150);

/// Frame interval used while an animation is running
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Minimum saturation and brightness as a fraction of the base color's
pub const MINIMUM_FACTOR: f64 = 0.4;

/// Default base color (HSB)
pub const DEFAULT_HUE: f64 = 0.6;
pub const DEFAULT_SATURATION: f64 = 0.8;
pub const DEFAULT_BRIGHTNESS: f64 = 0.9;

/// Default bar thickness
pub const BAR_THICKNESS: f32 = 28.0;

pub const DEFAULT_BORDER_WIDTH: f64 = 1.0;

/// Default border color, `RRGGBBAA`
pub const DEFAULT_BORDER_COLOR: &str = "00000028";
