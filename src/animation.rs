//! Preview show/hide animation.
//!
//! A [`Tween`] interpolates between two [`PreviewTransform`]s. Retargeting
//! captures the current interpolated value as the new start, so a hide that
//! interrupts a show (or the reverse) continues from where the swatch is.

use std::time::Duration;

use floem::kurbo::{Affine, Point, Vec2};

use crate::constants;
use crate::math;
use crate::orientation::Orientation;

/// Scale about the swatch center, then a pull toward the bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewTransform {
    pub scale: f64,
    pub pull: f64,
}

impl PreviewTransform {
    pub const IDENTITY: PreviewTransform = PreviewTransform {
        scale: 1.0,
        pull: 0.0,
    };

    pub const MINIMIZED: PreviewTransform = PreviewTransform {
        scale: constants::MINIMIZED_EDGE / constants::PREVIEW_EDGE,
        pull: constants::PREVIEW_OFFSET,
    };

    pub fn lerp(self, to: PreviewTransform, t: f64) -> PreviewTransform {
        PreviewTransform {
            scale: math::lerp(self.scale, to.scale, t),
            pull: math::lerp(self.pull, to.pull, t),
        }
    }

    /// The affine for a swatch centered at `center`.
    pub fn to_affine(self, center: Point, orientation: Orientation) -> Affine {
        let pull: Vec2 = orientation.toward_bar() * self.pull;
        Affine::translate(center.to_vec2() + pull)
            * Affine::scale(self.scale)
            * Affine::translate(-center.to_vec2())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: PreviewTransform,
    to: PreviewTransform,
    elapsed: Duration,
    duration: Duration,
}

impl Tween {
    pub fn new(from: PreviewTransform, to: PreviewTransform, duration: Duration) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        math::clamp_unit(self.elapsed.as_secs_f64() / self.duration.as_secs_f64())
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn current(&self) -> PreviewTransform {
        self.from.lerp(self.to, ease_out(self.progress()))
    }

    /// Restart toward `to`, starting from the current value.
    pub fn retarget(&mut self, to: PreviewTransform, duration: Duration) {
        self.from = self.current();
        self.to = to;
        self.elapsed = Duration::ZERO;
        self.duration = duration;
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }
}

fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}
