//! Floating preview swatch that follows the touch.

use std::time::Duration;

use floem::kurbo::{Affine, Point, Rect, Size};

use crate::animation::{PreviewTransform, Tween};
use crate::color::SolidColor;
use crate::constants;
use crate::orientation::Orientation;

/// Frame of the full-scale swatch for a touch at `touch` on a control of `size`.
///
/// Along the drag axis the swatch is centered on the touch and clamped to
/// `[0, length - PREVIEW_EDGE]`. Along the cross axis it sits `PREVIEW_OFFSET`
/// before the bar.
pub fn swatch_frame(touch: Point, size: Size, orientation: Orientation) -> Rect {
    let edge = constants::PREVIEW_EDGE;
    let max_along = (orientation.length(size) - edge).max(0.0);
    let along = (orientation.along(touch) - edge / 2.0).clamp(0.0, max_along);
    let origin = orientation.point(along, -constants::PREVIEW_OFFSET);
    Rect::from_origin_size(origin, (edge, edge))
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSwatch {
    frame: Rect,
    color: SolidColor,
    tween: Tween,
    dismissing: bool,
}

/// What a backend needs to paint the swatch this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewSnapshot {
    pub rect: Rect,
    pub corner_radius: f64,
    pub color: SolidColor,
}

impl PreviewSwatch {
    /// A new swatch, growing from the minimized transform.
    pub fn show(frame: Rect, color: SolidColor) -> Self {
        Self {
            frame,
            color,
            tween: Tween::new(
                PreviewTransform::MINIMIZED,
                PreviewTransform::IDENTITY,
                constants::ANIMATION_DURATION,
            ),
            dismissing: false,
        }
    }

    /// Grow back to full scale from wherever a running hide has reached.
    pub fn reshow(&mut self) {
        self.dismissing = false;
        self.tween.retarget(PreviewTransform::IDENTITY, constants::ANIMATION_DURATION);
    }

    /// Shrink toward the bar; the swatch is dropped once this finishes.
    pub fn dismiss(&mut self) {
        if self.dismissing {
            return;
        }
        self.dismissing = true;
        self.tween.retarget(PreviewTransform::MINIMIZED, constants::ANIMATION_DURATION);
    }

    pub fn update(&mut self, frame: Rect, color: SolidColor) {
        self.frame = frame;
        self.color = color;
    }

    /// Advance the animation. Returns `false` once a dismissal has completed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.tween.advance(dt);
        !(self.dismissing && self.tween.is_finished())
    }

    pub fn is_animating(&self) -> bool {
        !self.tween.is_finished()
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn color(&self) -> SolidColor {
        self.color
    }

    pub fn transform(&self, orientation: Orientation) -> Affine {
        self.tween.current().to_affine(self.frame.center(), orientation)
    }

    pub fn snapshot(&self, orientation: Orientation) -> PreviewSnapshot {
        let current = self.tween.current();
        PreviewSnapshot {
            rect: self.transform(orientation).transform_rect_bbox(self.frame),
            corner_radius: constants::PREVIEW_RADIUS * current.scale,
            color: self.color,
        }
    }
}
