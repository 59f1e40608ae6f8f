//! Bar orientation and axis projection.

use floem::kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Drag along Y, preview offset along X.
    Vertical,
    /// Drag along X, preview offset along Y.
    #[default]
    Horizontal,
}

impl Orientation {
    /// Coordinate of `p` along the drag axis.
    pub fn along(self, p: Point) -> f64 {
        match self {
            Orientation::Vertical => p.y,
            Orientation::Horizontal => p.x,
        }
    }

    /// Length of `size` along the drag axis.
    pub fn length(self, size: Size) -> f64 {
        match self {
            Orientation::Vertical => size.height,
            Orientation::Horizontal => size.width,
        }
    }

    /// Build a point from drag-axis and cross-axis coordinates.
    pub fn point(self, along: f64, across: f64) -> Point {
        match self {
            Orientation::Vertical => Point::new(across, along),
            Orientation::Horizontal => Point::new(along, across),
        }
    }

    /// Unit vector pointing from the preview swatch toward the bar.
    pub fn toward_bar(self) -> Vec2 {
        match self {
            Orientation::Vertical => Vec2::new(1.0, 0.0),
            Orientation::Horizontal => Vec2::new(0.0, 1.0),
        }
    }
}
