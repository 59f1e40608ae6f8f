//! # floem-color-slider
//!
//! A gesture-driven color slider for [Floem](https://github.com/lapce/floem).
//!
//! Dragging along the bar picks a color at a fixed hue: the first half raises
//! saturation toward the base color, the second half darkens it. An optional
//! preview swatch follows the pointer.
//!
//! The touch mapping, state machine, and preview geometry live in
//! [`ColorSlider`], which has no Floem dependency beyond kurbo geometry types
//! and can be driven directly. [`color_slider`] wraps it in a Floem view.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_color_slider::{color_slider, SliderConfig, SolidColor};
//!
//! let config = RwSignal::new(SliderConfig::default());
//! let color = RwSignal::new(SolidColor::default());
//! // Use `color_slider(config, color)` in your Floem view tree.
//! ```

mod animation;
mod color;
mod config;
pub mod constants;
mod error;
mod math;
mod orientation;
mod preview;
mod slider;
mod state;
mod tracking;
mod view;

pub use animation::{PreviewTransform, Tween};
pub use color::SolidColor;
pub use config::SliderConfig;
pub use error::ConfigError;
pub use math::Baseline;
pub use orientation::Orientation;
pub use preview::{swatch_frame, PreviewSnapshot, PreviewSwatch};
pub use slider::{BarRendering, ColorSlider};
pub use state::ColorState;
pub use tracking::{SliderEvent, TouchInput, TrackingPhase};
pub use view::{color_slider, ColorSliderView};
