//! Backend-agnostic color slider controller.
//!
//! [`ColorSlider`] owns the color state, the tracking phase, and the preview
//! swatch. A rendering backend feeds it [`TouchInput`]s in control-local
//! coordinates, advances animations with [`ColorSlider::tick`], and paints
//! [`ColorSlider::render`] plus [`ColorSlider::preview`].

use std::time::Duration;

use floem::kurbo::{Point, Rect};

use crate::color::SolidColor;
use crate::config::SliderConfig;
use crate::constants;
use crate::error::ConfigError;
use crate::math;
use crate::orientation::Orientation;
use crate::preview::{self, PreviewSnapshot, PreviewSwatch};
use crate::state::ColorState;
use crate::tracking::{SliderEvent, TouchInput, TrackingPhase};

type ColorHandler = Box<dyn Fn(SolidColor)>;
type EndHandler = Box<dyn Fn(SolidColor, bool)>;
type CancelHandler = Box<dyn Fn()>;

#[derive(Default)]
struct Handlers {
    drag_start: Option<ColorHandler>,
    drag_change: Option<ColorHandler>,
    drag_end: Option<EndHandler>,
    drag_cancel: Option<CancelHandler>,
}

/// Everything needed to paint the bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRendering {
    pub rect: Rect,
    pub corner_radius: f64,
    /// Gradient axis, from the 0.0 stop to the 1.0 stop.
    pub start: Point,
    pub end: Point,
    pub stops: [(f32, SolidColor); 3],
    pub border_width: f64,
    pub border_color: SolidColor,
}

pub struct ColorSlider {
    frame: Rect,
    orientation: Orientation,
    preview_enabled: bool,
    border_width: f64,
    border_color: SolidColor,
    base_color: SolidColor,
    state: ColorState,
    phase: TrackingPhase,
    preview: Option<PreviewSwatch>,
    needs_render: bool,
    handlers: Handlers,
}

impl Default for ColorSlider {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSlider {
    /// A slider with an empty frame; set the frame once layout is known.
    pub fn new() -> Self {
        Self::with_frame(Rect::ZERO)
    }

    pub fn with_frame(frame: Rect) -> Self {
        let mut slider = Self {
            frame,
            orientation: Orientation::default(),
            preview_enabled: false,
            border_width: 0.0,
            border_color: SolidColor::default(),
            base_color: SolidColor::default(),
            state: ColorState::default(),
            phase: TrackingPhase::Idle,
            preview: None,
            needs_render: true,
            handlers: Handlers::default(),
        };
        slider.common_init();
        slider
    }

    /// Shared setup for every constructor: default configuration and no session.
    pub fn common_init(&mut self) {
        self.orientation = Orientation::default();
        self.preview_enabled = true;
        self.border_width = constants::DEFAULT_BORDER_WIDTH;
        self.border_color =
            SolidColor::from_hex(constants::DEFAULT_BORDER_COLOR).unwrap_or_default();
        self.phase = TrackingPhase::Idle;
        self.preview = None;
        self.set_base_color(SolidColor::default());
    }

    /// Apply every option of `config`. Nothing changes if a color fails to parse.
    pub fn apply_config(&mut self, config: &SliderConfig) -> Result<(), ConfigError> {
        let base = config.parsed_base_color()?;
        let border = config.parsed_border_color()?;
        self.set_orientation(config.orientation);
        self.set_preview_enabled(config.preview_enabled);
        self.set_border_width(config.border_width());
        self.set_border_color(border);
        self.set_base_color(base);
        Ok(())
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn set_frame(&mut self, frame: Rect) {
        if frame != self.frame {
            self.frame = frame;
            self.needs_render = true;
        }
    }

    /// The frame in local coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.frame.size())
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        if orientation != self.orientation {
            self.orientation = orientation;
            self.needs_render = true;
        }
    }

    pub fn preview_enabled(&self) -> bool {
        self.preview_enabled
    }

    pub fn set_preview_enabled(&mut self, enabled: bool) {
        self.preview_enabled = enabled;
        if !enabled {
            self.hide_preview();
        }
    }

    pub fn border_width(&self) -> f64 {
        self.border_width
    }

    pub fn set_border_width(&mut self, width: f64) {
        self.border_width = width.max(0.0);
        self.needs_render = true;
    }

    pub fn border_color(&self) -> SolidColor {
        self.border_color
    }

    pub fn set_border_color(&mut self, color: SolidColor) {
        self.border_color = color;
        self.needs_render = true;
    }

    pub fn base_color(&self) -> SolidColor {
        self.base_color
    }

    /// Re-derive hue, the saturation/brightness baseline, and the gradient.
    pub fn set_base_color(&mut self, color: SolidColor) {
        self.base_color = color;
        self.state = ColorState::from_base(color);
        self.needs_render = true;
        log::debug!(
            "color slider rebased: hue {:.3} sat {:.3} bright {:.3}",
            self.state.hue(),
            self.state.saturation(),
            self.state.brightness()
        );
    }

    pub fn state(&self) -> &ColorState {
        &self.state
    }

    pub fn color(&self) -> SolidColor {
        self.state.color()
    }

    pub fn is_tracking(&self) -> bool {
        self.phase.is_tracking()
    }

    pub fn on_drag_start(&mut self, handler: impl Fn(SolidColor) + 'static) {
        self.handlers.drag_start = Some(Box::new(handler));
    }

    pub fn on_drag_change(&mut self, handler: impl Fn(SolidColor) + 'static) {
        self.handlers.drag_change = Some(Box::new(handler));
    }

    /// `handler` receives the final color and whether the touch ended inside.
    pub fn on_drag_end(&mut self, handler: impl Fn(SolidColor, bool) + 'static) {
        self.handlers.drag_end = Some(Box::new(handler));
    }

    pub fn on_drag_cancel(&mut self, handler: impl Fn() + 'static) {
        self.handlers.drag_cancel = Some(Box::new(handler));
    }

    /// Feed one touch input. Returns the emitted event, if the input was accepted.
    pub fn handle(&mut self, input: TouchInput) -> Option<SliderEvent> {
        let Some(next) = self.phase.transition(&input) else {
            log::trace!("color slider ignored {:?} while {:?}", input, self.phase);
            return None;
        };
        self.phase = next;

        let event = match input {
            TouchInput::Begin(p) => {
                self.update_for_touch(p);
                self.show_preview(p);
                SliderEvent::DragStart(self.color())
            }
            TouchInput::Move(p) => {
                self.update_for_touch(p);
                self.move_preview(p);
                SliderEvent::DragChange(self.color())
            }
            TouchInput::End(p) => {
                self.update_for_touch(p);
                self.move_preview(p);
                self.hide_preview();
                SliderEvent::DragEnd {
                    color: self.color(),
                    inside: self.contains(p),
                }
            }
            TouchInput::Cancel => {
                self.hide_preview();
                SliderEvent::DragCancel
            }
        };

        log::debug!("color slider {:?}", event);
        self.dispatch(&event);
        Some(event)
    }

    /// Recompute saturation/brightness for a local touch point. Returns the
    /// clamped drag fraction.
    pub fn update_for_touch(&mut self, touch: Point) -> f64 {
        let length = self.orientation.length(self.frame.size());
        let fraction = math::fraction_along(self.orientation.along(touch), length);
        self.state.update_for_fraction(fraction);
        fraction
    }

    /// Whether a local point lies within the bounds, edges included.
    pub fn contains(&self, p: Point) -> bool {
        let b = self.bounds();
        p.x >= b.x0 && p.x <= b.x1 && p.y >= b.y0 && p.y <= b.y1
    }

    /// Advance the preview animation. Returns whether another frame is needed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if let Some(swatch) = self.preview.as_mut() {
            if !swatch.advance(dt) {
                log::trace!("color slider preview removed");
                self.preview = None;
            }
        }
        self.is_animating()
    }

    pub fn is_animating(&self) -> bool {
        self.preview.as_ref().is_some_and(|p| p.is_animating())
    }

    pub fn preview(&self) -> Option<PreviewSnapshot> {
        self.preview.as_ref().map(|p| p.snapshot(self.orientation))
    }

    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    /// Describe the bar for painting and clear the render flag.
    pub fn render(&mut self) -> BarRendering {
        self.needs_render = false;
        let rect = self.bounds();
        let length = self.orientation.length(rect.size());
        let across = match self.orientation {
            Orientation::Vertical => rect.width() / 2.0,
            Orientation::Horizontal => rect.height() / 2.0,
        };
        let [low, mid, high] = self.state.gradient_colors();
        BarRendering {
            rect,
            corner_radius: rect.width().min(rect.height()) / 2.0,
            start: self.orientation.point(0.0, across),
            end: self.orientation.point(length, across),
            stops: [(0.0, low), (0.5, mid), (1.0, high)],
            border_width: self.border_width,
            border_color: self.border_color,
        }
    }

    fn show_preview(&mut self, touch: Point) {
        if !self.preview_enabled {
            return;
        }
        let frame = preview::swatch_frame(touch, self.frame.size(), self.orientation);
        let color = self.color();
        match self.preview.as_mut() {
            Some(swatch) => {
                swatch.update(frame, color);
                swatch.reshow();
            }
            None => self.preview = Some(PreviewSwatch::show(frame, color)),
        }
    }

    fn move_preview(&mut self, touch: Point) {
        if !self.preview_enabled {
            return;
        }
        let frame = preview::swatch_frame(touch, self.frame.size(), self.orientation);
        let color = self.color();
        if let Some(swatch) = self.preview.as_mut() {
            swatch.update(frame, color);
        }
    }

    fn hide_preview(&mut self) {
        if let Some(swatch) = self.preview.as_mut() {
            swatch.dismiss();
        }
    }

    fn dispatch(&self, event: &SliderEvent) {
        match *event {
            SliderEvent::DragStart(color) => {
                if let Some(cb) = &self.handlers.drag_start {
                    cb(color);
                }
            }
            SliderEvent::DragChange(color) => {
                if let Some(cb) = &self.handlers.drag_change {
                    cb(color);
                }
            }
            SliderEvent::DragEnd { color, inside } => {
                if let Some(cb) = &self.handlers.drag_end {
                    cb(color, inside);
                }
            }
            SliderEvent::DragCancel => {
                if let Some(cb) = &self.handlers.drag_cancel {
                    cb();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn slider() -> ColorSlider {
        let mut slider = ColorSlider::with_frame(Rect::new(10.0, 10.0, 210.0, 40.0));
        slider.set_base_color(SolidColor::from_hsb(0.6, 0.8, 0.9, 1.0));
        slider
    }

    #[test]
    fn new_slider_is_idle_with_default_color() {
        let slider = ColorSlider::new();
        assert!(!slider.is_tracking());
        assert!(slider.preview_enabled());
        assert_eq!(slider.frame(), Rect::ZERO);
        assert_eq!(slider.color().to_hex(), SolidColor::default().to_hex());
    }

    #[test]
    fn touches_are_local_and_clamped() {
        let mut slider = slider();
        assert_eq!(slider.update_for_touch(Point::new(-30.0, 5.0)), 0.0);
        assert_eq!(slider.update_for_touch(Point::new(50.0, 5.0)), 0.25);
        assert_eq!(slider.update_for_touch(Point::new(900.0, 5.0)), 1.0);

        slider.set_orientation(Orientation::Vertical);
        assert_eq!(slider.update_for_touch(Point::new(0.0, 15.0)), 0.5);
    }

    #[test]
    fn drag_end_reports_inside_or_outside() {
        let mut slider = slider();
        slider.handle(TouchInput::Begin(Point::new(20.0, 10.0)));
        let inside = slider.handle(TouchInput::End(Point::new(200.0, 30.0)));
        assert!(matches!(inside, Some(SliderEvent::DragEnd { inside: true, .. })));

        slider.handle(TouchInput::Begin(Point::new(20.0, 10.0)));
        let outside = slider.handle(TouchInput::End(Point::new(20.0, 31.0)));
        assert!(matches!(outside, Some(SliderEvent::DragEnd { inside: false, .. })));
    }

    #[test]
    fn handlers_receive_one_event_per_transition() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slider = slider();
        let l = log.clone();
        slider.on_drag_start(move |_| l.borrow_mut().push("start"));
        let l = log.clone();
        slider.on_drag_change(move |_| l.borrow_mut().push("change"));
        let l = log.clone();
        slider.on_drag_end(move |_, inside| l.borrow_mut().push(if inside { "in" } else { "out" }));
        let l = log.clone();
        slider.on_drag_cancel(move || l.borrow_mut().push("cancel"));

        slider.handle(TouchInput::Move(Point::new(5.0, 5.0)));
        slider.handle(TouchInput::Begin(Point::new(5.0, 5.0)));
        slider.handle(TouchInput::Begin(Point::new(9.0, 5.0)));
        slider.handle(TouchInput::Move(Point::new(50.0, 5.0)));
        slider.handle(TouchInput::End(Point::new(500.0, 5.0)));
        slider.handle(TouchInput::Begin(Point::new(5.0, 5.0)));
        slider.handle(TouchInput::Cancel);
        slider.handle(TouchInput::Move(Point::new(50.0, 5.0)));

        assert_eq!(*log.borrow(), ["start", "change", "out", "start", "cancel"]);
    }

    #[test]
    fn cancel_keeps_color_and_removes_preview() {
        let mut slider = slider();
        slider.handle(TouchInput::Begin(Point::new(0.0, 5.0)));
        let color = slider.color();
        assert!(slider.preview().is_some());

        slider.handle(TouchInput::Cancel);
        assert_eq!(slider.color(), color);
        assert!(slider.tick(constants::ANIMATION_DURATION / 3));
        assert!(slider.preview().is_some());
        assert!(!slider.tick(constants::ANIMATION_DURATION));
        assert!(slider.preview().is_none());
    }

    #[test]
    fn disabled_preview_is_never_created() {
        let mut slider = slider();
        slider.set_preview_enabled(false);
        slider.handle(TouchInput::Begin(Point::new(40.0, 5.0)));
        slider.handle(TouchInput::Move(Point::new(80.0, 5.0)));
        assert!(slider.preview().is_none());
        assert!(!slider.is_animating());
    }

    #[test]
    fn disabling_preview_mid_drag_shrinks_it_away() {
        let mut slider = slider();
        slider.handle(TouchInput::Begin(Point::new(100.0, 5.0)));
        slider.tick(constants::ANIMATION_DURATION);
        assert!(!slider.is_animating());

        slider.set_preview_enabled(false);
        assert!(slider.is_animating());
        assert!(slider.tick(constants::ANIMATION_DURATION / 3));
        let shrinking = slider.preview().unwrap().rect.width();
        assert!(shrinking < constants::PREVIEW_EDGE);

        assert!(!slider.tick(constants::ANIMATION_DURATION));
        assert!(slider.preview().is_none());

        slider.handle(TouchInput::Move(Point::new(150.0, 5.0)));
        assert!(slider.preview().is_none());
    }

    #[test]
    fn config_change_mid_drag_hides_preview_and_rebases() {
        let mut slider = slider();
        slider.handle(TouchInput::Begin(Point::new(100.0, 5.0)));
        slider.tick(constants::ANIMATION_DURATION);

        let config = SliderConfig {
            preview_enabled: false,
            base_color: "FF0000".into(),
            ..SliderConfig::default()
        };
        slider.apply_config(&config).unwrap();
        assert!(slider.is_tracking());
        assert!(slider.is_animating());
        assert!(slider.preview().is_some());

        while slider.tick(constants::ANIMATION_DURATION / 4) {}
        assert!(slider.preview().is_none());

        slider.handle(TouchInput::Move(Point::new(100.0, 5.0)));
        assert!(slider.preview().is_none());
        assert_eq!(slider.color().to_hex(), "FF0000");
    }

    #[test]
    fn nan_frame_maps_to_the_start_of_the_bar() {
        let mut slider = ColorSlider::with_frame(Rect::new(0.0, 0.0, f64::NAN, 30.0));
        slider.set_base_color(SolidColor::from_hsb(0.6, 0.8, 0.9, 1.0));
        assert_eq!(slider.update_for_touch(Point::new(40.0, 5.0)), 0.0);
        assert!((slider.state().saturation() - 0.32).abs() < 1e-9);
    }

    #[test]
    fn restarting_a_drag_interrupts_the_hide() {
        let mut slider = slider();
        slider.handle(TouchInput::Begin(Point::new(100.0, 5.0)));
        slider.tick(constants::ANIMATION_DURATION);
        slider.handle(TouchInput::End(Point::new(100.0, 5.0)));
        slider.tick(constants::ANIMATION_DURATION / 2);
        let shrinking = slider.preview().unwrap().rect.width();

        slider.handle(TouchInput::Begin(Point::new(100.0, 5.0)));
        let resumed = slider.preview().unwrap().rect.width();
        assert!((resumed - shrinking).abs() < 1e-9);

        slider.tick(constants::ANIMATION_DURATION);
        let full = slider.preview().unwrap().rect.width();
        assert!((full - constants::PREVIEW_EDGE).abs() < 1e-9);
    }

    #[test]
    fn render_describes_a_pill_gradient() {
        let mut slider = slider();
        assert!(slider.needs_render());
        let bar = slider.render();
        assert!(!slider.needs_render());
        assert_eq!(bar.rect, Rect::new(0.0, 0.0, 200.0, 30.0));
        assert_eq!(bar.corner_radius, 15.0);
        assert_eq!(bar.start, Point::new(0.0, 15.0));
        assert_eq!(bar.end, Point::new(200.0, 15.0));
        assert_eq!(bar.stops.map(|(offset, _)| offset), [0.0, 0.5, 1.0]);

        slider.set_frame(Rect::new(0.0, 0.0, 30.0, 300.0));
        assert!(slider.needs_render());
        slider.set_orientation(Orientation::Vertical);
        let bar = slider.render();
        assert_eq!(bar.end, Point::new(15.0, 300.0));
    }

    #[test]
    fn invalid_config_leaves_slider_untouched() {
        let mut slider = slider();
        let config = SliderConfig {
            orientation: Orientation::Vertical,
            base_color: "nope".into(),
            ..SliderConfig::default()
        };
        assert!(slider.apply_config(&config).is_err());
        assert_eq!(slider.orientation(), Orientation::Horizontal);
    }
}
