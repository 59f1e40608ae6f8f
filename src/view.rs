//! Floem view hosting a [`ColorSlider`].
//!
//! Pointer events become [`TouchInput`]s, focus loss cancels the drag, and the
//! preview animation is driven by a timer that re-enters the view through
//! `update_state` until the swatch settles.

use std::time::Instant;

use floem::action::exec_after;
use floem::kurbo::{Rect, Shape, Stroke};
use floem::peniko::{Color, ColorStop, Gradient};
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::SolidColor;
use crate::config::SliderConfig;
use crate::constants;
use crate::orientation::Orientation;
use crate::slider::ColorSlider;
use crate::tracking::{SliderEvent, TouchInput};

enum SliderUpdate {
    Config(SliderConfig),
    Frame,
}

pub struct ColorSliderView {
    id: ViewId,
    slider: ColorSlider,
    color: RwSignal<SolidColor>,
    last_tick: Option<Instant>,
    frame_scheduled: bool,
}

/// Creates a color slider.
///
/// - `config`: orientation, preview, border, and base color. Changes are
///   applied between frames; an invalid color is logged and ignored.
/// - `color`: written with the slider's color on every drag event and rebase.
pub fn color_slider(
    config: RwSignal<SliderConfig>,
    color: RwSignal<SolidColor>,
) -> ColorSliderView {
    let id = ViewId::new();

    create_effect(move |_| {
        let c = config.get();
        id.update_state(SliderUpdate::Config(c));
    });

    let mut slider = ColorSlider::new();
    if let Err(err) = slider.apply_config(&config.get_untracked()) {
        log::warn!("color slider: {err}");
    }

    ColorSliderView {
        id,
        slider,
        color,
        last_tick: None,
        frame_scheduled: false,
    }
    .style(move |s| {
        let s = match config.get().orientation {
            Orientation::Horizontal => s
                .height(constants::BAR_THICKNESS)
                .min_width(constants::PREVIEW_EDGE as f32),
            Orientation::Vertical => s
                .width(constants::BAR_THICKNESS)
                .min_height(constants::PREVIEW_EDGE as f32),
        };
        s.cursor(floem::style::CursorStyle::Pointer)
    })
}

impl ColorSliderView {
    pub fn on_drag_start(mut self, handler: impl Fn(SolidColor) + 'static) -> Self {
        self.slider.on_drag_start(handler);
        self
    }

    pub fn on_drag_change(mut self, handler: impl Fn(SolidColor) + 'static) -> Self {
        self.slider.on_drag_change(handler);
        self
    }

    /// `handler` receives the final color and whether the pointer was released
    /// inside the slider.
    pub fn on_drag_end(mut self, handler: impl Fn(SolidColor, bool) + 'static) -> Self {
        self.slider.on_drag_end(handler);
        self
    }

    pub fn on_drag_cancel(mut self, handler: impl Fn() + 'static) -> Self {
        self.slider.on_drag_cancel(handler);
        self
    }

    fn advance_clock(&mut self) {
        let now = Instant::now();
        if let Some(prev) = self.last_tick {
            self.slider.tick(now.saturating_duration_since(prev));
        }
        self.last_tick = Some(now);
    }

    fn schedule_frame(&mut self) {
        if self.frame_scheduled || !self.slider.is_animating() {
            return;
        }
        self.frame_scheduled = true;
        let id = self.id;
        exec_after(constants::FRAME_INTERVAL, move |_| {
            id.update_state(SliderUpdate::Frame);
        });
    }

    fn publish(&self, event: &SliderEvent) {
        match *event {
            SliderEvent::DragStart(c)
            | SliderEvent::DragChange(c)
            | SliderEvent::DragEnd { color: c, .. } => self.color.set(c),
            SliderEvent::DragCancel => {}
        }
    }
}

impl View for ColorSliderView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SliderUpdate>() {
            match *update {
                SliderUpdate::Config(config) => {
                    self.advance_clock();
                    if let Err(err) = self.slider.apply_config(&config) {
                        log::warn!("color slider: {err}");
                    }
                    self.color.set(self.slider.color());
                    self.schedule_frame();
                    self.id.request_layout();
                }
                SliderUpdate::Frame => {
                    self.frame_scheduled = false;
                    self.advance_clock();
                    self.schedule_frame();
                }
            }
            self.id.request_paint();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        let tracking = self.slider.is_tracking();
        let input = match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                TouchInput::Begin(e.pos)
            }
            Event::PointerMove(e) if tracking => TouchInput::Move(e.pos),
            Event::PointerUp(e) if tracking => TouchInput::End(e.pos),
            Event::FocusLost if tracking => TouchInput::Cancel,
            _ => return EventPropagation::Continue,
        };

        self.advance_clock();
        match self.slider.handle(input) {
            Some(emitted) => {
                self.publish(&emitted);
                self.schedule_frame();
                self.id.request_paint();
                EventPropagation::Stop
            }
            None => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.slider.set_frame(Rect::new(
            layout.location.x as f64,
            layout.location.y as f64,
            (layout.location.x + layout.size.width) as f64,
            (layout.location.y + layout.size.height) as f64,
        ));
        if self.slider.needs_render() {
            self.id.request_paint();
        }
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let bar = self.slider.render();
        if bar.rect.width() == 0.0 || bar.rect.height() == 0.0 {
            return;
        }
        let rrect = bar.rect.to_rounded_rect(bar.corner_radius);

        let stops = bar
            .stops
            .map(|(offset, c)| ColorStop::from((offset, c.to_peniko())));
        let gradient = Gradient::new_linear(bar.start, bar.end).with_stops(stops);

        cx.save();
        cx.clip(&rrect);
        // The vello Rect fast-path only handles solid fills.
        let path = bar.rect.to_path(0.1);
        cx.fill(&path, &gradient, 0.0);
        cx.restore();

        if bar.border_width > 0.0 {
            cx.stroke(
                &rrect,
                bar.border_color.to_peniko(),
                &Stroke::new(bar.border_width),
            );
        }

        if let Some(preview) = self.slider.preview() {
            let swatch = preview.rect.to_rounded_rect(preview.corner_radius);
            cx.fill(&swatch, preview.color.to_peniko(), 0.0);
            cx.stroke(&swatch, Color::WHITE, &Stroke::new(2.0));
            cx.stroke(&swatch, Color::rgba8(0, 0, 0, 40), &Stroke::new(1.0));
        }
    }
}
