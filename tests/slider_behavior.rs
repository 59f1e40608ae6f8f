use std::cell::RefCell;
use std::rc::Rc;

use floem::kurbo::{Point, Rect};
use floem_color_slider::constants::{ANIMATION_DURATION, PREVIEW_EDGE};
use floem_color_slider::{
    ColorSlider, Orientation, SliderConfig, SliderEvent, SolidColor, TouchInput,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn horizontal(width: f64) -> ColorSlider {
    let mut slider = ColorSlider::with_frame(Rect::new(0.0, 0.0, width, 30.0));
    slider.set_base_color(SolidColor::from_hsb(0.6, 0.8, 0.9, 1.0));
    slider
}

#[test]
fn drag_across_the_bar_walks_saturation_then_brightness() {
    let mut slider = horizontal(200.0);

    slider.handle(TouchInput::Begin(Point::new(0.0, 15.0)));
    let state = *slider.state();
    assert!(close(state.saturation(), 0.32));
    assert!(close(state.brightness(), 0.9));

    slider.handle(TouchInput::Move(Point::new(100.0, 15.0)));
    let state = *slider.state();
    assert!(close(state.saturation(), 0.8));
    assert!(close(state.brightness(), 0.9));

    slider.handle(TouchInput::End(Point::new(200.0, 15.0)));
    let state = *slider.state();
    assert!(close(state.saturation(), 0.8));
    assert!(close(state.brightness(), 0.36));
    assert!(close(state.hue(), 0.6));
    assert_eq!(slider.color().a(), 1.0);
}

#[test]
fn vertical_slider_maps_the_y_axis() {
    let mut slider = ColorSlider::with_frame(Rect::new(0.0, 0.0, 30.0, 300.0));
    slider.set_orientation(Orientation::Vertical);
    slider.set_base_color(SolidColor::from_hsb(0.6, 0.8, 0.9, 1.0));

    slider.handle(TouchInput::Begin(Point::new(-900.0, 300.0)));
    assert!(close(slider.state().brightness(), 0.36));

    let preview = slider.preview().expect("preview shown");
    slider.tick(ANIMATION_DURATION);
    let preview_full = slider.preview().expect("preview shown");
    assert!(preview.rect.width() < preview_full.rect.width());
    assert!(close(preview_full.rect.y0, 300.0 - PREVIEW_EDGE));
    assert!(preview_full.rect.x1 <= 0.0);
}

#[test]
fn preview_never_leaves_the_bar() {
    let mut slider = horizontal(180.0);
    slider.handle(TouchInput::Begin(Point::new(90.0, 15.0)));
    slider.tick(ANIMATION_DURATION);
    for x in [-1e6, -20.0, 0.0, 17.0, 90.0, 179.0, 180.0, 1e6] {
        slider.handle(TouchInput::Move(Point::new(x, 15.0)));
        let rect = slider.preview().unwrap().rect;
        assert!(rect.x0 >= 0.0 && rect.x0 <= 180.0 - PREVIEW_EDGE, "x0 = {}", rect.x0);
    }
}

#[test]
fn cancel_removes_preview_and_silences_changes() {
    let changes = Rc::new(RefCell::new(0));
    let cancels = Rc::new(RefCell::new(0));
    let mut slider = horizontal(200.0);
    let c = changes.clone();
    slider.on_drag_change(move |_| *c.borrow_mut() += 1);
    let c = cancels.clone();
    slider.on_drag_cancel(move || *c.borrow_mut() += 1);

    slider.handle(TouchInput::Begin(Point::new(40.0, 15.0)));
    slider.handle(TouchInput::Move(Point::new(60.0, 15.0)));
    assert_eq!(slider.handle(TouchInput::Cancel), Some(SliderEvent::DragCancel));
    assert_eq!(slider.handle(TouchInput::Move(Point::new(80.0, 15.0))), None);
    assert_eq!(slider.handle(TouchInput::End(Point::new(80.0, 15.0))), None);

    while slider.tick(ANIMATION_DURATION / 4) {}
    assert!(slider.preview().is_none());
    assert!(!slider.is_tracking());
    assert_eq!(*changes.borrow(), 1);
    assert_eq!(*cancels.borrow(), 1);
}

#[test]
fn drag_end_inside_flag_follows_bounds() {
    let mut slider = horizontal(200.0);
    let ends = Rc::new(RefCell::new(Vec::new()));
    let e = ends.clone();
    slider.on_drag_end(move |_, inside| e.borrow_mut().push(inside));

    for end in [
        Point::new(0.0, 0.0),
        Point::new(200.0, 30.0),
        Point::new(-0.5, 10.0),
        Point::new(100.0, 30.5),
    ] {
        slider.handle(TouchInput::Begin(Point::new(100.0, 15.0)));
        slider.handle(TouchInput::End(end));
    }
    assert_eq!(*ends.borrow(), [true, true, false, false]);
}

#[test]
fn config_from_toml_reconfigures_the_slider() {
    let config = SliderConfig::from_toml_str(
        r#"
        orientation = "vertical"
        preview_enabled = false
        border_width = 2.0
        base_color = "FF0000"
        "#,
    )
    .unwrap();

    let mut slider = ColorSlider::with_frame(Rect::new(0.0, 0.0, 30.0, 100.0));
    slider.apply_config(&config).unwrap();
    assert_eq!(slider.orientation(), Orientation::Vertical);
    assert_eq!(slider.border_width(), 2.0);
    assert!(close(slider.state().hue(), 0.0));
    assert!(close(slider.state().baseline().minimum_saturation, 0.4));
    assert!(close(slider.state().baseline().minimum_brightness, 0.4));

    slider.handle(TouchInput::Begin(Point::new(15.0, 50.0)));
    assert!(slider.preview().is_none());
    assert_eq!(slider.color().to_hex(), "FF0000");
}
