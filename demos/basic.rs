//! Standalone demo: a horizontal and a vertical slider sharing one swatch.
//!
//! Set `RUST_LOG=floem_color_slider=debug` to watch the drag events.

use floem::prelude::*;
use floem::text::FONT_SYSTEM;
use floem::window::WindowConfig;
use floem_color_slider::{color_slider, Orientation, SliderConfig, SolidColor};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    FONT_SYSTEM
        .lock()
        .db_mut()
        .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());

    let color = RwSignal::new(SolidColor::default());
    let status = RwSignal::new(String::from("drag a bar"));
    let horizontal = RwSignal::new(SliderConfig {
        base_color: "3B82F6".to_string(),
        ..SliderConfig::default()
    });
    let vertical = RwSignal::new(SliderConfig {
        orientation: Orientation::Vertical,
        base_color: "E11D48".to_string(),
        ..SliderConfig::default()
    });

    floem::Application::new()
        .window(
            move |_| {
                v_stack((
                    swatch_row(color, status),
                    h_stack((
                        slider(horizontal, color, status).style(|s| s.flex_grow(1.0)),
                        slider(vertical, color, status).style(|s| s.height(220.0)),
                    ))
                    .style(|s| s.gap(60.0).items_center().padding_top(50.0)),
                ))
                .style(|s| {
                    s.gap(16.0)
                        .padding(60.0)
                        .size_full()
                        .background(Color::rgb8(242, 242, 242))
                })
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((480.0, 420.0))
                    .title("floem-color-slider"),
            ),
        )
        .run();
}

fn slider(
    config: RwSignal<SliderConfig>,
    color: RwSignal<SolidColor>,
    status: RwSignal<String>,
) -> impl IntoView {
    color_slider(config, color)
        .on_drag_start(move |c| status.set(format!("dragging #{}", c.to_hex())))
        .on_drag_end(move |c, inside| {
            let place = if inside { "inside" } else { "outside" };
            log::info!("picked #{} ({place})", c.to_hex());
            status.set(format!("released {place} at #{}", c.to_hex()));
        })
        .on_drag_cancel(move || status.set("cancelled".to_string()))
}

fn swatch_row(color: RwSignal<SolidColor>, status: RwSignal<String>) -> impl IntoView {
    h_stack((
        empty().style(move |s| {
            s.width(32.0)
                .height(32.0)
                .border_radius(4.0)
                .border(1.0)
                .border_color(Color::rgb8(180, 180, 180))
                .background(color.get().to_peniko())
        }),
        label(move || status.get()).style(|s| {
            s.flex_grow(1.0)
                .font_size(12.0)
                .color(Color::rgb8(90, 90, 90))
        }),
        copy_button(move || color.get_untracked().to_hex()),
    ))
    .style(|s| s.gap(8.0).items_center())
}

/// Copies the result of `get_text` to the clipboard.
fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        let text = get_text();
        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text)) {
            Ok(()) => log::info!("copied color to clipboard"),
            Err(err) => log::warn!("clipboard unavailable: {err}"),
        }
    })
}
