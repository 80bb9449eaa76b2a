//! Text inputs for the editor: hex value, H/S/L components, copy button.

use floem::event::EventPropagation;
use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

use crate::color::Color;
use crate::constants;

/// Whether `e` is an Enter key press.
fn is_enter(e: &floem::event::Event) -> bool {
    match e {
        floem::event::Event::KeyDown(ke) => {
            ke.key.logical_key == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
        }
        _ => false,
    }
}

fn format_value(value: f64, scale: f64) -> String {
    format!("{}", (value * scale).round() as i64)
}

/// A numeric input showing `signal * scale`, rounded to an integer.
///
/// Committed text is clamped to `0..=max_display` and stored as
/// `display / scale`. Hue uses scale 1 (degrees), saturation and lightness
/// use scale 100 (percent).
pub(crate) fn number_input(
    lbl: &'static str,
    signal: RwSignal<f64>,
    scale: f64,
    max_display: f64,
) -> impl IntoView {
    let text = RwSignal::new(format_value(signal.get_untracked(), scale));

    // Signal → text (external updates)
    create_effect(move |_| {
        let expected = format_value(signal.get(), scale);
        if text.get_untracked() != expected {
            text.set(expected);
        }
    });

    let on_commit = move || {
        let raw = text.get_untracked();
        match raw.trim().parse::<f64>() {
            Ok(num) if num.is_finite() => {
                let clamped = num.clamp(0.0, max_display);
                let new_display = clamped.round() as i64;
                let old_display = (signal.get_untracked() * scale).round() as i64;
                if new_display != old_display {
                    signal.set(clamped / scale);
                }
                let formatted = format!("{}", new_display);
                if raw != formatted {
                    text.set(formatted);
                }
            }
            _ => {
                // Reset to current signal value
                let formatted = format_value(signal.get_untracked(), scale);
                if raw != formatted {
                    text.set(formatted);
                }
            }
        }
    };

    v_stack((
        text_input(text)
            .style(|s| {
                s.width(constants::INPUT_WIDTH)
                    .padding(2.0)
                    .font_size(constants::INPUT_FONT)
                    .font_family("monospace".to_string())
                    .background(floem::peniko::Color::WHITE)
                    .border(1.0)
                    .border_color(floem::peniko::Color::rgb8(200, 200, 200))
                    .border_radius(3.0)
            })
            .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
                on_commit();
            })
            .on_event(floem::event::EventListener::KeyDown, move |e| {
                if is_enter(e) {
                    on_commit();
                    return EventPropagation::Stop;
                }
                EventPropagation::Continue
            }),
        label(move || lbl).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(floem::peniko::Color::rgb8(120, 120, 120))
                .justify_content(Some(floem::taffy::AlignContent::Center))
        }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// A hex input field bound to a canonical `#rrggbb` signal.
///
/// The field shows the digits without `#`. Every keystroke that forms a
/// valid color updates `hex_signal`; anything else is left alone until
/// commit, which restores the last valid value.
pub(crate) fn hex_input(hex_signal: RwSignal<String>) -> impl IntoView {
    let digits = |hex: &str| hex.trim_start_matches('#').to_string();
    let text = RwSignal::new(digits(&hex_signal.get_untracked()));

    // External hex_signal → text (only update if not equivalent)
    create_effect(move |_| {
        let val = hex_signal.get();
        let current = format!("#{}", text.get_untracked().trim().trim_start_matches('#'));
        if !current.eq_ignore_ascii_case(&val) {
            text.set(digits(&val));
        }
    });

    // Dynamic: text → hex_signal on every valid keystroke
    create_effect(move |_| {
        let raw = text.get();
        let candidate = format!("#{}", raw.trim().trim_start_matches('#'));
        if let Ok(color) = Color::parse(&candidate) {
            let canonical = color.stringify();
            if hex_signal.get_untracked() != canonical {
                hex_signal.set(canonical);
            }
        }
    });

    let on_commit = move || {
        let raw = text.get_untracked();
        let candidate = format!("#{}", raw.trim().trim_start_matches('#'));
        let canonical = match Color::parse(&candidate) {
            Ok(color) => color.stringify(),
            Err(err) => {
                tracing::debug!(%err, "restoring hex input");
                hex_signal.get_untracked()
            }
        };
        let shown = digits(&canonical);
        if raw != shown {
            text.set(shown);
        }
        if hex_signal.get_untracked() != canonical {
            hex_signal.set(canonical);
        }
    };

    h_stack((
        label(|| "#").style(|s| {
            s.font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .color(floem::peniko::Color::rgb8(120, 120, 120))
        }),
        text_input(text)
            .style(|s| {
                s.width(constants::HEX_INPUT_WIDTH)
                    .padding(2.0)
                    .font_size(constants::INPUT_FONT)
                    .font_family("monospace".to_string())
                    .background(floem::peniko::Color::WHITE)
                    .border(1.0)
                    .border_color(floem::peniko::Color::rgb8(200, 200, 200))
                    .border_radius(3.0)
            })
            .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
                on_commit();
            })
            .on_event_stop(floem::event::EventListener::KeyDown, move |e| {
                if is_enter(e) {
                    on_commit();
                }
            }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// A small copy button that copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                floem::peniko::Color::rgb8(80, 80, 80)
            } else {
                floem::peniko::Color::rgb8(120, 120, 120)
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
            .align_self(Some(floem::taffy::AlignItems::Start))
            .hover(|s| s.background(floem::peniko::Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(err) = clipboard.set_text(text) {
                tracing::warn!(%err, "failed to copy to clipboard");
            }
        }
        Err(err) => tracing::warn!(%err, "clipboard unavailable"),
    }
}
