//! Color editor: the wheel plus swatch, hex input and H/S/L inputs.
//!
//! All cross-field reconciliation goes through one `ColorBinding`, so the
//! wheel, the hex text and the component inputs agree on what counts as a
//! change.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use floem::peniko::Color as PenikoColor;
use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

use crate::binding::{ColorBinding, WheelValue};
use crate::color::Hsl;
use crate::color_wheel::color_wheel;
use crate::config::WheelConfig;
use crate::constants;
use crate::inputs::{copy_button, hex_input, number_input};

/// Creates the editor panel around `hsl`.
pub(crate) fn color_editor(hsl: RwSignal<Hsl>, config: RwSignal<WheelConfig>) -> impl IntoView {
    let binding = Rc::new(RefCell::new(ColorBinding::with_hsl(hsl.get_untracked())));

    let initial = hsl.get_untracked().normalized();
    let hex = RwSignal::new(initial.to_color().stringify());
    let h = RwSignal::new(initial.hue);
    let s = RwSignal::new(initial.saturation);
    let l = RwSignal::new(initial.lightness);

    // Non-reactive guard to break the hsl → components → hsl cycle.
    let components_from_hsl = Rc::new(Cell::new(false));

    // ── hsl → binding, hex and component display ───────────────────────
    let sync_binding = binding.clone();
    let guard_fwd = components_from_hsl.clone();
    create_effect(move |_| {
        let value = hsl.get();
        sync_binding.borrow_mut().set_value(WheelValue::Hsl(value));

        let new_hex = value.to_color().stringify();
        if hex.get_untracked() != new_hex {
            hex.set(new_hex);
        }

        let n = value.normalized();
        guard_fwd.set(true);
        if (h.get_untracked() - n.hue).abs() > 1e-9 {
            h.set(n.hue);
        }
        if (s.get_untracked() - n.saturation).abs() > 1e-9 {
            s.set(n.saturation);
        }
        if (l.get_untracked() - n.lightness).abs() > 1e-9 {
            l.set(n.lightness);
        }
        guard_fwd.set(false);
    });

    // ── hex → hsl (echoes of our own value are ignored by the binding) ─
    let hex_binding = binding.clone();
    create_effect(move |_| {
        let text = hex.get();
        let updated = hex_binding.borrow_mut().set_value(WheelValue::Hex(text));
        if let Some(new_hsl) = updated {
            if new_hsl != hsl.get_untracked() {
                hsl.set(new_hsl);
            }
        }
    });

    // ── H/S/L inputs → hsl ─────────────────────────────────────────────
    let component_binding = binding;
    let guard_back = components_from_hsl;
    create_effect(move |_| {
        let (hv, sv, lv) = (h.get(), s.get(), l.get());
        if guard_back.get() {
            return;
        }
        let updated = component_binding.borrow_mut().set_components(hv, sv, lv);
        if let Some(new_hsl) = updated {
            if new_hsl != hsl.get_untracked().normalized() {
                hsl.set(new_hsl);
            }
        }
    });

    v_stack((
        color_wheel(hsl, config).style(|s| {
            s.margin_top(12.0)
                .align_self(Some(floem::taffy::AlignItems::Center))
        }),
        // Hex + copy row with swatch
        h_stack((
            hex_input(hex),
            copy_button(move || hex.get()),
            empty().style(|s| s.flex_grow(1.0)),
            empty().style(move |st| {
                let (r, g, b) = hsl.get().to_color().to_rgb8();
                st.width(32.0)
                    .height(32.0)
                    .border_radius(constants::RADIUS)
                    .border(1.0)
                    .border_color(PenikoColor::rgb8(180, 180, 180))
                    .background(PenikoColor::rgb8(r, g, b))
            }),
        ))
        .style(|st| st.gap(constants::GAP).items_center().margin_horiz(8.0)),
        // HSL inputs row
        h_stack((
            number_input("H", h, 1.0, 360.0),
            number_input("S", s, 100.0, 100.0),
            number_input("L", l, 100.0, 100.0),
            copy_button(move || {
                let n = hsl.get().normalized();
                format!(
                    "{}, {}, {}",
                    n.hue.round() as i64,
                    (n.saturation * 100.0).round() as i64,
                    (n.lightness * 100.0).round() as i64,
                )
            }),
        ))
        .style(|st| st.gap(constants::GAP / 2.0).items_center().justify_center()),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding_horiz(constants::PADDING)
            .padding_bottom(constants::PADDING)
            .padding_top(2.0)
            .justify_center()
            .background(PenikoColor::rgb8(242, 242, 242))
    })
}
