//! Standalone demo: opens a window with the color wheel editor.
//!
//! Set `RUST_LOG=floem_hsl_wheel=trace` to watch hit-testing.

use floem::prelude::*;
use floem::reactive::{create_effect, SignalGet};
use floem::window::WindowConfig;
use floem_hsl_wheel::{hsl_wheel_with_config, Color, Hsl, WheelConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let start = Color::parse("#3b82f6").map(Color::to_hsl).unwrap_or_default();
    let hsl = RwSignal::new(start);
    let config = RwSignal::new(WheelConfig::default());

    create_effect(move |_| {
        let value: Hsl = hsl.get();
        tracing::info!(color = %value.to_color(), hsl = %value, "color changed");
    });

    floem::Application::new()
        .window(
            move |_| {
                hsl_wheel_with_config(hsl, config).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((232.0, 340.0))
                    .title("floem-hsl-wheel"),
            ),
        )
        .run();
}
