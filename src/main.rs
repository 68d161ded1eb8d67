#![warn(clippy::all, rust_2018_idioms)]

use eframe_slider::{SliderApp, SliderConfig};

/// Optional first argument: path to a JSON file configuring the arc slider
fn arc_config() -> SliderConfig {
    let fallback = SliderConfig::arc(3, 100.0, 200.0, 40, 60);
    let Some(path) = std::env::args().nth(1) else {
        return fallback;
    };

    match std::fs::read_to_string(&path) {
        Ok(json) => SliderConfig::from_json(&json).unwrap_or_else(|err| {
            log::error!("Ignoring slider config {}: {}", path, err);
            fallback
        }),
        Err(err) => {
            log::error!("Failed to read slider config {}: {}", path, err);
            fallback
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = arc_config();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "eframe slider",
        native_options,
        Box::new(|cc| Ok(Box::new(SliderApp::new(cc, config)?))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
