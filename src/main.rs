#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use daylight_egui::{
    site::{Site, DEFAULT_YEAR},
    sun::SpaCalculator,
    table::DaylightTable,
    DaylightApp,
};

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;

    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let site = Site::islamabad();
    let table = DaylightTable::generate(&site, DEFAULT_YEAR, &SpaCalculator::default())
        .with_context(|| format!("computing daylight table for {}", site.name))?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 650.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Daylight",
        native_options,
        Box::new(|_cc| Box::new(DaylightApp::new(table))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
}

// When compiling to web using trunk:
#[cfg(target_arch = "wasm32")]
fn main() {
    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let table = match DaylightTable::generate(
            &Site::islamabad(),
            DEFAULT_YEAR,
            &SpaCalculator::default(),
        ) {
            Ok(table) => table,
            Err(err) => {
                log::error!("Cannot compute the daylight table: {err}");
                return;
            }
        };

        eframe::WebRunner::new()
            .start(
                "the_canvas_id", // hardcode it
                web_options,
                Box::new(|_cc| Box::new(DaylightApp::new(table))),
            )
            .await
            .expect("failed to start eframe");
    });
}
