//! Q&A board app — the composition root.
//!
//! Assembles the storage backend, the message board, and the egui panels.
//! Native builds enter through `main.rs`; wasm builds through [`start`],
//! which renders into a canvas on the page.

mod app;

pub use app::QandaApp;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// WASM entry point — called from index.html
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Q&A board starting...");

    let web_options = eframe::WebOptions::default();

    let document = web_sys::window()
        .expect("No window")
        .document()
        .expect("No document");
    let canvas = document
        .get_element_by_id("qanda_canvas")
        .expect("No canvas element with id 'qanda_canvas'")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .expect("Element is not a canvas");

    wasm_bindgen_futures::spawn_local(async move {
        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(QandaApp::new(cc)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
