//! Native entry point — the Q&A board in a desktop window.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init();
    log::info!("Q&A board starting...");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Session Q&A",
        options,
        Box::new(|cc| Ok(Box::new(qanda_app::QandaApp::new(cc)))),
    )
}

// The wasm build enters through the library's `start` instead
#[cfg(target_arch = "wasm32")]
fn main() {}
