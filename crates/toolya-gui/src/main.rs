#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod handlers;
mod logger;
mod ui_components;
mod views;
mod worker;

fn main() -> eframe::Result<()> {
    let app_logger = logger::AppLogger::new(200);
    if app_logger.clone().init().is_err() {
        eprintln!("a logger is already installed; the log panel will stay empty");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to start tokio runtime");
    let tokio_handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_title("Toolya"),
        ..Default::default()
    };

    eframe::run_native(
        "Toolya",
        options,
        Box::new(move |cc| Ok(Box::new(app::ToolyaApp::new(cc, tokio_handle, app_logger)))),
    )
}
