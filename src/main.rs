use eframe::{egui, NativeOptions};

mod screens;
mod theme;
mod ui_components;
mod utils;

const DEFAULT_W: f32 = 1280.0;
const DEFAULT_H: f32 = 800.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut native_options = NativeOptions::default();
    native_options.renderer = eframe::Renderer::Wgpu;
    native_options.viewport =
        egui::ViewportBuilder::default().with_inner_size([DEFAULT_W, DEFAULT_H]);

    let result = eframe::run_native(
        "Gradient Studio",
        native_options,
        Box::new(|cc| {
            theme::apply_viewer_theme(&cc.egui_ctx);
            Ok(Box::new(screens::viewer::ViewerApp::new(cc)))
        }),
    );

    if let Err(e) = result {
        eprintln!("Application error: {}", e);
    }
}
