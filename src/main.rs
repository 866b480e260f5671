mod actions;
mod app;
mod canvas;
mod error;
mod heat_map;
mod navigation;
mod shell;
mod types;

use types::WindowSettings;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = WindowSettings::default();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(settings.title)
            .with_inner_size(settings.inner_size)
            .with_min_inner_size(settings.min_inner_size),
        ..Default::default()
    };

    eframe::run_native(
        settings.title,
        options,
        Box::new(|cc| Ok(Box::new(app::PotentialFractalsApp::new(cc)))),
    )
}
