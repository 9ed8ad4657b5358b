mod app;
mod color;
mod config;
mod data;
mod projection;
mod state;
mod ui;

use app::RustyReelsApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::default();

    // One-shot load of the fixed dataset; a failure is shown in place of the dashboard.
    let mut state = AppState::new(config.clone());
    state.load(&config.data_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title)
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        config.title,
        options,
        Box::new(move |_cc| Ok(Box::new(RustyReelsApp::new(state)))),
    )
}
