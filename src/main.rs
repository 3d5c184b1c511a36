//! Team Chat client - a workspace chat client built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI
//! - Backend thread: runs a Tokio runtime serving the workspace store
//! - Communication via crossbeam channels (lock-free, sync-safe)

use eframe::egui;
use tracing_subscriber::EnvFilter;

use teamchat_client::app::ChatApp;
use teamchat_client::config::load_settings;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("teamchat_client=info")),
        )
        .init();

    let settings = load_settings();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Team Chat",
        options,
        Box::new(|cc| Ok(Box::new(ChatApp::new(cc, settings)))),
    )
}
