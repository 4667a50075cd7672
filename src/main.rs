//! Article Board - blog article listing
//!
//! Lists articles, posts new ones from a form, deletes them and folds long
//! bodies behind a Read More toggle.

mod app;
mod core;
mod ui;

use app::BoardApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting Article Board...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Article Board"),
        ..Default::default()
    };

    eframe::run_native(
        "Article Board",
        native_options,
        Box::new(|cc| Ok(Box::new(BoardApp::new(cc)))),
    )
}
