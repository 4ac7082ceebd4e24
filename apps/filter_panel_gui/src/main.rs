mod config;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use tracing_subscriber::EnvFilter;

use crate::config::StartupArgs;
use crate::controller::events::UiEvent;
use crate::ui::FilterPanelApp;

const UI_EVENT_QUEUE_CAPACITY: usize = 256;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = StartupArgs::parse();
    let settings = config::load_settings(&args.config)?.with_args(&args);
    let initial = settings
        .initial_selection()
        .context("invalid initial filter selection")?;
    tracing::info!(
        consultation_mode = ?initial.consultation_mode,
        specialties = initial.specialties().len(),
        sort_key = ?initial.sort_key,
        "starting filter panel"
    );

    let (ui_tx, ui_rx) = bounded::<UiEvent>(UI_EVENT_QUEUE_CAPACITY);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([960.0, 680.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        &settings.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(FilterPanelApp::new(initial, ui_tx, ui_rx)))),
    )
    .map_err(|err| anyhow::anyhow!("filter panel exited with error: {err}"))
}
