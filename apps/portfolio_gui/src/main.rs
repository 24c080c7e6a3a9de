use std::path::PathBuf;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::{
    backend_bridge::commands::BackendCommand,
    config::{load_settings, SettingsOverrides},
    controller::events::UiEvent,
    ui::PortfolioApp,
};

#[derive(Parser, Debug)]
#[command(about = "Artist portfolio page")]
struct Args {
    /// Settings file; defaults to ./portfolio.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Deliver contact messages to this URL instead of simulating delivery.
    #[arg(long)]
    contact_endpoint: Option<String>,
    /// Delay of the simulated delivery.
    #[arg(long)]
    submit_delay_ms: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let overrides = SettingsOverrides {
        contact_endpoint: args.contact_endpoint,
        submit_delay_ms: args.submit_delay_ms,
    };
    let settings =
        load_settings(args.config.as_deref(), &overrides).context("failed to load settings")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();

    let submitter =
        page_core::submitter_for(settings.contact_endpoint.as_deref(), settings.submit_delay())
            .context("failed to set up contact delivery")?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, submitter);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&settings.window_title)
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        &settings.window_title,
        options,
        Box::new(|_cc| Ok(Box::new(PortfolioApp::new(cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow::anyhow!("portfolio window failed: {err}"))
}
