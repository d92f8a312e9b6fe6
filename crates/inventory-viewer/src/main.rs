//! Entry point for the inventory detail viewer.
//!
//! Shows one host from an in-memory inventory in a Dioxus desktop window.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use inventory_core::MemoryInventory;
use inventory_ui::INVENTORY_CSS;
use inventory_viewer::app::{self, RootApp, ViewerContext};
use inventory_viewer::config::{Args, ViewerConfig, demo_entity, load_entity_file};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = ViewerConfig::resolve(&args)?;

    // RUST_LOG wins over the configured level
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::info!("Starting Inventory Viewer");

    let entity = match &args.entity {
        Some(path) => load_entity_file(path)?,
        None => demo_entity(),
    };

    let store = MemoryInventory::new().with_latency(Duration::from_millis(config.latency_ms));
    store.set_fail_edits(config.fail_edits);
    let entity_id = store.insert(entity)?;
    tracing::info!(id = %entity_id, latency_ms = config.latency_ms, "Entity loaded into store");

    let window_title = config.window_title.clone();
    app::install(ViewerContext {
        store: Arc::new(store),
        entity_id,
        config,
    });

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(window_title)
                        .with_inner_size(LogicalSize::new(1100, 760)),
                )
                .with_custom_head(format!("<style>{}</style>", INVENTORY_CSS)),
        )
        .launch(RootApp);

    Ok(())
}
