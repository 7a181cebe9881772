//! Clicky - Main Entry Point
//!
//! Toggle label and selectable square exercises on GPUI.

use clicky::app::application::run_app;
use clicky::domain::config::AppConfig;
use clicky::utils::config_store;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Clicky...");

    let config = config_store::load_or_init().unwrap_or_else(|err| {
        tracing::warn!("Failed to load config, using defaults: {err}");
        AppConfig::default()
    });

    run_app(config);
}
