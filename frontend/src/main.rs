//! Multiwatch application.
//!
//! Supports both WASM (the browser wall) and native (preview window) modes.

#![warn(clippy::all, rust_2018_idioms)]

// ============================================================================
// WASM Entry Point
// ============================================================================

#[cfg(target_arch = "wasm32")]
fn main() {
    // Initialize panic handler for better error messages in browser console
    console_error_panic_hook::set_once();

    // Initialize tracing for WASM
    tracing_wasm::set_as_global_default();

    let result = multiwatch_frontend::WallConfig::embedded()
        .map_err(anyhow::Error::from)
        .and_then(|config| multiwatch_frontend::web::start(config).map_err(anyhow::Error::from));

    if let Err(e) = result {
        tracing::error!("Failed to start Multiwatch: {:#}", e);
    }
}

// ============================================================================
// Native Entry Point
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    let config = multiwatch_frontend::WallConfig::from_figment()?;

    // Config log level overrides RUST_LOG
    let filter = match config.log_level.as_deref() {
        Some(level) => tracing_subscriber::EnvFilter::new(level),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Multiwatch in native mode");

    multiwatch_frontend::run_native(config)
        .map_err(|e| anyhow::anyhow!("Native preview failed: {}", e))
}
