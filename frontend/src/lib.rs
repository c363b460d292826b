//! Multiwatch frontend library.
//!
//! Slot assignment, the wall controller, input mapping and the rendering
//! surfaces for the browser page and the native preview.

#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod controller;
pub mod embed;
pub mod input;
pub mod render;
pub mod view;
pub mod wall;

#[cfg(not(target_arch = "wasm32"))]
mod app;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{ConfigError, WallConfig};
pub use controller::{WallChange, WallController};
pub use input::{ClickTarget, Key, WallCommand};
pub use wall::{SlotAssignment, ToggleOutcome};

#[cfg(not(target_arch = "wasm32"))]
pub use app::MultiwatchApp;

/// Run the native preview window.
#[cfg(not(target_arch = "wasm32"))]
pub fn run_native(config: WallConfig) -> eframe::Result<()> {
    tracing::info!(
        "Starting native preview with {} channels",
        config.registry.len()
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title("Multiwatch"),
        ..Default::default()
    };

    eframe::run_native(
        "Multiwatch",
        native_options,
        Box::new(move |cc| Ok(Box::new(MultiwatchApp::new(cc, config)))),
    )
}
