//! Conway Engine - toroidal Game of Life board in WASM
//!
//! Architecture:
//! - core/        - errors, logging, indexing macros
//! - spatial/     - toroidal grid storage and neighbor counts
//! - domain/      - coordinates, change sets, pattern library
//! - simulation/  - BoardEngine orchestration + JS facade

// Macros must be loaded first for `fast!`
#[macro_use]
pub mod core;
pub mod spatial;
pub mod domain;
pub mod simulation;

pub use spatial::grid;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_logging(log::LevelFilter::Info);
    log::info!("Conway WASM engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::EngineError;
pub use domain::{ChangeSet, Coord, Pattern, PatternLibrary};
pub use simulation::{BoardEngine, EngineConfig, Life, PerfStats, Snapshot};
