//! Pointbox Engine - bouncing-body particle simulation in WASM
//!
//! Architecture:
//! - core/        - Logging macros
//! - domain/      - Config and errors
//! - systems/     - Body physics (motion, wall bounce, contact response)
//! - simulation/  - Orchestration, render/export buffers, JS facade

#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use systems::body;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Pointbox engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use body::{Body, ContactOutcome, Vec2};
pub use domain::{SimulationConfig, SimulationError};
pub use simulation::{BodyView, PerfStats, Simulation, SimulationCore, StepSummary};
