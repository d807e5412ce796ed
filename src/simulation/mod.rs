//! Simulation - fixed set of bouncing bodies in the unit square
//!
//! `SimulationCore` only orchestrates; the physics lives on `Body`
//! (motion, wall bounce, contact response). One `step(dt)` is two phases:
//! 1. Collision pass over every unordered pair, velocities only
//! 2. Integration pass, positions updated from the new velocities
//!
//! `facade::Simulation` wraps the core for JS.

use crate::domain::{SimulationConfig, SimulationError};
use crate::systems::body::Body;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/collisions.rs"]
mod collisions;
#[path = "step/integrate.rs"]
mod integrate;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use collisions::StepSummary;
pub use facade::Simulation;
pub use perf_stats::PerfStats;
pub use render_extract::{BodyView, EXPORT_STRIDE, RENDER_STRIDE};

use perf_timer::PerfTimer;

/// Flat f32 buffers handed to the JS renderer
pub(crate) struct RenderBuffers {
    /// (x, y, vx, vy) per body
    export: Vec<f32>,
    /// (x, y, radius) per body
    view: Vec<f32>,
}

/// The simulation state
pub struct SimulationCore {
    bodies: Vec<Body>,

    // State
    frame: u64,
    elapsed: f64,
    last_step: StepSummary,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Create `count` bodies of the given radius at random positions
    pub fn new(count: usize, radius: f32) -> Result<Self, SimulationError> {
        Self::with_config(SimulationConfig::new(count, radius))
    }

    pub fn with_config(config: SimulationConfig) -> Result<Self, SimulationError> {
        init::create_simulation_core(&config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, SimulationError> {
        let config = SimulationConfig::from_json(json)?;
        Self::with_config(config)
    }

    /// Build from explicit bodies (scenarios, tests). Order is kept.
    pub fn from_bodies(bodies: Vec<Body>) -> Result<Self, SimulationError> {
        init::create_from_bodies(bodies)
    }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn frame(&self) -> u64 { self.frame }

    /// Sum of every `dt` passed to `step`
    pub fn elapsed(&self) -> f64 { self.elapsed }

    /// Read-only view of the bodies, in insertion order
    pub fn bodies(&self) -> &[Body] { &self.bodies }

    pub fn body(&self, idx: usize) -> Option<&Body> { self.bodies.get(idx) }

    /// Counters from the most recent `step`
    pub fn last_step(&self) -> StepSummary { self.last_step }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Set the downward acceleration of every body
    pub fn set_gravity(&mut self, g: f32) {
        settings::set_gravity(self, g);
    }

    /// Set damping of every body (clamped like `Body::set_damping`)
    pub fn set_damping(&mut self, d: f32) {
        settings::set_damping(self, d);
    }

    /// Advance one frame. `dt` must be finite and non-negative.
    pub fn step(&mut self, dt: f32) {
        step::step(self, dt);
    }

    /// Ordered (x, y, radius) view for the renderer
    pub fn render_view(&self) -> impl Iterator<Item = BodyView> + '_ {
        render_extract::render_view(self)
    }

    /// Fresh interleaved (x, y, vx, vy) buffer
    pub fn export_state(&self) -> Vec<f32> {
        render_extract::export_state(self)
    }

    /// Refresh the internal export buffer and borrow it
    pub fn export_buffer(&mut self) -> &[f32] {
        render_extract::extract_export(self)
    }

    /// Refresh the internal (x, y, radius) buffer and borrow it
    pub fn render_buffer(&mut self) -> &[f32] {
        render_extract::extract_render(self)
    }

    /// Get pointer to export buffer (for JS views over wasm memory)
    pub fn export_ptr(&self) -> *const f32 {
        self.render.export.as_ptr()
    }

    pub fn export_len(&self) -> usize {
        self.render.export.len()
    }

    /// Get pointer to render buffer
    pub fn render_ptr(&self) -> *const f32 {
        self.render.view.as_ptr()
    }

    pub fn render_len(&self) -> usize {
        self.render.view.len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
