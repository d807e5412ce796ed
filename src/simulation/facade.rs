use wasm_bindgen::prelude::*;

use crate::domain::SimulationConfig;

use super::perf_stats::PerfStats;
use super::SimulationCore;

/// JS handle on a simulation. The page owns one of these and calls `step`
/// from its animation callback.
#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create `count` bodies of the given radius, seeded from `Math.random`
    #[wasm_bindgen(constructor)]
    pub fn new(count: u32, radius: f32) -> Result<Simulation, JsValue> {
        let mut config = SimulationConfig::new(count as usize, radius);
        config.seed = (js_sys::Math::random() * u32::MAX as f64) as u32;
        Self::build(config)
    }

    /// Create from a JSON config; missing fields take their defaults
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: String) -> Result<Simulation, JsValue> {
        let config = SimulationConfig::from_json(&json).map_err(|e| {
            console_warn!("rejected simulation config: {}", e);
            JsValue::from_str(&e.to_string())
        })?;
        Self::build(config)
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn elapsed(&self) -> f64 { self.core.elapsed() }

    /// Advance one frame
    pub fn step(&mut self, dt: f32) {
        self.core.step(dt);
    }

    pub fn set_gravity(&mut self, g: f32) {
        self.core.set_gravity(g);
    }

    pub fn set_damping(&mut self, d: f32) {
        self.core.set_damping(d);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Overlapping pairs found in the last step
    pub fn last_contacts(&self) -> u64 {
        self.core.last_step().contacts
    }

    // === RENDER API ===

    /// Get body X (normalized), 0 when out of range
    pub fn body_x(&self, idx: usize) -> f32 {
        self.core.body(idx).map(|b| b.x).unwrap_or(0.0)
    }

    /// Get body Y (normalized)
    pub fn body_y(&self, idx: usize) -> f32 {
        self.core.body(idx).map(|b| b.y).unwrap_or(0.0)
    }

    pub fn body_radius(&self, idx: usize) -> f32 {
        self.core.body(idx).map(|b| b.radius).unwrap_or(0.0)
    }

    /// Copy of interleaved (x, y, vx, vy), arrives in JS as a Float32Array
    pub fn export_state(&self) -> Vec<f32> {
        self.core.export_state()
    }

    /// Refresh the export buffer and return its pointer into wasm memory
    pub fn extract_export(&mut self) -> *const f32 {
        self.core.export_buffer();
        self.core.export_ptr()
    }

    /// Export buffer length in floats (4 per body)
    pub fn export_len(&self) -> usize {
        self.core.export_len()
    }

    /// Refresh the (x, y, radius) buffer and return its pointer
    pub fn extract_render(&mut self) -> *const f32 {
        self.core.render_buffer();
        self.core.render_ptr()
    }

    /// Render buffer length in floats (3 per body)
    pub fn render_len(&self) -> usize {
        self.core.render_len()
    }
}

impl Simulation {
    fn build(config: SimulationConfig) -> Result<Simulation, JsValue> {
        let core = SimulationCore::with_config(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }
}
