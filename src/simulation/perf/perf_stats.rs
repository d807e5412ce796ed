use wasm_bindgen::prelude::*;

/// Snapshot of the last `step`, filled only while perf metrics are enabled
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) collision_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) pairs_tested: u64,
    pub(super) contacts: u64,
    pub(super) resolved: u64,
    pub(super) separating: u64,
    pub(super) coincident: u64,
    pub(super) wall_contacts: u64,
    pub(super) body_count: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn collision_ms(&self) -> f64 { self.collision_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn pairs_tested(&self) -> u64 { self.pairs_tested }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u64 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn resolved(&self) -> u64 { self.resolved }
    #[wasm_bindgen(getter)]
    pub fn separating(&self) -> u64 { self.separating }
    #[wasm_bindgen(getter)]
    pub fn coincident(&self) -> u64 { self.coincident }
    /// Bodies resting against a wall after integration
    #[wasm_bindgen(getter)]
    pub fn wall_contacts(&self) -> u64 { self.wall_contacts }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u64 { self.body_count }
}
