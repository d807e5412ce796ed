use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(sim: &SimulationCore) -> PerfStats {
    sim.perf_stats.clone()
}

pub(super) fn set_gravity(sim: &mut SimulationCore, g: f32) {
    for body in sim.bodies.iter_mut() {
        body.gravity = g;
    }
}

pub(super) fn set_damping(sim: &mut SimulationCore, d: f32) {
    for body in sim.bodies.iter_mut() {
        body.set_damping(d);
    }
}
