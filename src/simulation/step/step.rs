use super::collisions::resolve_collisions;
use super::integrate::{count_wall_contacts, integrate};
use super::perf_timer::timed;
use super::{PerfTimer, SimulationCore};

pub(super) fn step(sim: &mut SimulationCore, dt: f32) {
    debug_assert!(dt.is_finite() && dt >= 0.0, "step: dt must be finite and >= 0, got {dt}");

    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
        sim.perf_stats.body_count = sim.bodies.len() as u64;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // === COLLISION PHASE ===
    // Every pair sees pre-integration positions; only velocities change.
    let summary = if perf_on {
        let (summary, ms) = timed(|| resolve_collisions(&mut sim.bodies, dt));
        sim.perf_stats.collision_ms = ms;
        summary
    } else {
        resolve_collisions(&mut sim.bodies, dt)
    };
    sim.last_step = summary;

    // === INTEGRATION PHASE ===
    // Runs only after ALL contacts for the frame are resolved.
    if perf_on {
        let ((), ms) = timed(|| integrate(&mut sim.bodies, dt));
        sim.perf_stats.integrate_ms = ms;
    } else {
        integrate(&mut sim.bodies, dt);
    }

    sim.frame += 1;
    sim.elapsed += dt as f64;

    if let Some(t0) = step_start {
        let stats = &mut sim.perf_stats;
        stats.pairs_tested = summary.pairs_tested;
        stats.contacts = summary.contacts;
        stats.resolved = summary.resolved;
        stats.separating = summary.separating;
        stats.coincident = summary.coincident;
        stats.wall_contacts = count_wall_contacts(&sim.bodies);
        stats.step_ms = t0.elapsed_ms();
    }
}
