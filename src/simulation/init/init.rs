use crate::domain::config::{validate_damping, validate_radius};
use crate::domain::{SimulationConfig, SimulationError};
use crate::systems::body::Body;

use super::perf_stats::PerfStats;
use super::random::{next_range, next_unit, seed_state};
use super::render_extract::{EXPORT_STRIDE, RENDER_STRIDE};
use super::{RenderBuffers, SimulationCore, StepSummary};

pub(super) fn create_simulation_core(config: &SimulationConfig) -> Result<SimulationCore, SimulationError> {
    config.validate()?;

    let mut rng_state = seed_state(config.seed);
    let bodies: Vec<Body> = (0..config.count)
        .map(|_| {
            let x = next_unit(&mut rng_state);
            let y = next_unit(&mut rng_state);
            let vx = next_range(&mut rng_state, config.velocity_min, config.velocity_max);
            let vy = next_range(&mut rng_state, config.velocity_min, config.velocity_max);
            Body {
                damping: config.damping,
                gravity: config.gravity,
                ..Body::new(x, y, vx, vy, config.radius)
            }
        })
        .collect();

    console_log!(
        "simulation: {} bodies, radius {}, seed {}",
        config.count,
        config.radius,
        config.seed
    );

    Ok(assemble(bodies))
}

pub(super) fn create_from_bodies(bodies: Vec<Body>) -> Result<SimulationCore, SimulationError> {
    if bodies.is_empty() {
        return Err(SimulationError::invalid("count must be greater than zero"));
    }
    for (i, body) in bodies.iter().enumerate() {
        validate_radius(body.radius)?;
        validate_damping(body.damping)?;
        let state = [body.x, body.y, body.vx, body.vy, body.gravity];
        if state.iter().any(|v| !v.is_finite()) {
            return Err(SimulationError::invalid(format!(
                "body {i} has a non-finite position, velocity or gravity"
            )));
        }
    }
    Ok(assemble(bodies))
}

fn assemble(bodies: Vec<Body>) -> SimulationCore {
    let n = bodies.len();
    SimulationCore {
        bodies,
        frame: 0,
        elapsed: 0.0,
        last_step: StepSummary::default(),
        render: RenderBuffers {
            export: vec![0.0; n * EXPORT_STRIDE],
            view: vec![0.0; n * RENDER_STRIDE],
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
