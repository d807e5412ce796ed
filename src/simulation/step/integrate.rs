use crate::systems::body::Body;

/// Integration phase: move every body once, in collection order
pub(super) fn integrate(bodies: &mut [Body], dt: f32) {
    for body in bodies.iter_mut() {
        body.update_position(dt);
    }
}

/// Count bodies pressed against a wall (perf only)
pub(super) fn count_wall_contacts(bodies: &[Body]) -> u64 {
    bodies.iter().filter(|b| b.touches_wall()).count() as u64
}
