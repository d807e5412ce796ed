use super::SimulationCore;

/// Floats per body in the export buffer: x, y, vx, vy
pub const EXPORT_STRIDE: usize = 4;

/// Floats per body in the render buffer: x, y, radius
pub const RENDER_STRIDE: usize = 3;

/// What the renderer needs for one body. Coordinates are normalized to the
/// unit square; mapping to pixels is the renderer's job.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

pub(super) fn render_view(sim: &SimulationCore) -> impl Iterator<Item = BodyView> + '_ {
    sim.bodies.iter().map(|b| BodyView {
        x: b.x,
        y: b.y,
        radius: b.radius,
    })
}

pub(super) fn export_state(sim: &SimulationCore) -> Vec<f32> {
    let mut out = Vec::with_capacity(sim.bodies.len() * EXPORT_STRIDE);
    for b in sim.bodies.iter() {
        out.extend_from_slice(&[b.x, b.y, b.vx, b.vy]);
    }
    out
}

/// Overwrite the export buffer in place (no allocation per frame)
pub(super) fn extract_export(sim: &mut SimulationCore) -> &[f32] {
    let buf = &mut sim.render.export;
    for (chunk, b) in buf.chunks_exact_mut(EXPORT_STRIDE).zip(sim.bodies.iter()) {
        chunk[0] = b.x;
        chunk[1] = b.y;
        chunk[2] = b.vx;
        chunk[3] = b.vy;
    }
    &sim.render.export
}

pub(super) fn extract_render(sim: &mut SimulationCore) -> &[f32] {
    let buf = &mut sim.render.view;
    for (chunk, b) in buf.chunks_exact_mut(RENDER_STRIDE).zip(sim.bodies.iter()) {
        chunk[0] = b.x;
        chunk[1] = b.y;
        chunk[2] = b.radius;
    }
    &sim.render.view
}
