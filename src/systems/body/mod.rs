//! Body - a single circular particle in the unit square
//!
//! Owns its own motion (gravity + integration), wall bounce and the
//! pairwise contact response. The simulation only decides *which* pairs meet.

mod body;
mod collision;
mod vec2;

pub use body::{Body, MIN_DAMPING};
pub use collision::{ContactOutcome, COINCIDENT_EPSILON, MAX_IMPULSE, RESTITUTION};
pub use vec2::Vec2;
