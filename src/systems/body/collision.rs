//! Body-vs-body contact: detection and impulse response.
//!
//! The response is a clamped impulse along the contact normal, not a full
//! rigid-body solver. Only the initiating body's damping scales the impulse.

use super::body::Body;

/// Coefficient of restitution before damping (1.0 = perfectly elastic)
pub const RESTITUTION: f32 = 1.0;

/// Clamp on the impulse magnitude, keeps velocities from running away
pub const MAX_IMPULSE: f32 = 0.1;

/// Below this center distance the contact normal is undefined
pub const COINCIDENT_EPSILON: f32 = 1e-6;

/// What `resolve_collision` did with a contact
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Impulse applied to both bodies
    Resolved,
    /// Bodies already moving apart along the normal; nothing changed
    Separating,
    /// Centers coincide, no normal to push along; nothing changed
    Coincident,
}

impl Body {
    /// True iff the circles overlap (center distance strictly below the radius sum)
    #[inline]
    pub fn detect_collision(&self, other: &Body) -> bool {
        self.position().distance(other.position()) < self.radius + other.radius
    }

    /// Push `self` and `other` apart along the line between their centers.
    ///
    /// Velocities only; positions are left for `update_position`.
    pub fn resolve_collision(&mut self, other: &mut Body, dt: f32) -> ContactOutcome {
        let delta = other.position() - self.position();
        let distance = delta.length();
        if distance <= COINCIDENT_EPSILON {
            return ContactOutcome::Coincident;
        }

        let normal = delta / distance;
        let relative = other.velocity() - self.velocity();
        let vel_along_normal = relative.dot(normal);

        if vel_along_normal > 0.0 {
            return ContactOutcome::Separating;
        }

        let impulse = (-(1.0 + RESTITUTION) * vel_along_normal * self.damping)
            .clamp(-MAX_IMPULSE, MAX_IMPULSE);

        let dv = normal * (impulse * dt);
        self.vx -= dv.x;
        self.vy -= dv.y;
        other.vx += dv.x;
        other.vy += dv.y;

        ContactOutcome::Resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_strict() {
        let a = Body::new(0.3, 0.5, 0.0, 0.0, 0.05);
        let inside = Body::new(0.39, 0.5, 0.0, 0.0, 0.05);
        let far = Body::new(0.7, 0.5, 0.0, 0.0, 0.05);
        assert!(!a.detect_collision(&far));
        assert!(a.detect_collision(&inside));
        assert!(inside.detect_collision(&a));

        // Exactly representable: distance 0.25 == 0.125 + 0.125
        let left = Body::new(0.25, 0.5, 0.0, 0.0, 0.125);
        let touching = Body::new(0.5, 0.5, 0.0, 0.0, 0.125);
        assert!(!left.detect_collision(&touching));
    }

    #[test]
    fn coincident_bodies_collide_but_are_not_resolved() {
        let mut a = Body::new(0.5, 0.5, 0.3, 0.0, 0.05);
        let mut b = Body::new(0.5, 0.5, -0.3, 0.0, 0.05);
        assert!(a.detect_collision(&b));
        assert_eq!(a.resolve_collision(&mut b, 1.0), ContactOutcome::Coincident);
        assert_eq!(a.vx, 0.3);
        assert_eq!(b.vx, -0.3);
        assert!(a.vx.is_finite() && a.vy.is_finite());
    }

    #[test]
    fn separating_bodies_keep_their_velocities() {
        let mut a = Body::new(0.40, 0.5, -0.2, 0.1, 0.05);
        let mut b = Body::new(0.45, 0.5, 0.2, 0.1, 0.05);
        let (a0, b0) = (a.clone(), b.clone());
        assert_eq!(a.resolve_collision(&mut b, 0.5), ContactOutcome::Separating);
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn small_closing_speed_gives_unclamped_impulse() {
        let mut a = Body::new(0.40, 0.5, 0.01, 0.0, 0.05).with_damping(0.5);
        let mut b = Body::new(0.45, 0.5, -0.01, 0.0, 0.05);
        assert_eq!(a.resolve_collision(&mut b, 1.0), ContactOutcome::Resolved);
        // vel_along_normal = -0.02, impulse = 2 * 0.02 * 0.5 = 0.02
        assert!((a.vx - (0.01 - 0.02)).abs() < 1e-6);
        assert!((b.vx - (-0.01 + 0.02)).abs() < 1e-6);
        assert_eq!(a.vy, 0.0);
        assert_eq!(b.vy, 0.0);
    }

    #[test]
    fn impulse_is_clamped_for_fast_contacts() {
        let dt = 0.25;
        let mut a = Body::new(0.40, 0.40, 50.0, 50.0, 0.05).with_damping(1.0);
        let mut b = Body::new(0.43, 0.44, -80.0, -20.0, 0.05);
        let (a0, b0) = (a.clone(), b.clone());
        assert_eq!(a.resolve_collision(&mut b, dt), ContactOutcome::Resolved);

        let bound = MAX_IMPULSE * dt + 1e-5;
        assert!((a.vx - a0.vx).abs() <= bound);
        assert!((a.vy - a0.vy).abs() <= bound);
        assert!((b.vx - b0.vx).abs() <= bound);
        assert!((b.vy - b0.vy).abs() <= bound);
        // Momentum-like symmetry: what a loses b gains
        assert!(((a.vx - a0.vx) + (b.vx - b0.vx)).abs() < 1e-4);
    }

    #[test]
    fn only_the_initiating_damping_scales_the_impulse() {
        let mut soft = Body::new(0.40, 0.5, 0.01, 0.0, 0.05).with_damping(0.25);
        let mut hard = Body::new(0.45, 0.5, -0.01, 0.0, 0.05).with_damping(1.0);
        soft.resolve_collision(&mut hard, 1.0);
        // impulse = 2 * 0.02 * 0.25 = 0.01
        assert!((hard.vx - (-0.01 + 0.01)).abs() < 1e-6);

        let mut soft = Body::new(0.40, 0.5, 0.01, 0.0, 0.05).with_damping(0.25);
        let mut hard = Body::new(0.45, 0.5, -0.01, 0.0, 0.05).with_damping(1.0);
        hard.resolve_collision(&mut soft, 1.0);
        // impulse = 2 * 0.02 * 1.0 = 0.04, normal now points from hard to soft
        assert!((hard.vx - (-0.01 + 0.04)).abs() < 1e-6);
    }

    #[test]
    fn resolution_does_not_move_bodies() {
        let mut a = Body::new(0.40, 0.5, 1.0, 0.0, 0.05);
        let mut b = Body::new(0.45, 0.5, -1.0, 0.0, 0.05);
        a.resolve_collision(&mut b, 0.01);
        assert_eq!((a.x, a.y), (0.40, 0.5));
        assert_eq!((b.x, b.y), (0.45, 0.5));
    }
}
